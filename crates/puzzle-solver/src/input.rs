//! JSON puzzle files.
//!
//! A file names its domain in a `kind` field and carries that domain's
//! starting configuration:
//!
//! ```json
//! { "kind": "sudoku", "grid": [[1, 0, 3, 0], [0, 0, 0, 2], [0, 1, 0, 0], [4, 0, 0, 0]] }
//! { "kind": "word_ladder", "from": "cold", "to": "warm", "dictionary": ["cord", "card", "ward"] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::puzzle::SeenSet;
use crate::report::SolveReport;
use crate::solver::Strategy;
use crate::sudoku::{SudokuError, SudokuPuzzle};
use crate::word_ladder::{WordLadderError, WordLadderPuzzle};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("must provide either a file path or --stdin")]
    MissingInput,
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid sudoku: {0}")]
    Sudoku(#[from] SudokuError),
    #[error("invalid word ladder: {0}")]
    WordLadder(#[from] WordLadderError),
}

/// On-disk puzzle description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleFile {
    /// Rows of values, 0 for an empty cell
    Sudoku { grid: Vec<Vec<u8>> },
    WordLadder {
        from: String,
        to: String,
        dictionary: Vec<String>,
    },
}

impl PuzzleFile {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read(path: &Path) -> Result<Self, InputError> {
        let json = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate the description and build the starting state
    pub fn into_puzzle(self) -> Result<LoadedPuzzle, InputError> {
        Ok(match self {
            PuzzleFile::Sudoku { grid } => LoadedPuzzle::Sudoku(SudokuPuzzle::new(grid)?),
            PuzzleFile::WordLadder {
                from,
                to,
                dictionary,
            } => LoadedPuzzle::WordLadder(WordLadderPuzzle::new(&from, &to, dictionary)?),
        })
    }
}

/// A starting state from any supported domain
#[derive(Debug, Clone)]
pub enum LoadedPuzzle {
    Sudoku(SudokuPuzzle),
    WordLadder(WordLadderPuzzle),
}

impl LoadedPuzzle {
    pub fn solve(self, strategy: Strategy, seen: Option<&mut SeenSet>) -> SolveReport {
        let report = match self {
            LoadedPuzzle::Sudoku(puzzle) => SolveReport::run(strategy, puzzle, seen),
            LoadedPuzzle::WordLadder(puzzle) => SolveReport::run(strategy, puzzle, seen),
        };
        // Neither built-in domain can fail while expanding a state.
        report.unwrap_or_else(|never| match never {})
    }
}
