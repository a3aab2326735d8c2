//! Puzzle solver library.
//!
//! This crate explores the state space of full-information puzzles and
//! returns a path from the starting state to a solved one. Puzzle domains
//! plug in through the [`Puzzle`] trait; [`DfsSolver`] and [`BfsSolver`] are
//! interchangeable search strategies over them.

pub mod input;
pub mod puzzle;
pub mod queue;
pub mod report;
pub mod solver;
pub mod sudoku;
pub mod word_ladder;

// Re-export main types
pub use input::{InputError, LoadedPuzzle, PuzzleFile};
pub use puzzle::{path_is_valid, Path, Puzzle, SeenSet};
pub use queue::Queue;
pub use report::SolveReport;
pub use solver::{BfsSolver, DfsSolver, Solver, Strategy};
pub use sudoku::{SudokuError, SudokuPuzzle};
pub use word_ladder::{WordLadderError, WordLadderPuzzle};
