//! Serializable summary of one solve.

use serde::{Deserialize, Serialize};

use crate::puzzle::{Puzzle, SeenSet};
use crate::solver::Strategy;

/// Output format for a solve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub solved: bool,
    pub strategy: Strategy,
    /// Number of moves from the initial state, 0 when unsolved
    pub moves: usize,
    /// Fingerprint of every state on the path
    pub path: Vec<String>,
}

impl SolveReport {
    /// Solve `puzzle` with `strategy` and summarise the path found
    pub fn run<P: Puzzle>(
        strategy: Strategy,
        puzzle: P,
        seen: Option<&mut SeenSet>,
    ) -> Result<Self, P::Error> {
        let path = strategy.solve(puzzle, seen)?;
        Ok(Self {
            solved: !path.is_empty(),
            strategy,
            moves: path.len().saturating_sub(1),
            path: path.iter().map(P::fingerprint).collect(),
        })
    }
}
