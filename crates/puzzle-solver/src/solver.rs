//! Depth-first and breadth-first solvers for full-information puzzles.
//!
//! Both solvers return the single path from the initial state to the first
//! solved state they reach, or an empty path when the reachable space is
//! exhausted. A seen set of fingerprints guards against cycles and lets the
//! caller forbid states up front.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::puzzle::{Path, Puzzle, SeenSet};
use crate::queue::Queue;

/// A search strategy over a puzzle's state graph.
pub trait Solver {
    /// Return a path from `puzzle` to a solved state.
    ///
    /// The first state of the path is `puzzle`, each following state is one of
    /// its predecessor's extensions and the last state is solved. An empty
    /// path means no solution exists without passing through a fingerprint
    /// in `seen`.
    ///
    /// `seen` holds fingerprints that may not appear on the path. It is used
    /// as scratch space for the duration of the call, so a caller-supplied set
    /// comes back extended with every state the search visited. When `None`,
    /// the search owns a fresh set.
    ///
    /// Errors raised by [`Puzzle::extensions`] abort the search and are
    /// returned unchanged.
    fn solve<P: Puzzle>(
        &self,
        puzzle: P,
        seen: Option<&mut SeenSet>,
    ) -> Result<Path<P>, P::Error>;
}

/// Which solver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Depth-first with backtracking
    Dfs,
    /// Breadth-first, level by level
    Bfs,
}

impl Strategy {
    pub fn solve<P: Puzzle>(
        self,
        puzzle: P,
        seen: Option<&mut SeenSet>,
    ) -> Result<Path<P>, P::Error> {
        match self {
            Strategy::Dfs => DfsSolver.solve(puzzle, seen),
            Strategy::Bfs => BfsSolver.solve(puzzle, seen),
        }
    }
}

/// Backtracking depth-first search.
///
/// Extensions are tried in the order the puzzle yields them and the first one
/// that leads to a solution wins. The current branch lives on an explicit
/// stack rather than the call stack, so long paths cannot overflow it; the
/// seen set keeps the branch finite on cyclic graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsSolver;

/// A state on the current branch and the extensions not yet tried from it
struct Frame<P> {
    state: P,
    pending: std::vec::IntoIter<P>,
}

impl DfsSolver {
    /// Visit one state. Returns it if solved, pushes a frame if it should be
    /// expanded, and does nothing if it is pruned.
    fn visit<P: Puzzle>(
        &self,
        state: P,
        seen: &mut SeenSet,
        stack: &mut Vec<Frame<P>>,
        expanded: &mut usize,
    ) -> Result<Option<P>, P::Error> {
        // Must be checked before is_solved: a dead state never starts a path.
        if state.fail_fast() {
            return Ok(None);
        }
        let fingerprint = state.fingerprint();
        if seen.contains(&fingerprint) {
            return Ok(None);
        }
        if state.is_solved() {
            return Ok(Some(state));
        }

        trace!("dfs expanding {:?} at depth {}", fingerprint, stack.len() + 1);
        seen.insert(fingerprint);
        *expanded += 1;

        let pending = state.extensions()?.into_iter();
        stack.push(Frame { state, pending });
        Ok(None)
    }

    fn search<P: Puzzle>(
        &self,
        puzzle: P,
        seen: &mut SeenSet,
        expanded: &mut usize,
    ) -> Result<Path<P>, P::Error> {
        let mut stack: Vec<Frame<P>> = Vec::new();
        let mut next = Some(puzzle);

        loop {
            if let Some(state) = next.take() {
                if let Some(solved) = self.visit(state, seen, &mut stack, expanded)? {
                    let mut path: Path<P> = stack.into_iter().map(|frame| frame.state).collect();
                    path.push(solved);
                    return Ok(path);
                }
            }

            let Some(frame) = stack.last_mut() else {
                return Ok(Vec::new());
            };
            match frame.pending.next() {
                Some(ext) => next = Some(ext),
                None => {
                    stack.pop();
                }
            }
        }
    }
}

impl Solver for DfsSolver {
    fn solve<P: Puzzle>(
        &self,
        puzzle: P,
        seen: Option<&mut SeenSet>,
    ) -> Result<Path<P>, P::Error> {
        let mut owned = SeenSet::new();
        let seen = seen.unwrap_or(&mut owned);
        let mut expanded = 0;

        let path = self.search(puzzle, seen, &mut expanded)?;
        debug!(
            "dfs finished: {} states expanded, path length {}",
            expanded,
            path.len()
        );
        Ok(path)
    }
}

/// Level-order search that reconstructs the path to the first solved state.
///
/// Each frontier entry pairs a state with the states leading to it (the
/// initial state excluded), so every sibling carries its own copy of the
/// prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl Solver for BfsSolver {
    fn solve<P: Puzzle>(
        &self,
        puzzle: P,
        seen: Option<&mut SeenSet>,
    ) -> Result<Path<P>, P::Error> {
        let mut owned = SeenSet::new();
        let seen = seen.unwrap_or(&mut owned);

        if puzzle.fail_fast() || !seen.insert(puzzle.fingerprint()) {
            return Ok(Vec::new());
        }
        if puzzle.is_solved() {
            return Ok(vec![puzzle]);
        }

        let mut frontier: Queue<(P, Path<P>)> = Queue::new();
        frontier.extend(puzzle.extensions()?.into_iter().map(|ext| (ext, Vec::new())));

        let mut expanded = 0;
        while let Some((state, mut path)) = frontier.dequeue() {
            if state.fail_fast() {
                continue;
            }
            let fingerprint = state.fingerprint();
            if seen.contains(&fingerprint) {
                continue;
            }
            trace!("bfs visiting {:?} at depth {}", fingerprint, path.len() + 1);
            seen.insert(fingerprint);

            if state.is_solved() {
                path.push(state);
                debug!(
                    "bfs finished: {} states expanded, {} still queued",
                    expanded,
                    frontier.len()
                );
                let mut solution = Vec::with_capacity(path.len() + 1);
                solution.push(puzzle);
                solution.extend(path);
                return Ok(solution);
            }

            expanded += 1;
            let extensions = state.extensions()?;
            path.push(state);
            for ext in extensions {
                frontier.enqueue((ext, path.clone()));
            }
        }

        debug!("bfs finished: {} states expanded, no solution", expanded);
        Ok(Vec::new())
    }
}
