//! The capability contract every puzzle domain implements.
//!
//! The solvers never look inside a puzzle state. They only ask for its
//! fingerprint, its two predicates and its extensions.

use std::collections::HashSet;

/// Fingerprints of states already explored or forbidden during one search.
pub type SeenSet = HashSet<String>;

/// A sequence of states from the initial puzzle to a solved one.
///
/// An empty path means no solution was found.
pub type Path<P> = Vec<P>;

/// One configuration of a full-information puzzle.
///
/// Implementations must keep `fingerprint` stable for an unmodified state and
/// must return a finite sequence from `extensions`. The solvers rely on both
/// and do not check them.
pub trait Puzzle: Clone {
    /// Failure raised by the domain while computing extensions
    type Error;

    /// Canonical identity of this state. Equal fingerprints mean the same state.
    ///
    /// This cannot fail. A domain whose identity computation can fail must
    /// detect that while building the state and report it from the
    /// predecessor's [`extensions`](Puzzle::extensions), which is the only
    /// error channel the solvers propagate.
    fn fingerprint(&self) -> String;

    /// True iff this state is a completed puzzle.
    fn is_solved(&self) -> bool;

    /// True iff no solution can be reached from this state.
    fn fail_fast(&self) -> bool;

    /// Every state reachable by one legal move, in exploration order.
    fn extensions(&self) -> Result<Vec<Self>, Self::Error>;
}

/// Check that `path` is a solution for `start`.
///
/// The first state must share `start`'s fingerprint, each following state
/// must be an extension of its predecessor and the last state must be solved.
pub fn path_is_valid<P: Puzzle>(start: &P, path: &[P]) -> Result<bool, P::Error> {
    let (first, last) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Ok(false),
    };
    if first.fingerprint() != start.fingerprint() || !last.is_solved() {
        return Ok(false);
    }

    for pair in path.windows(2) {
        let next = pair[1].fingerprint();
        let reachable = pair[0]
            .extensions()?
            .iter()
            .any(|ext| ext.fingerprint() == next);
        if !reachable {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Counts up by one or two until it reaches a target.
    #[derive(Debug, Clone)]
    struct Counter {
        value: u32,
        target: u32,
    }

    impl Puzzle for Counter {
        type Error = Infallible;

        fn fingerprint(&self) -> String {
            self.value.to_string()
        }

        fn is_solved(&self) -> bool {
            self.value == self.target
        }

        fn fail_fast(&self) -> bool {
            self.value > self.target
        }

        fn extensions(&self) -> Result<Vec<Self>, Infallible> {
            Ok([1u32, 2]
                .iter()
                .map(|step| Counter {
                    value: self.value + step,
                    target: self.target,
                })
                .collect())
        }
    }

    fn counter(value: u32) -> Counter {
        Counter { value, target: 4 }
    }

    #[test]
    fn test_valid_path() {
        let path = vec![counter(0), counter(2), counter(3), counter(4)];
        assert_eq!(path_is_valid(&counter(0), &path), Ok(true));
    }

    #[test]
    fn test_path_with_illegal_step() {
        let path = vec![counter(0), counter(3), counter(4)];
        assert_eq!(path_is_valid(&counter(0), &path), Ok(false));
    }

    #[test]
    fn test_path_not_ending_solved() {
        let path = vec![counter(0), counter(1)];
        assert_eq!(path_is_valid(&counter(0), &path), Ok(false));
    }

    #[test]
    fn test_path_starting_elsewhere() {
        let path = vec![counter(2), counter(4)];
        assert_eq!(path_is_valid(&counter(0), &path), Ok(false));
    }

    #[test]
    fn test_empty_path_is_not_a_solution() {
        assert_eq!(path_is_valid(&counter(0), &[]), Ok(false));
    }
}
