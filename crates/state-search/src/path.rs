//! Solution paths returned by the solvers.

use crate::state::PuzzleState;

/// Ordered states from the search root to a solved state.
///
/// An empty path means the search found no solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S> {
    states: Vec<S>,
}

impl<S> Default for Path<S> {
    fn default() -> Self {
        Self { states: Vec::new() }
    }
}

impl<S> Path<S> {
    /// The "no solution" path.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of states, including the root.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Number of transitions taken (one less than the number of states).
    pub fn transitions(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&S> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.states.last()
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn into_states(self) -> Vec<S> {
        self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }
}

impl<S: PuzzleState> Path<S> {
    /// Identity of every state along the path.
    pub fn identities(&self) -> Vec<S::Key> {
        self.states.iter().map(PuzzleState::identity).collect()
    }

    /// Check that this path is a valid solution starting at `initial`.
    ///
    /// The first state must share `initial`'s identity, each following state
    /// must appear among its predecessor's extensions, and the final state must
    /// be solved. An empty path is trivially valid.
    pub fn verify(&self, initial: &S) -> bool {
        let (Some(first), Some(last)) = (self.states.first(), self.states.last()) else {
            return true;
        };
        if first.identity() != initial.identity() || !last.is_solved() {
            return false;
        }
        self.states.windows(2).all(|pair| {
            let next = pair[1].identity();
            pair[0].extensions().iter().any(|s| s.identity() == next)
        })
    }
}

impl<S> From<Vec<S>> for Path<S> {
    fn from(states: Vec<S>) -> Self {
        Self { states }
    }
}

impl<S> IntoIterator for Path<S> {
    type Item = S;
    type IntoIter = std::vec::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Path<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter that steps by one or two towards 4.
    #[derive(Debug, Clone, PartialEq)]
    struct Counter(u8);

    impl PuzzleState for Counter {
        type Key = u8;

        fn extensions(&self) -> Vec<Self> {
            [1, 2]
                .iter()
                .map(|d| Counter(self.0 + d))
                .filter(|c| c.0 <= 4)
                .collect()
        }

        fn is_solved(&self) -> bool {
            self.0 == 4
        }

        fn identity(&self) -> u8 {
            self.0
        }
    }

    #[test]
    fn test_empty_path() {
        let path: Path<Counter> = Path::empty();
        assert!(path.is_empty());
        assert_eq!(path.transitions(), 0);
        assert!(path.verify(&Counter(0)));
    }

    #[test]
    fn test_verify_valid_path() {
        let path = Path::from(vec![Counter(0), Counter(2), Counter(4)]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.transitions(), 2);
        assert_eq!(path.identities(), vec![0, 2, 4]);
        assert!(path.verify(&Counter(0)));
    }

    #[test]
    fn test_verify_rejects_bad_paths() {
        // Jump of three is not a successor step.
        assert!(!Path::from(vec![Counter(0), Counter(3), Counter(4)]).verify(&Counter(0)));
        // Wrong root.
        assert!(!Path::from(vec![Counter(2), Counter(4)]).verify(&Counter(0)));
        // Does not end solved.
        assert!(!Path::from(vec![Counter(0), Counter(1)]).verify(&Counter(0)));
    }
}
