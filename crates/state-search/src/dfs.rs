//! Depth-first backtracking search.
//!
//! Returns the first solution found in successor-enumeration order, which is
//! not necessarily the shortest. A single visited-set is shared across the
//! whole call tree, so a state reached by one branch is never re-explored
//! from a sibling.

use tracing::{debug, trace};

use crate::error::SearchError;
use crate::path::Path;
use crate::solver::{SearchLimits, SearchReport, SearchTracker, Solver, Strategy};
use crate::state::PuzzleState;
use crate::visited::VisitedSet;

/// Recursive depth-first solver with fail-fast pruning.
#[derive(Debug, Clone, Default)]
pub struct DfsSolver {
    limits: SearchLimits,
}

impl DfsSolver {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Search below `state`. On success the solution is pushed onto `reversed`
    /// goal-first as the recursion unwinds.
    fn descend<S: PuzzleState>(
        &self,
        state: &S,
        depth: usize,
        visited: &mut VisitedSet<S::Key>,
        tracker: &mut SearchTracker,
        reversed: &mut Vec<S>,
    ) -> Result<bool, SearchError> {
        tracker.check_depth(depth)?;

        if state.fail_fast() {
            trace!(depth, "pruned by fail_fast");
            tracker.prune();
            return Ok(false);
        }
        if state.is_solved() {
            reversed.push(state.clone());
            return Ok(true);
        }

        tracker.mark(visited, state.identity());
        tracker.expand()?;
        trace!(depth, "expanding");

        for next in state.extensions() {
            let key = next.identity();
            if visited.contains(&key) {
                continue;
            }
            if self.descend(&next, depth + 1, visited, tracker, reversed)? {
                reversed.push(state.clone());
                return Ok(true);
            }
            tracker.mark(visited, key);
        }

        Ok(false)
    }
}

impl Solver for DfsSolver {
    fn search_with_visited<S: PuzzleState>(
        &self,
        initial: &S,
        visited: &mut VisitedSet<S::Key>,
    ) -> Result<SearchReport<S>, SearchError> {
        let mut tracker = SearchTracker::new(Strategy::Dfs, self.limits);
        debug!(max_depth = self.limits.max_depth, "dfs search started");

        let mut reversed = Vec::new();
        if !visited.contains(&initial.identity()) {
            self.descend(initial, 0, visited, &mut tracker, &mut reversed)?;
        }
        reversed.reverse();

        let report = tracker.finish(Path::from(reversed));
        debug!(
            path_len = report.path.len(),
            expansions = report.stats.expansions,
            pruned = report.stats.pruned,
            elapsed_ms = report.stats.time_elapsed_ms,
            "dfs search finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks 0..=n along a line; each step may add 1 or jump back to 0.
    #[derive(Debug, Clone)]
    struct Line {
        pos: u32,
        goal: u32,
    }

    impl PuzzleState for Line {
        type Key = u32;

        fn extensions(&self) -> Vec<Self> {
            let mut next = vec![Line {
                pos: 0,
                goal: self.goal,
            }];
            if self.pos < self.goal {
                next.push(Line {
                    pos: self.pos + 1,
                    goal: self.goal,
                });
            }
            next.retain(|s| s.pos != self.pos);
            next
        }

        fn is_solved(&self) -> bool {
            self.pos == self.goal
        }

        fn identity(&self) -> u32 {
            self.pos
        }
    }

    #[test]
    fn test_cycles_are_not_revisited() {
        let start = Line { pos: 0, goal: 5 };
        let report = DfsSolver::default().search(&start).unwrap();

        assert_eq!(report.path.identities(), vec![0, 1, 2, 3, 4, 5]);
        assert!(report.path.verify(&start));
        assert_eq!(report.stats.expansions, 5);
    }

    #[test]
    fn test_solved_root_is_singleton_path() {
        let start = Line { pos: 3, goal: 3 };
        let report = DfsSolver::default().search(&start).unwrap();

        assert_eq!(report.path.identities(), vec![3]);
        assert_eq!(report.stats.expansions, 0);
    }

    #[test]
    fn test_depth_limit() {
        let solver = DfsSolver::new(SearchLimits {
            max_depth: 3,
            max_expansions: None,
        });
        let start = Line { pos: 0, goal: 10 };

        assert_eq!(
            solver.solve(&start).unwrap_err(),
            SearchError::DepthLimitExceeded { limit: 3 }
        );
        // Reachable within the limit.
        assert_eq!(solver.solve(&Line { pos: 0, goal: 3 }).unwrap().len(), 4);
    }

    #[test]
    fn test_root_in_visited_yields_no_solution() {
        let start = Line { pos: 0, goal: 2 };
        let mut visited: VisitedSet<u32> = [0].into_iter().collect();
        let report = DfsSolver::default()
            .search_with_visited(&start, &mut visited)
            .unwrap();

        assert!(report.path.is_empty());
        assert_eq!(report.stats.expansions, 0);
    }

    #[test]
    fn test_visited_states_are_excluded_from_path() {
        let start = Line { pos: 0, goal: 3 };
        let mut visited: VisitedSet<u32> = [2].into_iter().collect();
        let path = DfsSolver::default()
            .search_with_visited(&start, &mut visited)
            .unwrap()
            .path;

        assert!(path.is_empty());
        assert!(visited.contains(&0));
        assert!(visited.contains(&1));
    }
}
