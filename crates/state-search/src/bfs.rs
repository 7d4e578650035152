//! Breadth-first shortest-path search.
//!
//! The frontier is a FIFO queue of whole candidate paths, so a solution can be
//! returned as soon as it is dequeued without a separate parent map. States are
//! marked visited when they are enqueued, which keeps any state from being
//! queued twice and makes the first solution dequeued one with the fewest
//! transitions.
//!
//! Every queued path is held in full, so memory grows with frontier width times
//! path length.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::SearchError;
use crate::path::Path;
use crate::solver::{SearchLimits, SearchReport, SearchTracker, Solver, Strategy};
use crate::state::PuzzleState;
use crate::visited::VisitedSet;

/// Queue-driven breadth-first solver with fail-fast pruning.
#[derive(Debug, Clone, Default)]
pub struct BfsSolver {
    limits: SearchLimits,
}

impl BfsSolver {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Expand the last state of `path`, queueing one extended path per
    /// successor that is neither visited nor rejected by `fail_fast`.
    fn enqueue_extensions<S: PuzzleState>(
        &self,
        path: &[S],
        visited: &mut VisitedSet<S::Key>,
        tracker: &mut SearchTracker,
        queue: &mut VecDeque<Vec<S>>,
    ) -> Result<(), SearchError> {
        let Some(frontier) = path.last() else {
            return Ok(());
        };
        tracker.expand()?;
        trace!(depth = path.len() - 1, queued = queue.len(), "expanding");

        for next in frontier.extensions() {
            let key = next.identity();
            if visited.contains(&key) {
                continue;
            }
            let rejected = next.fail_fast();
            tracker.mark(visited, key);
            if rejected {
                tracker.prune();
                continue;
            }

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(path);
            extended.push(next);
            queue.push_back(extended);
        }
        Ok(())
    }

    fn run<S: PuzzleState>(
        &self,
        initial: &S,
        visited: &mut VisitedSet<S::Key>,
        tracker: &mut SearchTracker,
    ) -> Result<Path<S>, SearchError> {
        let root = initial.identity();
        if visited.contains(&root) {
            return Ok(Path::empty());
        }
        if initial.fail_fast() {
            tracker.prune();
            return Ok(Path::empty());
        }
        if initial.is_solved() {
            return Ok(Path::from(vec![initial.clone()]));
        }
        tracker.mark(visited, root);

        let mut queue = VecDeque::new();
        self.enqueue_extensions(&[initial.clone()], visited, tracker, &mut queue)?;

        while let Some(candidate) = queue.pop_front() {
            match candidate.last() {
                Some(last) if last.is_solved() => return Ok(Path::from(candidate)),
                Some(_) => self.enqueue_extensions(&candidate, visited, tracker, &mut queue)?,
                None => {}
            }
        }

        Ok(Path::empty())
    }
}

impl Solver for BfsSolver {
    fn search_with_visited<S: PuzzleState>(
        &self,
        initial: &S,
        visited: &mut VisitedSet<S::Key>,
    ) -> Result<SearchReport<S>, SearchError> {
        let mut tracker = SearchTracker::new(Strategy::Bfs, self.limits);
        debug!(max_expansions = ?self.limits.max_expansions, "bfs search started");

        let path = self.run(initial, visited, &mut tracker)?;

        let report = tracker.finish(path);
        debug!(
            path_len = report.path.len(),
            expansions = report.stats.expansions,
            pruned = report.stats.pruned,
            elapsed_ms = report.stats.time_elapsed_ms,
            "bfs search finished"
        );
        Ok(report)
    }
}
