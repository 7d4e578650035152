//! Solver interface, search limits and bookkeeping shared by both strategies.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bfs::BfsSolver;
use crate::dfs::DfsSolver;
use crate::error::SearchError;
use crate::path::Path;
use crate::state::PuzzleState;
use crate::visited::VisitedSet;

/// Default bound on depth-first recursion.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Resource bounds for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLimits {
    /// Maximum number of transitions the depth-first solver may recurse through
    pub max_depth: usize,
    /// Maximum number of states whose extensions are generated (unbounded if `None`)
    pub max_expansions: Option<usize>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_expansions: None,
        }
    }
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose extensions were generated
    pub expansions: usize,
    /// States rejected by `fail_fast`
    pub pruned: usize,
    /// Identities newly added to the visited-set
    pub visited: usize,
    /// Wall-clock time of the search in milliseconds
    pub time_elapsed_ms: u64,
}

/// Outcome of a completed search.
#[derive(Debug, Clone)]
pub struct SearchReport<S> {
    /// Solution path, empty when no solution exists
    pub path: Path<S>,
    pub stats: SearchStats,
}

impl<S> SearchReport<S> {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A search strategy over any [`PuzzleState`].
pub trait Solver {
    /// Search from `initial`, treating every identity already in `visited` as
    /// off-limits. Identities explored by this search are added to `visited`.
    fn search_with_visited<S: PuzzleState>(
        &self,
        initial: &S,
        visited: &mut VisitedSet<S::Key>,
    ) -> Result<SearchReport<S>, SearchError>;

    /// Search from `initial` with a fresh visited-set.
    fn search<S: PuzzleState>(&self, initial: &S) -> Result<SearchReport<S>, SearchError> {
        let mut visited = VisitedSet::new();
        self.search_with_visited(initial, &mut visited)
    }

    /// Return a path from `initial` to a solved state, or an empty path.
    fn solve<S: PuzzleState>(&self, initial: &S) -> Result<Path<S>, SearchError> {
        Ok(self.search(initial)?.path)
    }
}

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Dfs,
    Bfs,
}

impl Strategy {
    pub fn solver(self, limits: SearchLimits) -> StrategySolver {
        match self {
            Strategy::Dfs => StrategySolver::Dfs(DfsSolver::new(limits)),
            Strategy::Bfs => StrategySolver::Bfs(BfsSolver::new(limits)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::Bfs => write!(f, "bfs"),
        }
    }
}

/// A solver chosen at run time.
#[derive(Debug, Clone)]
pub enum StrategySolver {
    Dfs(DfsSolver),
    Bfs(BfsSolver),
}

impl Solver for StrategySolver {
    fn search_with_visited<S: PuzzleState>(
        &self,
        initial: &S,
        visited: &mut VisitedSet<S::Key>,
    ) -> Result<SearchReport<S>, SearchError> {
        match self {
            StrategySolver::Dfs(solver) => solver.search_with_visited(initial, visited),
            StrategySolver::Bfs(solver) => solver.search_with_visited(initial, visited),
        }
    }
}

/// Per-search counters and budget enforcement.
#[derive(Debug)]
pub(crate) struct SearchTracker {
    strategy: Strategy,
    limits: SearchLimits,
    stats: SearchStats,
    start: Instant,
}

impl SearchTracker {
    pub(crate) fn new(strategy: Strategy, limits: SearchLimits) -> Self {
        Self {
            strategy,
            limits,
            stats: SearchStats::default(),
            start: Instant::now(),
        }
    }

    pub(crate) fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Mark `key` visited, counting it if it is new.
    pub(crate) fn mark<K: Eq + std::hash::Hash>(&mut self, visited: &mut VisitedSet<K>, key: K) {
        if visited.insert(key) {
            self.stats.visited += 1;
        }
    }

    pub(crate) fn prune(&mut self) {
        self.stats.pruned += 1;
    }

    /// Account for one call to `extensions()`.
    pub(crate) fn expand(&mut self) -> Result<(), SearchError> {
        if let Some(limit) = self.limits.max_expansions {
            if self.stats.expansions >= limit {
                warn!(strategy = %self.strategy, limit, "expansion budget exhausted");
                return Err(SearchError::ExpansionLimitExceeded { limit });
            }
        }
        self.stats.expansions += 1;
        Ok(())
    }

    pub(crate) fn check_depth(&self, depth: usize) -> Result<(), SearchError> {
        let limit = self.limits.max_depth;
        if depth > limit {
            warn!(strategy = %self.strategy, limit, "depth limit exceeded");
            return Err(SearchError::DepthLimitExceeded { limit });
        }
        Ok(())
    }

    pub(crate) fn finish<S>(mut self, path: Path<S>) -> SearchReport<S> {
        self.stats.time_elapsed_ms = self.start.elapsed().as_millis() as u64;
        SearchReport {
            path,
            stats: self.stats,
        }
    }
}
