//! Generic state-space search.
//!
//! Any type implementing [`PuzzleState`] can be handed to one of two solvers:
//! [`DfsSolver`] returns the first solution found by recursive backtracking,
//! [`BfsSolver`] returns a solution with the fewest transitions. Both prune
//! with the state's `fail_fast` predicate and deduplicate by canonical
//! identity. An empty [`Path`] means no solution exists.
//!
//! [`ExpressionTreePuzzle`] is a ready-made arithmetic assignment puzzle.

pub mod bfs;
pub mod dfs;
pub mod error;
pub mod expression;
pub mod path;
pub mod solver;
pub mod state;
pub mod visited;

// Re-export main types
pub use bfs::BfsSolver;
pub use dfs::DfsSolver;
pub use error::{PuzzleError, SearchError};
pub use expression::{ExprTree, ExpressionTreePuzzle, PuzzleSpec};
pub use path::Path;
pub use solver::{
    SearchLimits, SearchReport, SearchStats, Solver, Strategy, StrategySolver, DEFAULT_MAX_DEPTH,
};
pub use state::PuzzleState;
pub use visited::VisitedSet;
