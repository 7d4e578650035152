//! Error types.
//!
//! "No solution" is not an error: solvers report it as an empty
//! [`Path`](crate::Path). Errors here mean the search was cut short or the
//! puzzle description could not be loaded.

use thiserror::Error;

/// A search stopped before it could decide whether a solution exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("depth limit exceeded: recursion went deeper than {limit} transitions")]
    DepthLimitExceeded { limit: usize },

    #[error("expansion budget exhausted after {limit} expansions")]
    ExpansionLimitExceeded { limit: usize },
}

/// A puzzle description was malformed.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid puzzle: {0}")]
    Invalid(String),
}
