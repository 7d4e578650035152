//! The capability set a puzzle state exposes to the solvers.
//!
//! A state is one point in the search space. Solvers never mutate a state:
//! every transition produces a fresh, independently owned value, so the only
//! link between a state and its parent is the path the solver builds.

use std::fmt::Debug;
use std::hash::Hash;

/// A full-information puzzle state that can be searched.
///
/// # Contract
///
/// * [`extensions`](PuzzleState::extensions) returns every state reachable by
///   one atomic transition, never the receiver itself. Enumeration order is
///   up to the implementation but must be deterministic: it decides which
///   solution the depth-first solver reports first.
/// * [`is_solved`](PuzzleState::is_solved) and
///   [`fail_fast`](PuzzleState::fail_fast) are pure predicates.
/// * [`identity`](PuzzleState::identity) depends only on the state's content.
///   Two states with equal keys are interchangeable as far as the visited-set
///   is concerned.
///
/// `fail_fast` is sound but incomplete. Returning `true` for a state from which
/// a goal is in fact reachable silently drops that goal: the solvers cannot
/// tell "unsolvable" apart from a pruning bug, and report the former.
pub trait PuzzleState: Clone + Debug {
    /// Canonical identity used for deduplication.
    type Key: Clone + Eq + Hash + Debug;

    /// All immediate successors of this state.
    fn extensions(&self) -> Vec<Self>;

    /// Whether this state satisfies the goal.
    fn is_solved(&self) -> bool;

    /// Whether this state can be cheaply shown to have no reachable goal.
    ///
    /// The default never prunes.
    fn fail_fast(&self) -> bool {
        false
    }

    /// Canonical key of this state's content.
    fn identity(&self) -> Self::Key;
}
