//! Set of canonical state identities already considered by a search.

use std::collections::HashSet;
use std::hash::Hash;

/// Identities a search has explored or queued.
///
/// A solver owns one of these for the duration of a single call. Callers may
/// pre-populate a set and hand it to
/// [`Solver::search_with_visited`](crate::Solver::search_with_visited) to keep
/// the listed states out of the returned path; the solver adds to it as it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for VisitedSet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> VisitedSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Mark a key as visited. Returns `true` if it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    pub fn into_inner(self) -> HashSet<K> {
        self.keys
    }
}

impl<K: Eq + Hash> From<HashSet<K>> for VisitedSet<K> {
    fn from(keys: HashSet<K>) -> Self {
        Self { keys }
    }
}

impl<K: Eq + Hash> FromIterator<K> for VisitedSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<K> for VisitedSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}
