use std::collections::HashSet;
use std::hash::Hash;

/// The set of states a search has already generated. Membership is checked
/// before a successor is added to the frontier, which keeps every state from
/// being expanded more than once and keeps the search from looping on cyclic
/// problems.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Whether `state` has been recorded already.
    pub fn exists(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Record `state`. Recording the same state twice is harmless.
    pub fn add(&mut self, state: S) {
        self.states.insert(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
