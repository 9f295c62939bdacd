//! The immutable transition table shared by machines.

use super::representation::StateRepresentation;
use super::state::{State, Trigger};
use std::collections::HashMap;

/// Slot of a state representation inside a [`Configuration`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RepresentationId(usize);

/// Complete transition table for a class of machines.
///
/// Representations live in an arena in declaration order; a hash index maps
/// each state to its slot. Once built the table is never mutated, so one
/// instance can back any number of machines through an `Arc`.
///
/// Slot lookups stay inside the crate; callers go through states:
///
/// ```compile_fail
/// use switchyard::core::Configuration;
///
/// fn slot(config: &Configuration<String, &'static str>) {
///     let id = config.find(&"Idle".to_string());
/// }
/// ```
#[derive(Debug)]
pub struct Configuration<S: State, T: Trigger> {
    representations: Vec<StateRepresentation<S, T>>,
    index: HashMap<S, RepresentationId>,
}

impl<S: State, T: Trigger> Configuration<S, T> {
    /// Assemble a table. Duplicate states must be rejected by the caller;
    /// the last representation for a state wins the index slot.
    pub(crate) fn from_representations(representations: Vec<StateRepresentation<S, T>>) -> Self {
        let index = representations
            .iter()
            .enumerate()
            .map(|(slot, rep)| (rep.state().clone(), RepresentationId(slot)))
            .collect();
        Self {
            representations,
            index,
        }
    }

    /// Slot for `state`, or `None` if the state was never declared.
    pub(crate) fn find(&self, state: &S) -> Option<RepresentationId> {
        self.index.get(state).copied()
    }

    pub fn get(&self, state: &S) -> Option<&StateRepresentation<S, T>> {
        self.find(state).map(|id| self.representation(id))
    }

    /// Representation at `id`.
    ///
    /// Ids never leave the crate and the engine only pairs a machine's slot
    /// with the table that minted it, so indexing cannot go out of bounds.
    pub(crate) fn representation(&self, id: RepresentationId) -> &StateRepresentation<S, T> {
        &self.representations[id.0]
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.representations.iter().map(|rep| rep.state())
    }

    pub fn len(&self) -> usize {
        self.representations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(states: &[&str]) -> Configuration<String, &'static str> {
        Configuration::from_representations(
            states
                .iter()
                .map(|s| StateRepresentation::new(s.to_string(), None, None, Vec::new()))
                .collect(),
        )
    }

    #[test]
    fn lookup_of_missing_state_returns_none() {
        let config = table(&["Idle", "Running"]);

        assert!(config.find(&"Stopped".to_string()).is_none());
        assert!(config.get(&"Stopped".to_string()).is_none());
        assert!(!config.contains(&"Stopped".to_string()));
    }

    #[test]
    fn lookup_resolves_declared_states() {
        let config = table(&["Idle", "Running"]);

        let id = config.find(&"Running".to_string()).unwrap();
        assert_eq!(config.representation(id).state(), "Running");
        assert_eq!(config.len(), 2);
        assert!(!config.is_empty());
    }

    #[test]
    fn states_iterate_in_declaration_order() {
        let config = table(&["C", "A", "B"]);

        let states: Vec<_> = config.states().cloned().collect();
        assert_eq!(states, vec!["C", "A", "B"]);
    }
}
