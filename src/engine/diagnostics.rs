//! Read-only queries over a machine's current state.

use crate::core::{ArgumentType, State, StateRepresentation, Trigger, TriggerTransition};
use crate::engine::machine::{Lifecycle, MachineId, StateMachine};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Borrowed view answering "what could fire right now".
///
/// Queries evaluate guards against the current state but never run hooks,
/// trigger actions or dynamic selectors, and never mutate the machine.
pub struct Diagnostics<'m, S: State, T: Trigger> {
    machine: &'m StateMachine<S, T>,
}

impl<'m, S: State, T: Trigger> Diagnostics<'m, S, T> {
    pub(crate) fn new(machine: &'m StateMachine<S, T>) -> Self {
        Self { machine }
    }

    fn current(&self) -> &'m StateRepresentation<S, T> {
        self.machine
            .configuration()
            .representation(self.machine.current_slot())
    }

    /// Transition mapped for `trigger` whose guard currently holds.
    fn permitted(&self, trigger: &T) -> Option<&'m TriggerTransition<S, T>> {
        let current = self.current();
        current
            .transition(trigger)
            .filter(|t| t.is_permitted(current.state()))
    }

    /// Whether `trigger` is mapped in the current state and its guard holds.
    ///
    /// With `exact_match` set, only a plain transition counts, which is
    /// exactly what [`StateMachine::fire`] accepts. Without it, a
    /// parameterized transition with the same identity counts too.
    pub fn can_handle_trigger(&self, trigger: &T, exact_match: bool) -> bool {
        self.permitted(trigger)
            .is_some_and(|t| !exact_match || !t.descriptor.is_parameterized())
    }

    /// Like [`can_handle_trigger`](Self::can_handle_trigger), but also
    /// requires the transition to take an argument of type `argument`.
    pub fn can_handle_trigger_with(&self, trigger: &T, argument: ArgumentType) -> bool {
        self.permitted(trigger)
            .is_some_and(|t| t.descriptor.argument_type() == Some(argument))
    }

    pub fn can_handle_trigger_for<A: Any>(&self, trigger: &T) -> bool {
        self.can_handle_trigger_with(trigger, ArgumentType::of::<A>())
    }

    /// Triggers mapped in the current state whose guards hold, in
    /// declaration order. Computed lazily on every call.
    pub fn current_permitted_triggers(&self) -> impl Iterator<Item = &'m T> + 'm {
        let current = self.current();
        let state = current.state();
        current
            .transitions()
            .filter(move |t| t.is_permitted(state))
            .map(|t| t.trigger())
    }

    /// Snapshot of the machine for logging or display.
    pub fn report(&self) -> DiagnosticsReport<S> {
        DiagnosticsReport {
            machine: self.machine.id(),
            state: self.machine.current_state().clone(),
            lifecycle: self.machine.lifecycle(),
            permitted_triggers: self
                .current_permitted_triggers()
                .map(|t| t.name().to_string())
                .collect(),
        }
    }
}

/// Serializable summary produced by [`Diagnostics::report`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DiagnosticsReport<S: State> {
    pub machine: MachineId,
    pub state: S,
    pub lifecycle: Lifecycle,
    pub permitted_triggers: Vec<String>,
}

impl<S: State> DiagnosticsReport<S> {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
