//! Context handed to hooks, and records of committed transitions.

use super::state::{State, Trigger};
use super::trigger::TriggerDescriptor;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// What a hook sees while a transition is in flight.
///
/// `trigger` and `argument` are `None` when the transition was requested
/// through `move_to_state` rather than by firing a trigger.
pub struct TransitionContext<'a, S: State, T: Trigger> {
    pub source: &'a S,
    pub destination: &'a S,
    pub trigger: Option<&'a TriggerDescriptor<T>>,
    pub argument: Option<&'a dyn Any>,
}

impl<'a, S: State, T: Trigger> TransitionContext<'a, S, T> {
    /// The firing argument, if there is one and it is an `A`.
    ///
    /// Entry hooks shared between parameterized and plain transitions use
    /// this to tolerate being invoked without an argument.
    pub fn argument<A: Any>(&self) -> Option<&'a A> {
        self.argument.and_then(|value| value.downcast_ref::<A>())
    }

    pub fn is_reentry(&self) -> bool {
        self.source == self.destination
    }
}

impl<S: State, T: Trigger> fmt::Debug for TransitionContext<'_, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionContext")
            .field("source", self.source)
            .field("destination", self.destination)
            .field("trigger", &self.trigger)
            .field("has_argument", &self.argument.is_some())
            .finish()
    }
}

/// Record of a committed transition, handed to transition listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTransition<S: State, T: Trigger> {
    pub from: S,
    pub to: S,
    /// `None` for transitions made through `move_to_state`.
    pub trigger: Option<TriggerDescriptor<T>>,
}

/// Which hooks `move_to_state` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionOption {
    /// Exit hook of the current state, then entry hook of the target.
    #[default]
    Default,
    ExitOnly,
    EntryOnly,
    /// Re-seat without running any hook, e.g. when restoring a machine.
    SkipHooks,
}

impl TransitionOption {
    pub fn runs_exit(self) -> bool {
        matches!(self, Self::Default | Self::ExitOnly)
    }

    pub fn runs_entry(self) -> bool {
        matches!(self, Self::Default | Self::EntryOnly)
    }
}
