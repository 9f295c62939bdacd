//! Errors raised by firing triggers and moving between states.

use crate::core::{HookError, State, Trigger, TriggerDescriptor};
use thiserror::Error;

/// Errors that can occur while constructing or driving a machine.
///
/// None of these is retried internally. After an error the machine's current
/// state is whatever it was before the call.
#[derive(Debug, Error)]
pub enum MachineError<S: State, T: Trigger> {
    /// A referenced state has no representation in the configuration.
    #[error("State {state:?} is not declared in the configuration")]
    InvalidState { state: S },

    /// The fired trigger is unmapped, guarded off, or fired with the wrong
    /// argument in the current state.
    #[error("Trigger '{trigger}' is not permitted in state {state:?}")]
    InvalidTrigger {
        state: S,
        trigger: TriggerDescriptor<T>,
    },

    /// A hook returned an error. Display and source are the hook's own.
    #[error(transparent)]
    Hook(HookError),
}

impl<S: State, T: Trigger> MachineError<S, T> {
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    pub fn is_invalid_trigger(&self) -> bool {
        matches!(self, Self::InvalidTrigger { .. })
    }

    /// The hook's error, if this failure came from a hook.
    pub fn into_hook_error(self) -> Option<HookError> {
        match self {
            Self::Hook(error) => Some(error),
            _ => None,
        }
    }
}
