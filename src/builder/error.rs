//! Build errors for configuration and transition builders.

use thiserror::Error;

/// A single problem found while building a configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states declared. Add at least one state with .state(..)")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Trigger '{trigger}' is registered more than once in state '{state}'")]
    DuplicateTrigger { state: String, trigger: String },

    #[error("Transition for trigger '{trigger}' has no target. Call .to(state) or .to_dynamic(..)")]
    MissingTarget { trigger: String },

    #[error("Selector for trigger '{trigger}' reads a {selector} argument, but the trigger takes {declared}")]
    ArgumentMismatch {
        trigger: String,
        declared: String,
        selector: String,
    },
}

/// Every problem found while validating a configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid configuration: {}", describe(.errors))]
pub struct ConfigurationError {
    pub errors: Vec<BuildError>,
}

fn describe(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<BuildError> for ConfigurationError {
    fn from(error: BuildError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
