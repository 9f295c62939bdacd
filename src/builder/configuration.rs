//! Builder for the immutable transition table.

use crate::builder::error::{BuildError, ConfigurationError};
use crate::builder::state::StateBuilder;
use crate::core::{Configuration, State, Trigger};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for a [`Configuration`] with a fluent API.
///
/// Validation accumulates every problem (duplicate states, duplicate
/// triggers within a state, transitions without a target) instead of
/// stopping at the first one. Static targets that name undeclared states
/// are not rejected here; firing into them fails at run time.
pub struct ConfigurationBuilder<S: State, T: Trigger> {
    states: Vec<StateBuilder<S, T>>,
}

impl<S: State, T: Trigger> ConfigurationBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Declare `state` and configure it through `configure`.
    pub fn state<F>(mut self, state: S, configure: F) -> Self
    where
        F: FnOnce(StateBuilder<S, T>) -> StateBuilder<S, T>,
    {
        self.states.push(configure(StateBuilder::new(state)));
        self
    }

    /// Check the whole configuration, collecting every problem.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(BuildError::NoStates));
        }

        let mut seen = HashSet::new();
        for builder in &self.states {
            if !seen.insert(builder.state()) {
                checks.push(Validation::fail(BuildError::DuplicateState {
                    state: builder.state().name().to_string(),
                }));
            }
            checks.push(builder.validate());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the configuration.
    /// Returns every validation problem if any were found.
    pub fn build(self) -> Result<Configuration<S, T>, ConfigurationError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(ConfigurationError {
                errors: errors.iter().cloned().collect(),
            });
        }

        let representations = self
            .states
            .into_iter()
            .map(StateBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        let configuration = Configuration::from_representations(representations);
        debug!(states = configuration.len(), "configuration built");
        Ok(configuration)
    }
}

impl<S: State, T: Trigger> Default for ConfigurationBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransitionBuilder;

    #[test]
    fn builder_requires_states() {
        let result = ConfigurationBuilder::<String, &'static str>::new().build();

        assert_eq!(result.unwrap_err().errors, vec![BuildError::NoStates]);
    }

    #[test]
    fn builder_accumulates_all_problems() {
        let result = ConfigurationBuilder::<String, &'static str>::new()
            .state("Idle".to_string(), |s| {
                s.permit("start", "Running".to_string())
                    .permit("start", "Paused".to_string())
            })
            .state("Running".to_string(), |s| {
                s.transition(TransitionBuilder::new("stop"))
            })
            .state("Idle".to_string(), |s| s)
            .build();

        let errors = result.unwrap_err().errors;
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&BuildError::DuplicateTrigger {
            state: "Idle".to_string(),
            trigger: "start".to_string(),
        }));
        assert!(errors.contains(&BuildError::MissingTarget {
            trigger: "stop".to_string(),
        }));
        assert!(errors.contains(&BuildError::DuplicateState {
            state: "Idle".to_string(),
        }));
    }

    #[test]
    fn fluent_api_builds_configuration() {
        let config = ConfigurationBuilder::<String, &'static str>::new()
            .state("Idle".to_string(), |s| s.permit("start", "Running".to_string()))
            .state("Running".to_string(), |s| s.permit("stop", "Idle".to_string()))
            .build()
            .unwrap();

        assert_eq!(config.len(), 2);
        let idle = config.get(&"Idle".to_string()).unwrap();
        assert!(idle.transition(&"start").is_some());
        assert!(idle.transition(&"stop").is_none());
    }

    #[test]
    fn undeclared_static_targets_are_accepted() {
        let result = ConfigurationBuilder::<String, &'static str>::new()
            .state("Idle".to_string(), |s| s.permit("go", "Elsewhere".to_string()))
            .build();

        assert!(result.is_ok());
    }
}
