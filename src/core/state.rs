//! State and trigger identity traits.
//!
//! The engine never interprets states or triggers beyond equality and
//! hashing. Both are keys: states into the configuration table, triggers
//! into a state's transition map.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records and errors
/// - `Eq` + `Hash`: states key the configuration table
/// - `Debug`: states appear in error messages
/// - `Serialize` + `Deserialize`: states appear in diagnostics reports
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for trigger identities.
///
/// A trigger names an event. Whether it must be fired with an argument is
/// decided by the transition it maps to, not by the trigger value itself;
/// see [`ParameterizedTrigger`](crate::core::ParameterizedTrigger).
pub trait Trigger: Clone + Eq + Hash + Debug + Serialize + Send + Sync + 'static {
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for String {
    fn name(&self) -> &str {
        self
    }
}

impl Trigger for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
    }

    #[test]
    fn string_states_and_triggers_name_themselves() {
        let state = String::from("Parked");
        assert_eq!(State::name(&state), "Parked");
        assert_eq!(Trigger::name(&"start"), "start");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
