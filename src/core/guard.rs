//! Guard predicates for gating transitions.

use super::state::State;
use std::fmt;

/// Predicate that decides whether a mapped transition is currently permitted.
///
/// Guards are evaluated with the machine's current state, both when a
/// trigger is fired and when diagnostics are queried, so they should be
/// free of side effects.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// let only_idle = Guard::new(|s: &String| s == "Idle");
///
/// assert!(only_idle.check(&"Idle".to_string()));
/// assert!(!only_idle.check(&"Running".to_string()));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against the current state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
