//! Per-state representation: hooks and the transitions a state permits.

use super::context::TransitionContext;
use super::guard::Guard;
use super::state::{State, Trigger};
use super::trigger::TriggerDescriptor;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Error returned by a hook. Propagated to the caller of `fire` unchanged.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Entry, exit and trigger actions.
pub type Hook<S, T> =
    Box<dyn Fn(&TransitionContext<'_, S, T>) -> Result<(), HookError> + Send + Sync>;

/// Dynamic destination function.
///
/// Receives the source state and the firing argument (if any). Always
/// names a destination; whether the transition may fire at all is decided
/// by the guard alone.
pub type Selector<S> = Box<dyn Fn(&S, Option<&dyn Any>) -> S + Send + Sync>;

/// How a transition picks its destination.
pub enum TargetSelector<S: State> {
    Fixed(S),
    Dynamic(Selector<S>),
}

impl<S: State> TargetSelector<S> {
    pub fn resolve(&self, source: &S, argument: Option<&dyn Any>) -> S {
        match self {
            Self::Fixed(state) => state.clone(),
            Self::Dynamic(select) => select(source, argument),
        }
    }
}

impl<S: State> fmt::Debug for TargetSelector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(state) => f.debug_tuple("Fixed").field(state).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One (state, trigger) entry of the transition table.
pub struct TriggerTransition<S: State, T: Trigger> {
    pub descriptor: TriggerDescriptor<T>,
    pub guard: Option<Guard<S>>,
    pub target: TargetSelector<S>,
    /// Runs between the source's exit hook and the destination's entry hook.
    pub action: Option<Hook<S, T>>,
}

impl<S: State, T: Trigger> TriggerTransition<S, T> {
    pub fn trigger(&self) -> &T {
        self.descriptor.trigger()
    }

    /// Whether the guard (if any) currently permits this transition.
    pub fn is_permitted(&self, current: &S) -> bool {
        self.guard.as_ref().map_or(true, |g| g.check(current))
    }
}

impl<S: State, T: Trigger> fmt::Debug for TriggerTransition<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerTransition")
            .field("descriptor", &self.descriptor)
            .field("guarded", &self.guard.is_some())
            .field("target", &self.target)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Everything the engine knows about one declared state.
pub struct StateRepresentation<S: State, T: Trigger> {
    state: S,
    on_entry: Option<Hook<S, T>>,
    on_exit: Option<Hook<S, T>>,
    transitions: Vec<TriggerTransition<S, T>>,
    index: HashMap<T, usize>,
}

impl<S: State, T: Trigger> StateRepresentation<S, T> {
    pub(crate) fn new(
        state: S,
        on_entry: Option<Hook<S, T>>,
        on_exit: Option<Hook<S, T>>,
        transitions: Vec<TriggerTransition<S, T>>,
    ) -> Self {
        let index = transitions
            .iter()
            .enumerate()
            .map(|(slot, t)| (t.trigger().clone(), slot))
            .collect();
        Self {
            state,
            on_entry,
            on_exit,
            transitions,
            index,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn on_entry(&self) -> Option<&Hook<S, T>> {
        self.on_entry.as_ref()
    }

    pub fn on_exit(&self) -> Option<&Hook<S, T>> {
        self.on_exit.as_ref()
    }

    /// Transition mapped for `trigger`, regardless of guard.
    pub fn transition(&self, trigger: &T) -> Option<&TriggerTransition<S, T>> {
        self.index.get(trigger).map(|&slot| &self.transitions[slot])
    }

    /// All mapped transitions in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &TriggerTransition<S, T>> {
        self.transitions.iter()
    }
}

impl<S: State, T: Trigger> fmt::Debug for StateRepresentation<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateRepresentation")
            .field("state", &self.state)
            .field("has_entry", &self.on_entry.is_some())
            .field("has_exit", &self.on_exit.is_some())
            .field("transitions", &self.transitions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(trigger: &'static str, to: &str) -> TriggerTransition<String, &'static str> {
        TriggerTransition {
            descriptor: TriggerDescriptor::Plain(trigger),
            guard: None,
            target: TargetSelector::Fixed(to.to_string()),
            action: None,
        }
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let rep = StateRepresentation::new(
            "Idle".to_string(),
            None,
            None,
            vec![fixed("b", "B"), fixed("a", "A"), fixed("c", "C")],
        );

        let order: Vec<_> = rep.transitions().map(|t| *t.trigger()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert!(rep.transition(&"a").is_some());
        assert!(rep.transition(&"z").is_none());
    }

    #[test]
    fn guard_controls_permission() {
        let mut transition = fixed("go", "Running");
        transition.guard = Some(Guard::new(|s: &String| s == "Idle"));

        assert!(transition.is_permitted(&"Idle".to_string()));
        assert!(!transition.is_permitted(&"Paused".to_string()));
    }

    #[test]
    fn dynamic_selector_reads_argument() {
        let target: TargetSelector<String> =
            TargetSelector::Dynamic(Box::new(|_: &String, arg: Option<&dyn Any>| {
                arg.and_then(|a| a.downcast_ref::<u8>())
                    .map_or_else(|| "Level0".to_string(), |level| format!("Level{level}"))
            }));

        let source = "Idle".to_string();
        assert_eq!(target.resolve(&source, Some(&3_u8)), "Level3");
        assert_eq!(target.resolve(&source, None), "Level0");
    }
}
