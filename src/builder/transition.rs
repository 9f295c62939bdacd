//! Builder for a single trigger transition.

use crate::builder::error::BuildError;
use crate::core::{
    ArgumentType, Guard, Hook, HookError, ParameterizedTrigger, State, TargetSelector,
    TransitionContext, Trigger, TriggerDescriptor, TriggerTransition,
};
use std::any::Any;

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::TransitionBuilder;
///
/// let transition = TransitionBuilder::<String, &'static str>::new("approve")
///     .to("Approved".to_string())
///     .when(|s: &String| s == "Review")
///     .build()
///     .unwrap();
///
/// assert!(transition.is_permitted(&"Review".to_string()));
/// ```
pub struct TransitionBuilder<S: State, T: Trigger> {
    descriptor: TriggerDescriptor<T>,
    target: Option<TargetSelector<S>>,
    /// Argument type a `to_dynamic_with` selector reads.
    selector_argument: Option<ArgumentType>,
    guard: Option<Guard<S>>,
    action: Option<Hook<S, T>>,
}

impl<S: State, T: Trigger> TransitionBuilder<S, T> {
    /// Start a transition for a plain trigger.
    pub fn new(trigger: T) -> Self {
        Self::with_descriptor(TriggerDescriptor::Plain(trigger))
    }

    /// Start a transition for a parameterized trigger.
    pub fn parameterized<A: Any>(trigger: &ParameterizedTrigger<T, A>) -> Self {
        Self::with_descriptor(trigger.descriptor())
    }

    fn with_descriptor(descriptor: TriggerDescriptor<T>) -> Self {
        Self {
            descriptor,
            target: None,
            selector_argument: None,
            guard: None,
            action: None,
        }
    }

    pub fn trigger(&self) -> &T {
        self.descriptor.trigger()
    }

    /// Set a fixed target state.
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(TargetSelector::Fixed(state));
        self.selector_argument = None;
        self
    }

    /// Pick the target from the source state when fired.
    pub fn to_dynamic<F>(mut self, select: F) -> Self
    where
        F: Fn(&S) -> S + Send + Sync + 'static,
    {
        self.target = Some(TargetSelector::Dynamic(Box::new(
            move |state: &S, _: Option<&dyn Any>| select(state),
        )));
        self.selector_argument = None;
        self
    }

    /// Pick the target from the source state and the firing argument.
    ///
    /// `A` must be the argument type the trigger was declared with;
    /// building rejects any other type.
    pub fn to_dynamic_with<A, F>(mut self, select: F) -> Self
    where
        A: Any,
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.target = Some(TargetSelector::Dynamic(Box::new(
            move |state: &S, argument: Option<&dyn Any>| {
                // The engine matches the descriptor before resolving, so the
                // argument is always an `A` here.
                match argument.and_then(|value| value.downcast_ref::<A>()) {
                    Some(value) => select(state, value),
                    None => state.clone(),
                }
            },
        )));
        self.selector_argument = Some(ArgumentType::of::<A>());
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Action run between the source's exit hook and the target's entry hook.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&TransitionContext<'_, S, T>) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Problems that would make this transition unusable.
    pub(crate) fn problems(&self) -> Vec<BuildError> {
        let mut problems = Vec::new();
        if self.target.is_none() {
            problems.push(BuildError::MissingTarget {
                trigger: self.descriptor.to_string(),
            });
        }
        if let Some(selector) = self.selector_argument {
            let declared = self.descriptor.argument_type();
            if declared != Some(selector) {
                problems.push(BuildError::ArgumentMismatch {
                    trigger: self.descriptor.to_string(),
                    declared: declared.map_or("no argument", |ty| ty.name()).to_string(),
                    selector: selector.name().to_string(),
                });
            }
        }
        problems
    }

    /// Build the transition.
    /// Returns the first problem found, if any.
    pub fn build(self) -> Result<TriggerTransition<S, T>, BuildError> {
        if let Some(problem) = self.problems().into_iter().next() {
            return Err(problem);
        }
        let target = self.target.ok_or_else(|| BuildError::MissingTarget {
            trigger: self.descriptor.to_string(),
        })?;

        Ok(TriggerTransition {
            descriptor: self.descriptor,
            guard: self.guard,
            target,
            action: self.action,
        })
    }
}
