//! Builder for one state's hooks and permitted transitions.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{
    Hook, HookError, ParameterizedTrigger, State, StateRepresentation, TransitionContext, Trigger,
};
use std::any::Any;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Collects the entry/exit hooks and transitions of a single state.
///
/// Handed to the closure passed to
/// [`ConfigurationBuilder::state`](crate::builder::ConfigurationBuilder::state).
/// Setting a hook twice keeps the last one.
pub struct StateBuilder<S: State, T: Trigger> {
    state: S,
    on_entry: Option<Hook<S, T>>,
    on_exit: Option<Hook<S, T>>,
    transitions: Vec<TransitionBuilder<S, T>>,
}

impl<S: State, T: Trigger> StateBuilder<S, T> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            state,
            on_entry: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Hook run when a transition arrives in this state, reentry included.
    pub fn on_entry<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TransitionContext<'_, S, T>) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.on_entry = Some(Box::new(hook));
        self
    }

    /// Hook run when a transition leaves this state, reentry included.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&TransitionContext<'_, S, T>) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Add a fully specified transition.
    pub fn transition(mut self, transition: TransitionBuilder<S, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// `trigger` moves to `target` unconditionally.
    pub fn permit(self, trigger: T, target: S) -> Self {
        self.transition(TransitionBuilder::new(trigger).to(target))
    }

    /// `trigger` moves to `target` while `guard` holds.
    pub fn permit_if<F>(self, trigger: T, target: S, guard: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.transition(TransitionBuilder::new(trigger).to(target).when(guard))
    }

    /// `trigger` leaves and re-enters this state, running exit then entry.
    pub fn permit_reentry(self, trigger: T) -> Self {
        let target = self.state.clone();
        self.permit(trigger, target)
    }

    /// `trigger` moves to whatever `select` returns.
    pub fn permit_dynamic<F>(self, trigger: T, select: F) -> Self
    where
        F: Fn(&S) -> S + Send + Sync + 'static,
    {
        self.transition(TransitionBuilder::new(trigger).to_dynamic(select))
    }

    /// Parameterized `trigger` moves to `target`.
    pub fn permit_with<A: Any>(self, trigger: &ParameterizedTrigger<T, A>, target: S) -> Self {
        self.transition(TransitionBuilder::parameterized(trigger).to(target))
    }

    /// Parameterized `trigger` moves to the state chosen from its argument.
    pub fn permit_dynamic_with<A, F>(
        self,
        trigger: &ParameterizedTrigger<T, A>,
        select: F,
    ) -> Self
    where
        A: Any,
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.transition(TransitionBuilder::parameterized(trigger).to_dynamic_with(select))
    }

    /// Check this state's transitions, collecting every problem.
    pub(crate) fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();
        let mut seen = HashSet::new();

        for transition in &self.transitions {
            checks.extend(transition.problems().into_iter().map(Validation::fail));
            if !seen.insert(transition.trigger()) {
                checks.push(Validation::fail(BuildError::DuplicateTrigger {
                    state: self.state.name().to_string(),
                    trigger: transition.trigger().name().to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    pub(crate) fn build(self) -> Result<StateRepresentation<S, T>, BuildError> {
        let transitions = self
            .transitions
            .into_iter()
            .map(TransitionBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StateRepresentation::new(
            self.state,
            self.on_entry,
            self.on_exit,
            transitions,
        ))
    }
}
