//! State machine facade that applications hold.

use crate::core::{
    Configuration, ParameterizedTrigger, RepresentationId, State, StateTransition,
    TransitionOption, Trigger, TriggerDescriptor,
};
use crate::engine::diagnostics::Diagnostics;
use crate::engine::error::MachineError;
use crate::engine::execution::{self, FiredArgument};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Identifier of one machine instance, used to correlate log records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(Uuid);

impl MachineId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of the facade itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Fires and moves are executed.
    Enabled,
    /// Terminal: fires and moves are absorbed without effect or error.
    Disabled,
}

type Listener<S, T> = Box<dyn Fn(&StateTransition<S, T>) + Send + Sync>;

/// A running state machine over a shared [`Configuration`].
///
/// The only mutable transition state is the current slot; the table is
/// shared through an `Arc` and never written. Mutating calls take
/// `&mut self`, so concurrent fires on one machine need an external lock.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use switchyard::builder::ConfigurationBuilder;
/// use switchyard::engine::StateMachine;
///
/// let config = ConfigurationBuilder::new()
///     .state("Idle".to_string(), |s| s.permit("start", "Running".to_string()))
///     .state("Running".to_string(), |s| s.permit("stop", "Idle".to_string()))
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new("Idle".to_string(), Arc::new(config)).unwrap();
/// machine.fire("start").unwrap();
/// assert_eq!(machine.current_state(), "Running");
/// assert!(machine.fire("start").unwrap_err().is_invalid_trigger());
/// ```
pub struct StateMachine<S: State, T: Trigger> {
    id: MachineId,
    configuration: Arc<Configuration<S, T>>,
    current: RepresentationId,
    lifecycle: Lifecycle,
    listeners: Vec<Listener<S, T>>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine seated in `initial`.
    ///
    /// Fails with [`MachineError::InvalidState`] if `initial` is not declared.
    /// No entry hook runs for the initial state.
    pub fn new(
        initial: S,
        configuration: Arc<Configuration<S, T>>,
    ) -> Result<Self, MachineError<S, T>> {
        let current = configuration
            .find(&initial)
            .ok_or(MachineError::InvalidState { state: initial })?;

        let machine = Self {
            id: MachineId::new(),
            configuration,
            current,
            lifecycle: Lifecycle::Enabled,
            listeners: Vec::new(),
        };
        debug!(
            machine = %machine.id,
            state = machine.current_state().name(),
            "machine created"
        );
        Ok(machine)
    }

    pub fn id(&self) -> MachineId {
        self.id
    }

    pub fn current_state(&self) -> &S {
        self.configuration.representation(self.current).state()
    }

    pub fn configuration(&self) -> &Arc<Configuration<S, T>> {
        &self.configuration
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_enabled(&self) -> bool {
        self.lifecycle == Lifecycle::Enabled
    }

    /// Read-only view for querying which triggers are currently legal.
    pub fn diagnostics(&self) -> Diagnostics<'_, S, T> {
        Diagnostics::new(self)
    }

    pub(crate) fn current_slot(&self) -> RepresentationId {
        self.current
    }

    /// Register a callback invoked after every committed transition.
    ///
    /// Listeners run in registration order and never see failed attempts.
    pub fn on_transition<F>(&mut self, listener: F)
    where
        F: Fn(&StateTransition<S, T>) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Fire a plain trigger.
    ///
    /// A no-op returning `Ok(())` once the machine is stopped.
    pub fn fire(&mut self, trigger: T) -> Result<(), MachineError<S, T>> {
        self.fire_core(trigger, None)
    }

    /// Fire a parameterized trigger with its argument.
    ///
    /// The argument is visible to the destination selector, the trigger
    /// action and the hooks through [`TransitionContext::argument`].
    ///
    /// [`TransitionContext::argument`]: crate::core::TransitionContext::argument
    pub fn fire_with<A: Any>(
        &mut self,
        trigger: &ParameterizedTrigger<T, A>,
        argument: A,
    ) -> Result<(), MachineError<S, T>> {
        self.fire_core(
            trigger.trigger().clone(),
            Some(FiredArgument::typed(&argument)),
        )
    }

    /// Fire `trigger` with an argument whose type is only known at run time.
    ///
    /// Fails with [`MachineError::InvalidTrigger`] unless the mapped
    /// transition is parameterized with exactly the argument's type.
    pub fn fire_dyn(
        &mut self,
        trigger: T,
        argument: &dyn Any,
    ) -> Result<(), MachineError<S, T>> {
        self.fire_core(trigger, Some(FiredArgument::dynamic(argument)))
    }

    /// Re-seat the machine in `state` without matching a trigger.
    ///
    /// `option` selects which of the exit and entry hooks run. Hooks see no
    /// trigger and no argument. A no-op once the machine is stopped.
    pub fn move_to_state(
        &mut self,
        state: S,
        option: TransitionOption,
    ) -> Result<(), MachineError<S, T>> {
        if !self.is_enabled() {
            debug!(
                machine = %self.id,
                state = state.name(),
                "move ignored, machine stopped"
            );
            return Ok(());
        }

        let config = &*self.configuration;
        let from = self.current;
        let to = execution::move_to(config, from, &state, option)?;
        self.current = to;

        debug!(
            machine = %self.id,
            from = config.representation(from).state().name(),
            to = state.name(),
            option = ?option,
            "state moved"
        );
        self.notify(config, from, to, None);
        Ok(())
    }

    /// Stop the machine. Terminal: there is no way to re-enable it.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Enabled {
            self.lifecycle = Lifecycle::Disabled;
            info!(
                machine = %self.id,
                state = self.current_state().name(),
                "machine stopped"
            );
        }
    }

    fn fire_core(
        &mut self,
        trigger: T,
        argument: Option<FiredArgument<'_>>,
    ) -> Result<(), MachineError<S, T>> {
        if !self.is_enabled() {
            debug!(
                machine = %self.id,
                trigger = trigger.name(),
                "trigger ignored, machine stopped"
            );
            return Ok(());
        }

        let config = &*self.configuration;
        let from = self.current;
        let fired = match execution::fire(config, from, &trigger, argument) {
            Ok(fired) => fired,
            Err(error) => {
                debug!(
                    machine = %self.id,
                    state = config.representation(from).state().name(),
                    trigger = trigger.name(),
                    %error,
                    "trigger rejected"
                );
                return Err(error);
            }
        };
        self.current = fired.destination;

        debug!(
            machine = %self.id,
            from = config.representation(from).state().name(),
            to = config.representation(fired.destination).state().name(),
            trigger = %fired.descriptor,
            "transition committed"
        );
        self.notify(config, from, fired.destination, Some(fired.descriptor));
        Ok(())
    }

    fn notify(
        &self,
        config: &Configuration<S, T>,
        from: RepresentationId,
        to: RepresentationId,
        trigger: Option<&TriggerDescriptor<T>>,
    ) {
        if self.listeners.is_empty() {
            return;
        }
        let record = StateTransition {
            from: config.representation(from).state().clone(),
            to: config.representation(to).state().clone(),
            trigger: trigger.cloned(),
        };
        for listener in &self.listeners {
            listener(&record);
        }
    }
}

impl<S: State, T: Trigger> fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("current", self.current_state())
            .field("lifecycle", &self.lifecycle)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
