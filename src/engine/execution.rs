//! The transition algorithm.
//!
//! Both entry points are decision functions over the immutable table and the
//! caller's current slot: they run hooks and report where the machine should
//! go, but never write the current slot themselves. The facade commits only
//! after `Ok`, which is what makes a failing hook leave the state untouched.

use crate::core::{
    ArgumentType, Configuration, Hook, RepresentationId, State, TransitionContext,
    TransitionOption, Trigger, TriggerDescriptor,
};
use crate::engine::error::MachineError;
use std::any::Any;

/// Argument supplied with a fire, together with the type it claims to be.
#[derive(Clone, Copy)]
pub(crate) struct FiredArgument<'a> {
    pub value: &'a dyn Any,
    pub ty: ArgumentType,
}

impl<'a> FiredArgument<'a> {
    pub fn typed<A: Any>(value: &'a A) -> Self {
        Self {
            value,
            ty: ArgumentType::of::<A>(),
        }
    }

    pub fn dynamic(value: &'a dyn Any) -> Self {
        Self {
            value,
            ty: ArgumentType::of_value(value),
        }
    }
}

/// Where a successful fire lands.
pub(crate) struct Fired<'c, T: Trigger> {
    pub destination: RepresentationId,
    /// The table's descriptor of the transition that was taken.
    pub descriptor: &'c TriggerDescriptor<T>,
}

/// Fire `trigger` from `current`.
///
/// Order: match, guard, destination, exit hook, trigger action, entry hook.
pub(crate) fn fire<'c, S: State, T: Trigger>(
    config: &'c Configuration<S, T>,
    current: RepresentationId,
    trigger: &T,
    argument: Option<FiredArgument<'_>>,
) -> Result<Fired<'c, T>, MachineError<S, T>> {
    let source = config.representation(current);
    let state = source.state();
    let value = argument.map(|arg| arg.value);

    let transition = source
        .transition(trigger)
        .filter(|t| t.descriptor.accepts(value) && t.is_permitted(state))
        .ok_or_else(|| invalid_trigger(state, trigger, argument))?;

    let destination_state = transition.target.resolve(state, value);

    let destination = config
        .find(&destination_state)
        .ok_or_else(|| MachineError::InvalidState {
            state: destination_state.clone(),
        })?;

    let target = config.representation(destination);
    let ctx = TransitionContext {
        source: state,
        destination: target.state(),
        trigger: Some(&transition.descriptor),
        argument: value,
    };

    run(source.on_exit(), &ctx)?;
    run(transition.action.as_ref(), &ctx)?;
    run(target.on_entry(), &ctx)?;

    Ok(Fired {
        destination,
        descriptor: &transition.descriptor,
    })
}

/// Re-seat from `current` to `state` without trigger matching.
pub(crate) fn move_to<S: State, T: Trigger>(
    config: &Configuration<S, T>,
    current: RepresentationId,
    state: &S,
    option: TransitionOption,
) -> Result<RepresentationId, MachineError<S, T>> {
    let destination = config
        .find(state)
        .ok_or_else(|| MachineError::InvalidState {
            state: state.clone(),
        })?;

    let source = config.representation(current);
    let target = config.representation(destination);
    let ctx = TransitionContext {
        source: source.state(),
        destination: target.state(),
        trigger: None,
        argument: None,
    };

    if option.runs_exit() {
        run(source.on_exit(), &ctx)?;
    }
    if option.runs_entry() {
        run(target.on_entry(), &ctx)?;
    }

    Ok(destination)
}

fn run<S: State, T: Trigger>(
    hook: Option<&Hook<S, T>>,
    ctx: &TransitionContext<'_, S, T>,
) -> Result<(), MachineError<S, T>> {
    match hook {
        Some(hook) => hook(ctx).map_err(MachineError::Hook),
        None => Ok(()),
    }
}

fn invalid_trigger<S: State, T: Trigger>(
    state: &S,
    trigger: &T,
    argument: Option<FiredArgument<'_>>,
) -> MachineError<S, T> {
    let trigger = match argument {
        None => TriggerDescriptor::Plain(trigger.clone()),
        Some(arg) => TriggerDescriptor::Parameterized {
            trigger: trigger.clone(),
            argument: arg.ty,
        },
    };
    MachineError::InvalidTrigger {
        state: state.clone(),
        trigger,
    }
}
