//! Core state machine types.
//!
//! This module contains the data side of the engine:
//! - State and trigger identities via the `State` and `Trigger` traits
//! - Plain and parameterized trigger descriptors
//! - Guard predicates and hook signatures
//! - The immutable transition table (`Configuration`)
//!
//! Nothing in here mutates after construction; the only mutable piece of a
//! running machine lives in [`crate::engine::StateMachine`].

mod configuration;
mod context;
mod guard;
mod representation;
mod state;
mod trigger;

pub use configuration::Configuration;
pub(crate) use configuration::RepresentationId;
pub use context::{StateTransition, TransitionContext, TransitionOption};
pub use guard::Guard;
pub use representation::{
    Hook, HookError, Selector, StateRepresentation, TargetSelector, TriggerTransition,
};
pub use state::{State, Trigger};
pub use trigger::{ArgumentType, ParameterizedTrigger, TriggerDescriptor};
