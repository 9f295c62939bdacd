//! Switchyard: a synchronous, trigger-driven state machine engine
//!
//! Applications declare states, triggers and the transitions between them
//! once, as an immutable [`Configuration`](core::Configuration). Any number
//! of [`StateMachine`](engine::StateMachine)s then run over that shared
//! table, each owning nothing but its current state.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: opaque, hashable identities via the `State` and
//!   `Trigger` traits
//! - **Parameterized triggers**: triggers that must be fired with an
//!   argument of a declared type
//! - **Guards**: predicates deciding whether a mapped transition may fire
//! - **Hooks**: entry, exit and trigger actions run in a fixed order, with
//!   the state committed only once all of them succeed
//! - **Diagnostics**: read-only queries for what could fire right now
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use switchyard::builder::ConfigurationBuilder;
//! use switchyard::core::ParameterizedTrigger;
//! use switchyard::engine::StateMachine;
//! use switchyard::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum Mode {
//!         Viewing,
//!         Editing,
//!     }
//! }
//!
//! trigger_enum! {
//!     enum Action {
//!         Edit,
//!         SetValue,
//!         Save,
//!     }
//! }
//!
//! let set_value = ParameterizedTrigger::<Action, i32>::new(Action::SetValue);
//!
//! let config = ConfigurationBuilder::new()
//!     .state(Mode::Viewing, |s| s.permit(Action::Edit, Mode::Editing))
//!     .state(Mode::Editing, |s| {
//!         s.permit_with(&set_value, Mode::Editing)
//!             .permit(Action::Save, Mode::Viewing)
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(Mode::Viewing, Arc::new(config)).unwrap();
//! assert!(machine.fire_with(&set_value, 42).is_err());
//!
//! machine.fire(Action::Edit).unwrap();
//! machine.fire_with(&set_value, 42).unwrap();
//! assert_eq!(machine.current_state(), &Mode::Editing);
//! assert!(machine.diagnostics().can_handle_trigger(&Action::Save, true));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{ConfigurationBuilder, TransitionBuilder};
pub use crate::core::{
    Configuration, Guard, ParameterizedTrigger, State, TransitionContext, TransitionOption,
    Trigger,
};
pub use crate::engine::{Diagnostics, Lifecycle, MachineError, StateMachine};
