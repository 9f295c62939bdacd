//! Builder API for constructing transition tables.
//!
//! This module provides fluent builders and macros for creating a
//! [`Configuration`](crate::core::Configuration) with minimal boilerplate.
//! The engine itself never depends on it: any internally consistent table
//! works.

pub mod configuration;
pub mod error;
pub mod macros;
pub mod state;
pub mod transition;

pub use configuration::ConfigurationBuilder;
pub use error::{BuildError, ConfigurationError};
pub use state::StateBuilder;
pub use transition::TransitionBuilder;
