//! Synchronous execution engine.
//!
//! # Key Concepts
//!
//! - **StateMachine**: owns the current state cell and a shared table
//! - **Execution**: guard, destination, exit, action, entry, then commit
//! - **Diagnostics**: read-only view of what could fire right now
//!
//! Everything here runs to completion on the calling thread. There is no
//! locking; a machine that must be driven from several threads belongs
//! behind the caller's own mutex.

mod diagnostics;
mod error;
mod execution;
mod machine;

pub use diagnostics::{Diagnostics, DiagnosticsReport};
pub use error::MachineError;
pub use machine::{Lifecycle, MachineId, StateMachine};
