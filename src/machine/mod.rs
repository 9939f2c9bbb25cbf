//! Running state machines.
//!
//! `StateMachine` holds a validated `MachineConfig`, the current state and
//! its undo/redo history. All operations are synchronous and either succeed
//! completely or fail with a `MachineError` and no change.

mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
