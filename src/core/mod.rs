//! Core data types for state machines.
//!
//! This module contains the plain data the engine runs on:
//! - Machine definitions via `MachineConfig` and `StateDefinition`
//! - Undo/redo stacks via `History`
//! - Configuration errors via `ConfigError`
//!
//! Nothing here performs I/O; every type is an owned value.

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDefinition};
pub use error::ConfigError;
pub use history::History;
