//! Errors raised by machine operations.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when constructing or driving a [`StateMachine`].
///
/// Every failing operation leaves the machine exactly as it was.
///
/// [`StateMachine`]: crate::machine::StateMachine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("State '{state}' is not found")]
    UnknownState { state: String },

    #[error("Event '{event}' does not exist in state '{state}'")]
    InvalidTransition { event: String, state: String },
}
