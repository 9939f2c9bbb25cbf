//! Configuration errors.

use thiserror::Error;

/// Errors raised while building or validating a [`MachineConfig`].
///
/// [`MachineConfig`]: crate::core::MachineConfig
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config is not defined")]
    Missing,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Declare at least one state")]
    NoStates,

    #[error("Initial state '{initial}' is not declared")]
    UnknownInitialState { initial: String },

    #[error("Event '{event}' in state '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Config could not be parsed: {0}")]
    Parse(String),
}
