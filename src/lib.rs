//! Statewise: a string-keyed finite state machine engine
//!
//! A machine is described by a [`MachineConfig`]: an initial state and, per
//! state, a table mapping event names to target states. A [`StateMachine`]
//! built from it tracks the current state, moves either explicitly or in
//! response to events, and keeps undo/redo history of visited states.
//!
//! # Core Concepts
//!
//! - **Config**: Declarative state and transition tables via `MachineConfig`
//! - **Machine**: Synchronous, single-owner execution via `StateMachine`
//! - **History**: Undo/redo stacks of previously visited states
//! - **Snapshots**: Serializable copies of a machine's runtime state
//!
//! # Example
//!
//! ```rust
//! use statewise::{MachineConfig, StateDefinition, StateMachine};
//!
//! let config = MachineConfig::new("idle")
//!     .with_state("idle", StateDefinition::new().on("start", "running"))
//!     .with_state(
//!         "running",
//!         StateDefinition::new().on("stop", "idle").on("pause", "paused"),
//!     )
//!     .with_state("paused", StateDefinition::new().on("resume", "running"));
//!
//! let mut machine = StateMachine::new(config).unwrap();
//!
//! machine.trigger("start").unwrap();
//! machine.trigger("pause").unwrap();
//! assert!(machine.undo());
//! assert!(machine.undo());
//! assert!(!machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "running");
//! assert_eq!(machine.states_for_event("stop"), vec!["running"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use self::core::{ConfigError, History, MachineConfig, StateDefinition};
pub use machine::{MachineError, StateMachine};
pub use snapshot::{Snapshot, SnapshotError};
