//! Snapshot and restore of a machine's runtime state.
//!
//! A snapshot captures where a machine is and how it got there (current
//! state plus both history stacks). It does not carry the machine's
//! configuration, so it can only be restored into a machine built from a
//! config that declares every state it mentions.

use crate::core::History;
use crate::machine::StateMachine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a machine's runtime state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Current state of the machine
    pub current_state: String,

    /// Undo stack, most recent last
    pub undo: Vec<String>,

    /// Redo stack, most recent last
    pub redo: Vec<String>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Every state name the snapshot refers to.
    fn state_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.current_state.as_str())
            .chain(self.undo.iter().map(String::as_str))
            .chain(self.redo.iter().map(String::as_str))
    }
}

impl StateMachine {
    /// Capture the current state and both history stacks.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            current_state: self.current.clone(),
            undo: self.history.undo_stack().to_vec(),
            redo: self.history.redo_stack().to_vec(),
        }
    }

    /// Replace the runtime state with `snapshot`.
    ///
    /// Every state the snapshot mentions must be declared by this machine's
    /// config. On error the machine is left untouched.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if let Some(unknown) = snapshot.state_names().find(|s| !self.is_known_state(s)) {
            return Err(SnapshotError::ValidationFailed(format!(
                "state '{unknown}' is not declared"
            )));
        }

        debug!(id = %snapshot.id, state = %snapshot.current_state, "restoring snapshot");
        self.current = snapshot.current_state;
        self.history = History::from_stacks(snapshot.undo, snapshot.redo);
        Ok(())
    }
}
