//! State machine driven by explicit moves and named events.

use crate::core::{History, MachineConfig};
use crate::machine::error::MachineError;
use tracing::debug;

/// Finite state machine over string-named states.
///
/// The machine owns its configuration, its current state, and an undo/redo
/// [`History`]. Successful forward moves (`change_state`, `trigger`) record
/// the state being left and invalidate redo; `reset` jumps to the initial
/// state without touching history.
///
/// # Example
///
/// ```rust
/// use statewise::machine_config;
/// use statewise::StateMachine;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "pause" => "paused" },
///         "paused" => { "resume" => "running" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("start").unwrap();
/// machine.trigger("pause").unwrap();
/// assert_eq!(machine.state(), "paused");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// assert_eq!(machine.states_for_event("stop"), vec!["running"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    pub(crate) config: MachineConfig,
    pub(crate) current: String,
    pub(crate) history: History,
}

impl StateMachine {
    /// Create a machine in the config's initial state.
    ///
    /// The config is validated first; see [`MachineConfig::validate`].
    pub fn new(config: MachineConfig) -> Result<Self, MachineError> {
        config.validate()?;

        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");

        Ok(Self {
            config,
            current,
            history: History::new(),
        })
    }

    /// Create a machine from a config that may be absent.
    ///
    /// `None` fails with [`ConfigError::Missing`].
    ///
    /// [`ConfigError::Missing`]: crate::core::ConfigError::Missing
    pub fn from_optional(config: Option<MachineConfig>) -> Result<Self, MachineError> {
        let config = config.ok_or(crate::core::ConfigError::Missing)?;
        Self::new(config)
    }

    /// Current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Initial state (pure)
    pub fn initial_state(&self) -> &str {
        &self.config.initial
    }

    /// Configuration the machine was built from (pure)
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Undo/redo history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check whether `state` is declared in the configuration.
    pub fn is_known_state(&self, state: &str) -> bool {
        self.config.contains_state(state)
    }

    /// Move to `state` unconditionally.
    ///
    /// Fails with [`MachineError::UnknownState`] if `state` is not declared.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.is_known_state(state) {
            debug!(current = %self.current, requested = state, "rejected change to unknown state");
            return Err(MachineError::UnknownState {
                state: state.to_string(),
            });
        }

        self.advance(state.to_string());
        Ok(())
    }

    /// Take the transition declared for `event` in the current state.
    ///
    /// Fails with [`MachineError::InvalidTransition`] if the current state
    /// does not declare `event`.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .state(&self.current)
            .and_then(|definition| definition.target(event))
            .map(str::to_string);

        let Some(target) = target else {
            debug!(current = %self.current, event, "rejected event with no transition");
            return Err(MachineError::InvalidTransition {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };

        debug!(event, "event accepted");
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state. History is left as is.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// All declared states in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.states.keys().map(String::as_str).collect()
    }

    /// States that declare a transition for `event`, in declaration order.
    ///
    /// Unknown events yield an empty list.
    pub fn states_for_event(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Events the current state declares, in declaration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Check whether `event` would be accepted in the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.config
            .state(&self.current)
            .is_some_and(|definition| definition.handles(event))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Go back to the previously visited state.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.step_back(&mut self.current);
        if moved {
            debug!(%from, to = %self.current, "undo");
        }
        moved
    }

    /// Re-apply the most recently undone move.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.step_forward(&mut self.current);
        if moved {
            debug!(%from, to = %self.current, "redo");
        }
        moved
    }

    /// Forget all undo and redo entries. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            undo = self.history.undo_stack().len(),
            redo = self.history.redo_stack().len(),
            "history cleared"
        );
        self.history.clear();
    }

    /// Forward move shared by `change_state` and `trigger`. `target` is
    /// already known to be declared.
    fn advance(&mut self, target: String) {
        let previous = std::mem::replace(&mut self.current, target);
        debug!(from = %previous, to = %self.current, "transitioned");
        self.history.record(previous);
    }
}
