//! Declarative machine definitions.
//!
//! A [`MachineConfig`] names the initial state and maps every state name to
//! a [`StateDefinition`], which in turn maps event names to target states.
//! Both maps keep declaration order.

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transitions offered by a single state.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateDefinition;
///
/// let running = StateDefinition::new()
///     .on("stop", "idle")
///     .on("pause", "paused");
///
/// assert_eq!(running.target("pause"), Some("paused"));
/// assert_eq!(running.target("start"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event name to target state name
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDefinition {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition taken when `event` is raised in this state.
    ///
    /// Declaring the same event twice keeps the last target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state declares it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state declares `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Declared event names in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Complete definition of a state machine.
///
/// The JSON form mirrors the struct:
///
/// ```rust
/// use statewise::core::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Name of the starting state
    pub initial: String,
    /// State name to definition, in declaration order
    pub states: IndexMap<String, StateDefinition>,
}

impl MachineConfig {
    /// Create a config with the given initial state and no states yet.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add (or replace) a state definition.
    pub fn with_state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Parse a config from JSON.
    ///
    /// `null` and `{}` count as an absent config and yield
    /// [`ConfigError::Missing`]. The result is not validated; see
    /// [`MachineConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let absent = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        };
        if absent {
            return Err(ConfigError::Missing);
        }

        // Parse the text again rather than the Value so key order survives.
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Definition of `state`, if declared.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Check whether `state` is declared.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Check that the config can drive a machine.
    ///
    /// At least one state must be declared, the initial state must be one of
    /// them, and every transition must target a declared state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitialState {
                initial: self.initial.clone(),
            });
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                if !self.contains_state(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> MachineConfig {
        MachineConfig::new("idle")
            .with_state("idle", StateDefinition::new().on("start", "running"))
            .with_state(
                "running",
                StateDefinition::new().on("stop", "idle").on("pause", "paused"),
            )
            .with_state("paused", StateDefinition::new().on("resume", "running"))
    }

    #[test]
    fn valid_config_passes_validation() {
        assert_eq!(player().validate(), Ok(()));
    }

    #[test]
    fn empty_config_has_no_states() {
        assert_eq!(MachineConfig::default().validate(), Err(ConfigError::NoStates));
    }

    #[test]
    fn undeclared_initial_is_rejected() {
        let config = MachineConfig::new("nowhere").with_state("idle", StateDefinition::new());

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownInitialState {
                initial: "nowhere".to_string()
            })
        );
    }

    #[test]
    fn undeclared_target_is_rejected() {
        let config = MachineConfig::new("idle")
            .with_state("idle", StateDefinition::new().on("start", "running"));

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownTarget {
                state: "idle".to_string(),
                event: "start".to_string(),
                target: "running".to_string(),
            })
        );
    }

    #[test]
    fn state_with_no_transitions_is_allowed() {
        let config = MachineConfig::new("done").with_state("done", StateDefinition::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_preserves_declaration_order() {
        let config = MachineConfig::from_json(
            r#"{
                "initial": "zeta",
                "states": {
                    "zeta": { "transitions": { "b": "alpha", "a": "mid" } },
                    "alpha": { "transitions": {} },
                    "mid": {}
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);

        let events: Vec<&str> = config.state("zeta").unwrap().events().collect();
        assert_eq!(events, vec!["b", "a"]);
        assert!(config.state("mid").unwrap().transitions.is_empty());
    }

    #[test]
    fn from_json_treats_null_and_empty_as_missing() {
        assert_eq!(MachineConfig::from_json("null"), Err(ConfigError::Missing));
        assert_eq!(MachineConfig::from_json("{}"), Err(ConfigError::Missing));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        assert!(matches!(
            MachineConfig::from_json("{\"initial\": 3}"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            MachineConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn json_round_trip_keeps_config() {
        let config = player();
        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn later_declaration_of_event_wins() {
        let definition = StateDefinition::new().on("go", "a").on("go", "b");
        assert_eq!(definition.target("go"), Some("b"));
        assert_eq!(definition.events().count(), 1);
    }
}
