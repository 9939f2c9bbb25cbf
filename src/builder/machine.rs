//! Builder for constructing state machines.

use crate::core::{ConfigError, MachineConfig, StateDefinition};
use crate::machine::{MachineError, StateMachine};
use indexmap::IndexMap;

/// Builder for constructing state machines with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateDefinition>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its transitions, replacing any earlier
    /// declaration of the same name.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Declare a state with no transitions of its own.
    pub fn terminal(self, name: impl Into<String>) -> Self {
        self.state(name, StateDefinition::new())
    }

    /// Add a single transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Assemble the config without validating references between states.
    pub fn build_config(self) -> Result<MachineConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(ConfigError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build and validate the state machine.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        let config = self.build_config()?;
        StateMachine::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::new().build();

        assert!(matches!(
            result,
            Err(MachineError::Configuration(ConfigError::MissingInitialState))
        ));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().initial("idle").build_config();

        assert_eq!(result, Err(ConfigError::NoStates));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial("locked")
            .transition("locked", "coin", "unlocked")
            .transition("unlocked", "push", "locked")
            .build()
            .unwrap();

        assert_eq!(machine.state(), "locked");
        assert_eq!(machine.states(), vec!["locked", "unlocked"]);
    }

    #[test]
    fn transitions_accumulate_on_same_state() {
        let config = MachineBuilder::new()
            .initial("a")
            .transition("a", "x", "b")
            .transition("a", "y", "c")
            .terminal("b")
            .terminal("c")
            .build_config()
            .unwrap();

        let events: Vec<&str> = config.state("a").unwrap().events().collect();
        assert_eq!(events, vec!["x", "y"]);
    }

    #[test]
    fn build_rejects_dangling_target() {
        let result = MachineBuilder::new()
            .initial("a")
            .transition("a", "x", "b")
            .build();

        assert!(matches!(
            result,
            Err(MachineError::Configuration(ConfigError::UnknownTarget { .. }))
        ));
    }

    #[test]
    fn state_accepts_prebuilt_definition() {
        let machine = MachineBuilder::new()
            .initial("idle")
            .state("idle", StateDefinition::new().on("start", "running"))
            .state("running", StateDefinition::new().on("stop", "idle"))
            .build()
            .unwrap();

        assert_eq!(machine.states_for_event("start"), vec!["idle"]);
    }
}
