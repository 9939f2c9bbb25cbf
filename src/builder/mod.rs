//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for declaring machine
//! configurations with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;

use crate::core::{MachineConfig, StateDefinition};

/// Create a config where each `(from, event, to)` triple is a transition.
///
/// States are declared in order of first appearance, whether as source or
/// target.
///
/// # Example
///
/// ```
/// use statewise::builder::from_transitions;
///
/// let config = from_transitions(
///     "locked",
///     [("locked", "coin", "unlocked"), ("unlocked", "push", "locked")],
/// );
///
/// assert!(config.validate().is_ok());
/// ```
pub fn from_transitions<'a, I>(initial: &str, transitions: I) -> MachineConfig
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut config = MachineConfig::new(initial);
    for (from, event, to) in transitions {
        config
            .states
            .entry(from.to_string())
            .or_insert_with(StateDefinition::new)
            .transitions
            .insert(event.to_string(), to.to_string());
        config
            .states
            .entry(to.to_string())
            .or_insert_with(StateDefinition::new);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_transitions_declares_targets() {
        let config = from_transitions("a", [("a", "go", "b")]);

        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_transitions_with_unknown_initial_fails_validation() {
        let config = from_transitions("z", [("a", "go", "b")]);
        assert!(config.validate().is_err());
    }
}
