//! Undo/redo history of visited states.
//!
//! History is a pair of stacks. Forward moves record the state being left
//! and discard every redo candidate; undo and redo shuttle names between
//! the two stacks without consulting the machine's configuration.

use serde::{Deserialize, Serialize};
use std::mem;

/// Undo and redo stacks of state names, most recent last.
///
/// # Example
///
/// ```rust
/// use statewise::core::History;
///
/// let mut history = History::new();
/// let mut current = String::from("running");
///
/// history.record("idle".to_string());
/// assert!(history.step_back(&mut current));
/// assert_eq!(current, "idle");
///
/// assert!(history.step_forward(&mut current));
/// assert_eq!(current, "running");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from raw stacks, most recent last.
    pub fn from_stacks(undo: Vec<String>, redo: Vec<String>) -> Self {
        Self { undo, redo }
    }

    /// Record a forward move away from `previous`.
    ///
    /// Redo candidates are invalidated by any forward move.
    pub fn record(&mut self, previous: String) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Swap `current` with the most recent undo entry.
    ///
    /// The replaced state is pushed onto the redo stack. Returns `false` and
    /// leaves everything untouched when there is nothing to undo.
    pub fn step_back(&mut self, current: &mut String) -> bool {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(mem::replace(current, previous));
                true
            }
            None => false,
        }
    }

    /// Swap `current` with the most recent redo entry.
    ///
    /// The replaced state is pushed onto the undo stack. Returns `false` and
    /// leaves everything untouched when there is nothing to redo.
    pub fn step_forward(&mut self, current: &mut String) -> bool {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(mem::replace(current, next));
                true
            }
            None => false,
        }
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// True when both stacks are empty.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }

    /// Undo stack, most recent last.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// Redo stack, most recent last.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stack: &[String]) -> Vec<&str> {
        stack.iter().map(String::as_str).collect()
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_previous_state() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());

        assert_eq!(names(history.undo_stack()), vec!["a", "b"]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn record_clears_redo() {
        let mut history = History::new();
        let mut current = "b".to_string();
        history.record("a".to_string());
        assert!(history.step_back(&mut current));
        assert!(history.can_redo());

        history.record("a".to_string());
        assert!(!history.can_redo());
    }

    #[test]
    fn step_back_on_empty_history_changes_nothing() {
        let mut history = History::new();
        let mut current = "a".to_string();

        assert!(!history.step_back(&mut current));
        assert_eq!(current, "a");
        assert!(history.is_empty());
    }

    #[test]
    fn step_forward_on_empty_redo_changes_nothing() {
        let mut history = History::new();
        history.record("a".to_string());
        let mut current = "b".to_string();

        assert!(!history.step_forward(&mut current));
        assert_eq!(current, "b");
        assert_eq!(names(history.undo_stack()), vec!["a"]);
    }

    #[test]
    fn step_back_then_forward_restores_current() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        let mut current = "c".to_string();

        assert!(history.step_back(&mut current));
        assert_eq!(current, "b");
        assert_eq!(names(history.redo_stack()), vec!["c"]);

        assert!(history.step_forward(&mut current));
        assert_eq!(current, "c");
        assert_eq!(names(history.undo_stack()), vec!["a", "b"]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        let mut current = "c".to_string();
        history.record("a".to_string());
        history.record("b".to_string());
        history.step_back(&mut current);

        history.clear();

        assert!(history.is_empty());
        assert_eq!(current, "b");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::from_stacks(vec!["a".to_string()], vec!["c".to_string()]);
        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
