//! Turnstile State Machine
//!
//! This example drives a coin-operated turnstile and walks its history.
//!
//! Key concepts:
//! - Event-driven transitions
//! - Undo/redo of visited states
//! - Snapshots of runtime state
//!
//! Run with: RUST_LOG=debug cargo run --example turnstile

use statewise::{MachineBuilder, MachineError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Turnstile State Machine ===\n");

    let mut machine = MachineBuilder::new()
        .initial("locked")
        .transition("locked", "coin", "unlocked")
        .transition("unlocked", "push", "locked")
        .build()?;

    println!("Initial state: {}", machine.state());

    for event in ["coin", "push", "coin"] {
        machine.trigger(event)?;
        println!("  {event:<5} -> {}", machine.state());
    }

    if let Err(err) = machine.trigger("coin") {
        println!("Rejected: {err}");
    }

    while machine.undo() {
        println!("  undo  -> {}", machine.state());
    }
    while machine.redo() {
        println!("  redo  -> {}", machine.state());
    }

    let snapshot = machine.snapshot();
    println!(
        "\nSnapshot {}: state={}, undo depth={}",
        snapshot.id,
        snapshot.current_state,
        snapshot.undo.len()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
