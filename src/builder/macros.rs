//! Macros for ergonomic config construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a literal table.
///
/// The result is not validated; pass it to `StateMachine::new`.
///
/// # Example
///
/// ```
/// use statewise::machine_config;
///
/// let config = machine_config! {
///     initial: "green",
///     states: {
///         "green" => { "timer" => "yellow" },
///         "yellow" => { "timer" => "red" },
///         "red" => { "timer" => "green" },
///     }
/// };
///
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::MachineConfig::new($initial)
            $(
                .with_state(
                    $state,
                    $crate::core::StateDefinition::new() $(.on($event, $target))*,
                )
            )*
    };
}
