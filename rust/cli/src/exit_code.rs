//! Exit codes returned by [`crate::run`].

/// Command finished normally.
pub const SUCCESS: i32 = 0;

/// Invalid input, configuration or engine failure.
pub const ERROR: i32 = 2;

/// Input closed before the session finished.
pub const INTERRUPTED: i32 = 130;
