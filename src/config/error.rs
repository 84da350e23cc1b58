//! Configuration error types.

use thiserror::Error;

/// A single rule a [`MotorConfig`](super::MotorConfig) broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("run_speed must be positive (got {0})")]
    NonPositiveRunSpeed(i32),

    #[error("overspeed_limit ({limit}) must not be below run_speed ({run_speed})")]
    LimitBelowRunSpeed { limit: i32, run_speed: i32 },

    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,
}

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid JSON for `MotorConfig`
    #[error("Failed to parse motor configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every rule the configuration broke, in check order
    #[error("Invalid motor configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
