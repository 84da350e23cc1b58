//! Tunable limits for the motor controller.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration and reproduces the stock behavior: run at 50, fault
//! above 100.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Speed assigned when the motor starts running.
pub const DEFAULT_RUN_SPEED: i32 = 50;

/// Running faults once speed goes strictly above this.
pub const DEFAULT_OVERSPEED_LIMIT: i32 = 100;

/// Transition records kept by the controller.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Motor controller configuration.
///
/// # Example
///
/// ```rust
/// use motorstate::config::MotorConfig;
///
/// let config = MotorConfig::from_json(r#"{ "overspeed_limit": 120 }"#).unwrap();
/// assert_eq!(config.run_speed, 50);
/// assert_eq!(config.overspeed_limit, 120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotorConfig {
    /// Speed written by the Running enter hook
    pub run_speed: i32,

    /// Highest speed Running tolerates before requesting Error
    pub overspeed_limit: i32,

    /// Maximum number of transition records retained
    pub history_capacity: usize,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            run_speed: DEFAULT_RUN_SPEED,
            overspeed_limit: DEFAULT_OVERSPEED_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MotorConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: MotorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule, reporting all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    fn check(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            if self.run_speed > 0 {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::NonPositiveRunSpeed(self.run_speed))
            },
            if self.overspeed_limit >= self.run_speed {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::LimitBelowRunSpeed {
                    limit: self.overspeed_limit,
                    run_speed: self.run_speed,
                })
            },
            if self.history_capacity > 0 {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::ZeroHistoryCapacity)
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}
