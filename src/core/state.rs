//! Motor operating modes.
//!
//! The motor is always in exactly one of a small, closed set of modes.
//! Modes carry no data: everything a mode decides is derived from the
//! [`DeviceState`](super::DeviceState) it is handed.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use motorstate::core::{MotorState, State};
///
/// assert_eq!(MotorState::Running.name(), "Running");
/// assert!(MotorState::Error.is_error());
/// assert!(MotorState::Error.is_sink());
/// assert!(!MotorState::Idle.is_sink());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if no update rule ever leaves this state.
    ///
    /// Default implementation returns `false`.
    fn is_sink(&self) -> bool {
        false
    }

    /// Check if this state represents a fault.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Operating mode of the motor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum MotorState {
    /// Motor stopped, waiting for a non-zero speed.
    #[default]
    Idle,

    /// Motor spinning at or below the overspeed limit.
    Running,

    /// Overspeed fault latched. Held until something outside the core resets it.
    Error,
}

impl MotorState {
    /// Every variant, in declaration order.
    pub const ALL: [MotorState; 3] = [MotorState::Idle, MotorState::Running, MotorState::Error];
}

impl State for MotorState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Error => "Error",
        }
    }

    fn is_sink(&self) -> bool {
        matches!(self, Self::Error)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
