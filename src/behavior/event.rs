//! Status reports produced by state hooks.

use crate::core::MotorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which hook produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hook {
    Enter,
    Exit,
}

/// One status line emitted on an Enter or Exit boundary.
///
/// Each variant renders to a fixed, distinguishable line.
///
/// # Example
///
/// ```rust
/// use motorstate::behavior::MotorEvent;
///
/// let event = MotorEvent::MotorStarted { speed: 50 };
/// assert_eq!(event.to_string(), "Motor Running State: Motor started with speed 50");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorEvent {
    /// Idle entered, speed forced to zero
    Idle,

    /// Idle left
    LeavingIdle,

    /// Running entered at the nominal run speed
    MotorStarted { speed: i32 },

    /// Running left, speed forced to zero
    MotorStopped,

    /// Error entered
    ErrorOccurred { speed: i32 },

    /// Error left
    LeavingError,
}

impl MotorEvent {
    /// State whose hook produced this event.
    pub fn state(&self) -> MotorState {
        match self {
            Self::Idle | Self::LeavingIdle => MotorState::Idle,
            Self::MotorStarted { .. } | Self::MotorStopped => MotorState::Running,
            Self::ErrorOccurred { .. } | Self::LeavingError => MotorState::Error,
        }
    }

    /// Whether an enter or an exit hook produced this event.
    pub fn hook(&self) -> Hook {
        match self {
            Self::Idle | Self::MotorStarted { .. } | Self::ErrorOccurred { .. } => Hook::Enter,
            Self::LeavingIdle | Self::MotorStopped | Self::LeavingError => Hook::Exit,
        }
    }
}

impl fmt::Display for MotorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Motor Idle State: Motor is idle."),
            Self::LeavingIdle => write!(f, "Motor Idle State: Exiting idle state."),
            Self::MotorStarted { speed } => {
                write!(f, "Motor Running State: Motor started with speed {speed}")
            }
            Self::MotorStopped => write!(f, "Motor Running State: Motor stopped."),
            Self::ErrorOccurred { .. } => write!(f, "Motor Error State: An error has occurred!"),
            Self::LeavingError => write!(f, "Motor Error State: Exiting error state."),
        }
    }
}
