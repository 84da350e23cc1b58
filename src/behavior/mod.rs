//! Per-mode enter, exit and update hooks.
//!
//! Each operation is a single exhaustive `match` over [`MotorState`], so
//! adding a variant fails to compile until every hook handles it.
//!
//! | Mode    | Enter                   | Exit            | Update                         |
//! |---------|-------------------------|-----------------|--------------------------------|
//! | Idle    | speed := 0              | -               | speed > 0 → Running            |
//! | Running | speed := `run_speed`    | speed := 0      | speed > `overspeed_limit` → Error |
//! | Error   | -                       | -               | stay                           |

mod event;

pub use event::{Hook, MotorEvent};

use crate::config::MotorConfig;
use crate::core::{DeviceState, MotorState};

impl MotorState {
    /// Run the enter hook and return the status line it reports.
    pub fn enter(self, device: &mut DeviceState, config: &MotorConfig) -> MotorEvent {
        match self {
            Self::Idle => {
                device.set_speed(0);
                MotorEvent::Idle
            }
            Self::Running => {
                device.set_speed(config.run_speed);
                MotorEvent::MotorStarted {
                    speed: device.speed(),
                }
            }
            Self::Error => MotorEvent::ErrorOccurred {
                speed: device.speed(),
            },
        }
    }

    /// Run the exit hook and return the status line it reports.
    pub fn exit(self, device: &mut DeviceState) -> MotorEvent {
        match self {
            Self::Idle => MotorEvent::LeavingIdle,
            Self::Running => {
                device.set_speed(0);
                MotorEvent::MotorStopped
            }
            Self::Error => MotorEvent::LeavingError,
        }
    }

    /// Evaluate the transition rule.
    ///
    /// Returns `None` to stay, or the mode to switch to. Pure in
    /// `(self, device.speed())`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use motorstate::config::MotorConfig;
    /// use motorstate::core::{DeviceState, MotorState};
    ///
    /// let config = MotorConfig::default();
    /// let mut device = DeviceState::new();
    /// device.set_speed(101);
    ///
    /// assert_eq!(MotorState::Running.update(&device, &config), Some(MotorState::Error));
    /// assert_eq!(MotorState::Error.update(&device, &config), None);
    /// ```
    pub fn update(self, device: &DeviceState, config: &MotorConfig) -> Option<MotorState> {
        let speed = device.speed();
        match self {
            Self::Idle if speed > 0 => Some(Self::Running),
            Self::Running if speed > config.overspeed_limit => Some(Self::Error),
            Self::Idle | Self::Running => None,
            // Latched until reset from outside.
            Self::Error => None,
        }
    }
}
