//! Mutable device fields the state machine operates on.

use serde::{Deserialize, Serialize};

/// Shared mutable context handed to every state hook.
///
/// No validation is performed: negative or very large speeds are stored
/// as given and it is up to the update rules to interpret them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    speed: i32,
}

impl DeviceState {
    /// Create a device store with speed zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current speed as last written.
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Overwrite the speed. Any value is accepted.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }
}
