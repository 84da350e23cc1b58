//! Core motor state types.
//!
//! This module contains the data the controller works on:
//! - Operating modes via [`MotorState`] and the `State` trait
//! - The mutable [`DeviceState`] store
//! - Bounded transition history
//!
//! Nothing in here performs I/O.

mod device;
mod history;
mod state;

pub use device::DeviceState;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{MotorState, State};
