//! The tick-driven controller and its construction API.
//!
//! - [`MotorController`] owns the device store and the active mode
//! - [`MotorControllerBuilder`] validates configuration up front
//! - [`SharedController`] serializes access for multi-threaded hosts

mod builder;
mod error;
mod machine;
mod shared;

pub use builder::MotorControllerBuilder;
pub use error::BuildError;
pub use machine::{MotorController, TickOutcome};
pub use shared::SharedController;
