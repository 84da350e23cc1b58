//! Motorstate: a finite-state controller for a motor subsystem
//!
//! The controller tracks which mode the motor is in, moves between modes
//! based on observed speed, and runs start/stop actions on the boundaries.
//! A driver loop owns timing: it writes sensor speed and calls
//! [`MotorController::tick`] once per cycle.
//!
//! # Core Concepts
//!
//! - **Modes**: [`MotorState`] is a closed enum (`Idle`, `Running`, `Error`)
//! - **Hooks**: each mode has enter, exit and update operations
//! - **Tick**: update, and on a requested change exit → swap → enter
//! - **Reporting**: every hook emits one [`MotorEvent`] to a [`Reporter`]
//!
//! Overspeed is not an error value: it is a transition into `Error`, which
//! no update rule ever leaves.
//!
//! # Example
//!
//! ```rust
//! use motorstate::{MotorController, MotorState};
//!
//! let mut motor = MotorController::new(MotorState::Idle);
//! motor.tick();
//! assert_eq!(motor.state(), MotorState::Idle);
//!
//! motor.set_speed(20);
//! motor.tick();
//! assert_eq!(motor.state(), MotorState::Running);
//! assert_eq!(motor.speed(), 50);
//!
//! motor.set_speed(150);
//! motor.tick();
//! assert_eq!(motor.state(), MotorState::Error);
//! assert_eq!(motor.speed(), 0);
//! ```

pub mod behavior;
pub mod config;
pub mod controller;
pub mod core;
pub mod report;

// Re-export commonly used types
pub use behavior::MotorEvent;
pub use config::MotorConfig;
pub use controller::{BuildError, MotorController, MotorControllerBuilder, TickOutcome};
pub use crate::core::{DeviceState, MotorState, State};
pub use report::{RecordingReporter, Reporter, TracingReporter};
