//! Ramping Motor Driver
//!
//! This example drives a controller the way firmware would: poll once per
//! 100ms cycle, then simulate the sensor by adding 10 to the speed.
//!
//! Key concepts:
//! - The driver owns pacing; the controller only reacts to `tick`
//! - Status lines go through `tracing`
//! - Overspeed latches the controller in `Error`
//!
//! Run with: cargo run --example motor_demo
//! Set RUST_LOG=debug to see each transition request.

use motorstate::{MotorController, MotorState, State};
use std::time::Duration;
use tokio::time::interval;
use tracing_subscriber::EnvFilter;

const CYCLES: usize = 12;
const SENSOR_STEP: i32 = 10;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Ramping Motor Driver ===\n");

    let mut motor = MotorController::new(MotorState::Idle);
    let mut cycle = interval(Duration::from_millis(100));

    for n in 1..=CYCLES {
        cycle.tick().await;

        let outcome = motor.tick();
        println!(
            "cycle {n:>2}: state={:<8} speed={:>4}{}",
            motor.state().name(),
            motor.speed(),
            if outcome.is_transition() { "  <- transition" } else { "" }
        );

        // Simulated sensor drift.
        motor.set_speed(motor.speed() + SENSOR_STEP);
    }

    println!("\nTransition path: {:?}", motor.history().path());
    if motor.is_faulted() {
        println!("Motor latched in Error; an external reset is required.");
    }

    println!("\n=== Example Complete ===");
}
