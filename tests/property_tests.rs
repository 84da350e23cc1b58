//! Property-based tests for the motor state machine.
//!
//! These tests use proptest to verify the transition rules and the
//! one-active-state invariant across many generated speeds and scripts.

use motorstate::behavior::Hook;
use motorstate::{
    DeviceState, MotorConfig, MotorController, MotorControllerBuilder, MotorState,
    RecordingReporter, TickOutcome,
};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> MotorState {
        match variant {
            0 => MotorState::Idle,
            1 => MotorState::Running,
            _ => MotorState::Error,
        }
    }
}

fn device_at(speed: i32) -> DeviceState {
    let mut device = DeviceState::new();
    device.set_speed(speed);
    device
}

fn recording(initial: MotorState) -> MotorController<RecordingReporter> {
    MotorControllerBuilder::new()
        .initial(initial)
        .reporter(RecordingReporter::new())
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn idle_stays_at_zero_or_below(speed in i32::MIN..=0) {
        prop_assert_eq!(MotorState::Idle.update(&device_at(speed), &MotorConfig::default()), None);
    }

    #[test]
    fn idle_starts_on_any_positive_speed(speed in 1..=i32::MAX) {
        prop_assert_eq!(
            MotorState::Idle.update(&device_at(speed), &MotorConfig::default()),
            Some(MotorState::Running)
        );
    }

    #[test]
    fn running_stays_within_limit(speed in 0..=100i32) {
        prop_assert_eq!(MotorState::Running.update(&device_at(speed), &MotorConfig::default()), None);
    }

    #[test]
    fn running_faults_above_limit(speed in 101..=i32::MAX) {
        prop_assert_eq!(
            MotorState::Running.update(&device_at(speed), &MotorConfig::default()),
            Some(MotorState::Error)
        );
    }

    #[test]
    fn error_never_leaves(speed in any::<i32>()) {
        prop_assert_eq!(MotorState::Error.update(&device_at(speed), &MotorConfig::default()), None);
    }

    #[test]
    fn update_is_deterministic(state in arbitrary_state(), speed in any::<i32>()) {
        let config = MotorConfig::default();
        let device = device_at(speed);
        prop_assert_eq!(state.update(&device, &config), state.update(&device, &config));
    }

    #[test]
    fn every_tick_leaves_exactly_one_consistent_state(
        initial in arbitrary_state(),
        script in prop::collection::vec(prop::option::of(-50..300i32), 1..40)
    ) {
        let mut motor = recording(initial);

        for write in script {
            if let Some(speed) = write {
                motor.set_speed(speed);
            }

            let before = motor.state();
            let events_before = motor.reporter().events().len();
            let outcome = motor.tick();
            let emitted = &motor.reporter().events()[events_before..];

            prop_assert_eq!(outcome.state(), motor.state());
            match outcome {
                TickOutcome::Stayed(state) => {
                    prop_assert_eq!(state, before);
                    prop_assert!(emitted.is_empty());
                }
                TickOutcome::Transitioned { from, to } => {
                    prop_assert_eq!(from, before);
                    prop_assert_eq!(emitted.len(), 2);
                    prop_assert_eq!(emitted[0].hook(), Hook::Exit);
                    prop_assert_eq!(emitted[0].state(), from);
                    prop_assert_eq!(emitted[1].hook(), Hook::Enter);
                    prop_assert_eq!(emitted[1].state(), to);
                }
            }
        }
    }

    #[test]
    fn error_latch_holds_for_any_script(
        script in prop::collection::vec(any::<i32>(), 1..30)
    ) {
        let mut motor = recording(MotorState::Error);

        for speed in script {
            motor.set_speed(speed);
            prop_assert_eq!(motor.tick(), TickOutcome::Stayed(MotorState::Error));
        }
        prop_assert_eq!(motor.reporter().events().len(), 1);
        prop_assert!(motor.history().is_empty());
    }

    #[test]
    fn configured_limit_is_the_fault_boundary(limit in 50..1000i32, delta in 1..100i32) {
        let config = MotorConfig { overspeed_limit: limit, ..MotorConfig::default() };
        prop_assert_eq!(MotorState::Running.update(&device_at(limit), &config), None);
        prop_assert_eq!(
            MotorState::Running.update(&device_at(limit + delta), &config),
            Some(MotorState::Error)
        );
    }
}
