//! The tick-driven motor controller.

use crate::config::MotorConfig;
use crate::core::{DeviceState, MotorState, State, TransitionHistory, TransitionRecord};
use crate::report::{Reporter, TracingReporter};
use chrono::Utc;
use tracing::{debug, trace};

/// What a single [`MotorController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Update requested no change
    Stayed(MotorState),

    /// Exit ran on `from`, then Enter ran on `to`
    Transitioned { from: MotorState, to: MotorState },
}

impl TickOutcome {
    /// Active state after the tick.
    pub fn state(&self) -> MotorState {
        match self {
            Self::Stayed(state) => *state,
            Self::Transitioned { to, .. } => *to,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Owns the device store and the single active [`MotorState`].
///
/// `tick` takes `&mut self`, so the update → exit → swap → enter sequence
/// can never interleave with another tick or with a speed write. Hosts that
/// share a controller across threads should use
/// [`SharedController`](super::SharedController).
///
/// # Example
///
/// ```rust
/// use motorstate::controller::{MotorController, TickOutcome};
/// use motorstate::core::MotorState;
///
/// let mut motor = MotorController::new(MotorState::Idle);
/// motor.set_speed(20);
///
/// assert_eq!(
///     motor.tick(),
///     TickOutcome::Transitioned { from: MotorState::Idle, to: MotorState::Running }
/// );
/// assert_eq!(motor.speed(), 50);
/// ```
#[derive(Debug)]
pub struct MotorController<R: Reporter = TracingReporter> {
    active: MotorState,
    device: DeviceState,
    config: MotorConfig,
    reporter: R,
    history: TransitionHistory<MotorState>,
    ticks: u64,
}

impl MotorController<TracingReporter> {
    /// Create a controller with the default configuration, logging through
    /// `tracing`, and run `initial`'s enter hook.
    pub fn new(initial: MotorState) -> Self {
        Self::start(initial, MotorConfig::default(), TracingReporter)
    }
}

impl<R: Reporter> MotorController<R> {
    /// Enter `initial` against a fresh device store.
    ///
    /// `config` must already be validated.
    pub(crate) fn start(initial: MotorState, config: MotorConfig, reporter: R) -> Self {
        let mut controller = Self {
            active: initial,
            device: DeviceState::new(),
            history: TransitionHistory::with_capacity(config.history_capacity),
            config,
            reporter,
            ticks: 0,
        };

        debug!(state = initial.name(), "motor controller starting");
        let entered = initial.enter(&mut controller.device, &controller.config);
        controller.reporter.report(&entered);
        controller
    }

    /// Run one update cycle.
    ///
    /// Evaluates the active state's update rule. When it requests a new
    /// state, runs Exit on the old state, swaps, then runs Enter on the new
    /// one, with no update call in between.
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        let from = self.active;
        let observed = self.device.speed();

        let Some(to) = from.update(&self.device, &self.config) else {
            trace!(tick = self.ticks, state = from.name(), speed = observed, "no transition");
            return TickOutcome::Stayed(from);
        };

        debug!(
            tick = self.ticks,
            from = from.name(),
            to = to.name(),
            speed = observed,
            "transition requested"
        );

        let exited = from.exit(&mut self.device);
        self.reporter.report(&exited);

        self.active = to;

        let entered = to.enter(&mut self.device, &self.config);
        self.reporter.report(&entered);

        self.history.record(TransitionRecord {
            from,
            to,
            tick: self.ticks,
            speed: observed,
            timestamp: Utc::now(),
        });

        TickOutcome::Transitioned { from, to }
    }

    /// Currently active state.
    pub fn state(&self) -> MotorState {
        self.active
    }

    pub fn speed(&self) -> i32 {
        self.device.speed()
    }

    /// Overwrite the tracked speed, e.g. with a sensor reading.
    ///
    /// Takes effect on the next tick.
    pub fn set_speed(&mut self, speed: i32) {
        self.device.set_speed(speed);
    }

    pub fn device(&self) -> &DeviceState {
        &self.device
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn history(&self) -> &TransitionHistory<MotorState> {
        &self.history
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Check if the overspeed latch is set.
    pub fn is_faulted(&self) -> bool {
        self.active.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::MotorEvent;
    use crate::report::RecordingReporter;

    fn recording(initial: MotorState) -> MotorController<RecordingReporter> {
        MotorController::start(initial, MotorConfig::default(), RecordingReporter::new())
    }

    #[test]
    fn construction_runs_enter_hook() {
        let motor = recording(MotorState::Idle);

        assert_eq!(motor.state(), MotorState::Idle);
        assert_eq!(motor.speed(), 0);
        assert_eq!(motor.reporter().events(), &[MotorEvent::Idle]);
        assert_eq!(motor.ticks(), 0);
    }

    #[test]
    fn construction_in_running_sets_run_speed() {
        let motor = recording(MotorState::Running);

        assert_eq!(motor.speed(), 50);
        assert_eq!(
            motor.reporter().events(),
            &[MotorEvent::MotorStarted { speed: 50 }]
        );
    }

    #[test]
    fn stay_tick_has_no_side_effects() {
        let mut motor = recording(MotorState::Idle);
        motor.reporter_mut().take();

        let outcome = motor.tick();

        assert_eq!(outcome, TickOutcome::Stayed(MotorState::Idle));
        assert!(!outcome.is_transition());
        assert!(motor.reporter().events().is_empty());
        assert!(motor.history().is_empty());
        assert_eq!(motor.ticks(), 1);
    }

    #[test]
    fn transition_runs_exit_then_enter() {
        let mut motor = recording(MotorState::Idle);
        motor.reporter_mut().take();
        motor.set_speed(10);

        let outcome = motor.tick();

        assert_eq!(
            outcome,
            TickOutcome::Transitioned {
                from: MotorState::Idle,
                to: MotorState::Running,
            }
        );
        assert_eq!(outcome.state(), MotorState::Running);
        assert_eq!(
            motor.reporter().events(),
            &[
                MotorEvent::LeavingIdle,
                MotorEvent::MotorStarted { speed: 50 }
            ]
        );
        assert_eq!(motor.speed(), 50);
    }

    #[test]
    fn transition_is_recorded_with_observed_speed() {
        let mut motor = recording(MotorState::Running);
        motor.tick();
        motor.set_speed(130);
        motor.tick();

        let last = motor.history().last().unwrap();
        assert_eq!(last.from, MotorState::Running);
        assert_eq!(last.to, MotorState::Error);
        assert_eq!(last.tick, 2);
        assert_eq!(last.speed, 130);
        assert!(motor.is_faulted());
    }

    #[test]
    fn history_capacity_comes_from_config() {
        let config = MotorConfig {
            history_capacity: 3,
            ..MotorConfig::default()
        };
        let motor = MotorController::start(MotorState::Idle, config, RecordingReporter::new());

        assert_eq!(motor.history().capacity(), 3);
        assert_eq!(motor.config().history_capacity, 3);
    }

    #[test]
    fn default_controller_uses_tracing_reporter() {
        let mut motor = MotorController::new(MotorState::Idle);
        motor.set_speed(5);

        assert!(motor.tick().is_transition());
        assert_eq!(motor.device().speed(), 50);
    }
}
