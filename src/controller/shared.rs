//! Thread-safe handle around a controller.

use crate::controller::machine::{MotorController, TickOutcome};
use crate::core::MotorState;
use crate::report::{Reporter, TracingReporter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that serializes every tick and speed write behind one lock.
///
/// # Example
///
/// ```rust
/// use motorstate::controller::{MotorController, SharedController};
/// use motorstate::core::MotorState;
///
/// let shared = SharedController::new(MotorController::new(MotorState::Idle));
/// let sensor = shared.clone();
///
/// std::thread::spawn(move || sensor.set_speed(15)).join().unwrap();
/// shared.tick();
///
/// assert_eq!(shared.state(), MotorState::Running);
/// ```
pub struct SharedController<R: Reporter = TracingReporter> {
    inner: Arc<Mutex<MotorController<R>>>,
}

impl<R: Reporter> SharedController<R> {
    pub fn new(controller: MotorController<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn tick(&self) -> TickOutcome {
        self.lock().tick()
    }

    pub fn set_speed(&self, speed: i32) {
        self.lock().set_speed(speed);
    }

    pub fn speed(&self) -> i32 {
        self.lock().speed()
    }

    pub fn state(&self) -> MotorState {
        self.lock().state()
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with<T>(&self, f: impl FnOnce(&mut MotorController<R>) -> T) -> T {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    // Poisoning is ignored: the controller is consistent between ticks.
    fn lock(&self) -> MutexGuard<'_, MotorController<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Reporter> Clone for SharedController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotorConfig;
    use crate::report::RecordingReporter;
    use std::thread;

    fn shared_recording() -> SharedController<RecordingReporter> {
        SharedController::new(MotorController::start(
            MotorState::Idle,
            MotorConfig::default(),
            RecordingReporter::new(),
        ))
    }

    #[test]
    fn ticks_from_many_threads_never_interleave() {
        let shared = shared_recording();
        shared.set_speed(1);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let handle = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        handle.tick();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        shared.with(|motor| {
            assert_eq!(motor.ticks(), 200);
            assert_eq!(motor.state(), MotorState::Running);
            // Idle enter, then exactly one Exit/Enter pair.
            assert_eq!(motor.reporter().events().len(), 3);
            assert_eq!(motor.history().len(), 1);
        });
    }

    #[test]
    fn speed_writes_are_visible_to_next_tick() {
        let shared = shared_recording();
        shared.tick();
        assert_eq!(shared.state(), MotorState::Idle);

        let writer = shared.clone();
        thread::spawn(move || writer.set_speed(30)).join().unwrap();

        assert_eq!(shared.speed(), 30);
        assert!(shared.tick().is_transition());
        assert_eq!(shared.speed(), 50);
    }
}
