//! Destinations for status lines.
//!
//! Hooks never print directly. The controller hands every [`MotorEvent`]
//! to a [`Reporter`], so hosts choose where status goes and tests can
//! inspect exactly what was emitted.

use crate::behavior::{Hook, MotorEvent};
use crate::core::State;
use tracing::{info, warn};

/// Receives one call per Enter or Exit hook, in execution order.
///
/// Implementations must not block: they run inside `tick`.
pub trait Reporter {
    fn report(&mut self, event: &MotorEvent);
}

/// Emits every event through `tracing`.
///
/// Fault entry is logged at `WARN`, everything else at `INFO`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: &MotorEvent) {
        let state = event.state().name();
        let hook = match event.hook() {
            Hook::Enter => "enter",
            Hook::Exit => "exit",
        };

        match event {
            MotorEvent::ErrorOccurred { speed } => warn!(state, hook, speed = *speed, "{event}"),
            _ => info!(state, hook, "{event}"),
        }
    }
}

/// Keeps every event in memory.
///
/// # Example
///
/// ```rust
/// use motorstate::behavior::MotorEvent;
/// use motorstate::report::{RecordingReporter, Reporter};
///
/// let mut reporter = RecordingReporter::new();
/// reporter.report(&MotorEvent::Idle);
///
/// assert_eq!(reporter.lines(), vec!["Motor Idle State: Motor is idle."]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingReporter {
    events: Vec<MotorEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[MotorEvent] {
        &self.events
    }

    /// Rendered status lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Drain recorded events, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<MotorEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &MotorEvent) {
        self.events.push(*event);
    }
}
