//! Builder for constructing motor controllers.

use crate::config::MotorConfig;
use crate::controller::error::BuildError;
use crate::controller::machine::MotorController;
use crate::core::MotorState;
use crate::report::{Reporter, TracingReporter};

/// Builder for constructing controllers with a fluent API.
///
/// # Example
///
/// ```rust
/// use motorstate::config::MotorConfig;
/// use motorstate::controller::MotorControllerBuilder;
/// use motorstate::core::MotorState;
/// use motorstate::report::RecordingReporter;
///
/// let motor = MotorControllerBuilder::new()
///     .initial(MotorState::Idle)
///     .config(MotorConfig { overspeed_limit: 80, ..MotorConfig::default() })
///     .reporter(RecordingReporter::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(motor.reporter().events().len(), 1);
/// ```
pub struct MotorControllerBuilder<R: Reporter = TracingReporter> {
    initial: Option<MotorState>,
    config: MotorConfig,
    reporter: R,
}

impl MotorControllerBuilder<TracingReporter> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: MotorConfig::default(),
            reporter: TracingReporter,
        }
    }
}

impl<R: Reporter> MotorControllerBuilder<R> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: MotorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Replace the default configuration.
    pub fn config(mut self, config: MotorConfig) -> Self {
        self.config = config;
        self
    }

    /// Send status lines somewhere other than `tracing`.
    pub fn reporter<R2: Reporter>(self, reporter: R2) -> MotorControllerBuilder<R2> {
        MotorControllerBuilder {
            initial: self.initial,
            config: self.config,
            reporter,
        }
    }

    /// Build the controller and run the initial state's enter hook.
    /// Returns an error if the initial state is missing or the config is invalid.
    pub fn build(self) -> Result<MotorController<R>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        self.config.validate()?;

        Ok(MotorController::start(initial, self.config, self.reporter))
    }
}

impl Default for MotorControllerBuilder<TracingReporter> {
    fn default() -> Self {
        Self::new()
    }
}
