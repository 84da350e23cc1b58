//! Controller construction errors.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
