//! Structured logging initialisation.

use crate::settings::AppConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors returned while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured log level is not a valid filter directive.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    /// A global subscriber has already been installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs a formatting subscriber filtered by `config.log_level`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the level cannot be parsed,
/// or [`TelemetryError::AlreadyInstalled`] when called more than once per
/// process.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}
