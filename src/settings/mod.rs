//! Environment-based application configuration.
//!
//! Only the outer shell reads these values; the store, repositories, and
//! services take no configuration.

use serde::Deserialize;
use thiserror::Error;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default maximum request body size in bytes (1 MiB).
pub const DEFAULT_MAX_REQUEST_SIZE: u64 = 1_048_576;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Port a transport should listen on (`PORT`).
    pub port: u16,
    /// Log filter directive (`LOG_LEVEL`).
    pub log_level: String,
    /// Whether a transport should answer cross-origin requests
    /// (`ENABLE_CORS`).
    pub enable_cors: bool,
    /// Largest accepted request body in bytes (`MAX_REQUEST_SIZE`).
    pub max_request_size: u64,
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A source could not be read or a value could not be converted.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            enable_cors: true,
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a variable is set to a value that
    /// cannot be converted to the field's type.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::load(config::Environment::default())
    }

    /// Loads configuration from an explicit set of variables, ignoring the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError`] when a variable is set to a value that
    /// cannot be converted to the field's type.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigLoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load(config::Environment::default().source(Some(source)))
    }

    fn load(environment: config::Environment) -> Result<Self, ConfigLoadError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("enable_cors", defaults.enable_cors)?
            .set_default("max_request_size", defaults.max_request_size)?
            .add_source(environment.try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
