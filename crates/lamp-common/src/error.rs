//! Error types for lamp configuration loading.

use thiserror::Error;

/// Errors that can occur while locating or loading the lamp configuration.
///
/// Startup errors are returned to the entry point rather than terminating
/// the process here, so callers stay testable and decide on exit behavior.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `LAMP_HOME` environment variable is not set.
    #[error("LAMP_HOME environment variable is not set")]
    HomeNotSet,

    /// The configuration file could not be read or parsed.
    #[error("can not read the lamp configuration file: {0}")]
    Ini(#[from] ini::Error),

    /// A configuration value does not parse as the expected type.
    #[error("invalid value for {section}.{key}: '{value}'")]
    InvalidValue {
        /// Section of the offending key.
        section: &'static str,
        /// Key whose value was rejected.
        key: &'static str,
        /// The raw value as it appears in the file.
        value: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
