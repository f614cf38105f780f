//! Configuration loading errors.

/// Ways loading the server configuration can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// An environment variable held a value that does not parse
    #[display("{name} has invalid value '{value}'")]
    InvalidEnvVar {
        /// Variable name
        name: String,
        /// Raw value as found
        value: String,
    },
    /// The config file could not be read
    #[display("Failed to read config file {path}: {message}")]
    FileRead {
        /// Path that was read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// The config file is not valid TOML for the config shape
    #[display("Failed to parse config: {_0}")]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use narrtx_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::InvalidEnvVar {
///     name: "NARRTX_PORT".to_string(),
///     value: "eighty".to_string(),
/// });
/// assert!(format!("{}", err).contains("NARRTX_PORT has invalid value 'eighty'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ConfigError
where
    T: Into<ConfigErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
