//! Crate-wide error aggregate.

use crate::{ConfigError, GenerationError, HttpError, ProcessingError};

/// Top-level error conditions.
#[derive(Debug, derive_more::From)]
pub enum NarrtxErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Text-generation service error
    Generation(GenerationError),
    /// Pipeline error
    Processing(ProcessingError),
    /// HTTP server or health-check error
    Http(HttpError),
    /// Reading local input failed
    Io(std::io::Error),
}

impl std::fmt::Display for NarrtxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NarrtxErrorKind::Config(e) => write!(f, "{}", e),
            NarrtxErrorKind::Generation(e) => write!(f, "{}", e),
            NarrtxErrorKind::Processing(e) => write!(f, "{}", e),
            NarrtxErrorKind::Http(e) => write!(f, "{}", e),
            NarrtxErrorKind::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

/// Narrtx error wrapping a boxed [`NarrtxErrorKind`].
#[derive(Debug)]
pub struct NarrtxError(Box<NarrtxErrorKind>);

impl NarrtxError {
    /// Create a new error from a kind.
    pub fn new(kind: NarrtxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NarrtxErrorKind {
        &self.0
    }
}

impl std::fmt::Display for NarrtxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Narrtx Error: {}", self.0)
    }
}

impl std::error::Error for NarrtxError {}

// Anything convertible to a kind converts to the boxed error
impl<T> From<T> for NarrtxError
where
    T: Into<NarrtxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result alias used across the workspace.
pub type NarrtxResult<T> = std::result::Result<T, NarrtxError>;
