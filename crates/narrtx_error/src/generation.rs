//! Errors from the external text-generation service.

/// Failure conditions when calling the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Failed to build the HTTP client
    #[display("Failed to create generation client: {_0}")]
    ClientCreation(String),
    /// Network-level failure (connection refused, DNS, reset)
    #[display("HTTP request failed: {_0}")]
    Http(String),
    /// The request exceeded its deadline
    #[display("Request timed out")]
    Timeout,
    /// The service answered with a non-success status
    #[display("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },
    /// The response body could not be decoded
    #[display("Response parsing failed: {_0}")]
    ResponseParsing(String),
}

impl GenerationErrorKind {
    /// Whether the failure came from the service being unreachable rather than
    /// from a bad answer.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            GenerationErrorKind::Http(_) | GenerationErrorKind::Timeout
        )
    }
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use narrtx_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout);
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    kind: GenerationErrorKind,
    line: u32,
    file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

impl<T> From<T> for GenerationError
where
    T: Into<GenerationErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
