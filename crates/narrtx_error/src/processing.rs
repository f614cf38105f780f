//! Errors surfaced by the narrative processing pipeline.

/// Failure conditions visible to callers of the pipeline.
///
/// Unreadable or low-scoring text is not an error; it is reported through
/// the result's `success` flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProcessingErrorKind {
    /// Request text was missing, empty, or whitespace only
    #[display("Text is required")]
    EmptyText,
    /// Anything else that went wrong while processing
    #[display("Failed to process narrative: {_0}")]
    Unexpected(String),
}

/// Processing error with location tracking.
///
/// # Examples
///
/// ```
/// use narrtx_error::{ProcessingError, ProcessingErrorKind};
///
/// let err = ProcessingError::new(ProcessingErrorKind::EmptyText);
/// assert!(format!("{}", err).contains("Text is required"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Processing Error: {} at line {} in {}", kind, line, file)]
pub struct ProcessingError {
    kind: ProcessingErrorKind,
    line: u32,
    file: &'static str,
}

impl ProcessingError {
    /// Create a new processing error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProcessingErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProcessingErrorKind {
        &self.kind
    }
}

impl<T> From<T> for ProcessingError
where
    T: Into<ProcessingErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
