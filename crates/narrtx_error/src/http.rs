//! Errors from serving the API or talking to a running narrtx server.

/// HTTP failure conditions outside the generation client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// The listener could not bind its address
    #[display("Failed to bind {address}: {message}")]
    Bind {
        /// Address passed to the listener
        address: String,
        /// Underlying I/O message
        message: String,
    },
    /// The server loop stopped with an error
    #[display("Server error: {_0}")]
    Serve(String),
    /// A request to a narrtx server did not complete
    #[display("Request failed: {_0}")]
    Request(String),
    /// A narrtx server answered with a non-success status
    #[display("Server returned status {_0}")]
    Status(u16),
    /// A narrtx server answered with a body of the wrong shape
    #[display("Unexpected response: {_0}")]
    InvalidResponse(String),
}

/// HTTP error with location tracking.
///
/// # Examples
///
/// ```
/// use narrtx_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::Status(503));
/// assert!(format!("{}", err).contains("status 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    kind: HttpErrorKind,
    line: u32,
    file: &'static str,
}

impl HttpError {
    /// Create a new HTTP error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HttpErrorKind {
        &self.kind
    }
}

impl<T> From<T> for HttpError
where
    T: Into<HttpErrorKind>,
{
    #[track_caller]
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}
