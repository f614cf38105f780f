//! Error types for the narrtx text-cleaning service.
//!
//! Every error carries the source location where it was constructed, captured
//! with `#[track_caller]`. Area-specific errors aggregate into [`NarrtxError`].

mod config;
mod error;
mod generation;
mod http;
mod processing;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{NarrtxError, NarrtxErrorKind, NarrtxResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::{HttpError, HttpErrorKind};
pub use processing::{ProcessingError, ProcessingErrorKind};
