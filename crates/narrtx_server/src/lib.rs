//! HTTP API and processing pipeline for narrtx.
//!
//! [`TextCleaner`] asks a [`narrtx_models::TextGenerator`] to clean text and
//! falls back to a local filter on failure. [`NarrativeProcessor`] scores the
//! result and decides pass or fail. [`create_router`] exposes the pipeline
//! over HTTP.

mod api;
mod cleaner;
mod config;
mod error;
mod processor;
mod server;

pub use api::{ApiState, HealthStatus, MAX_BODY_BYTES, create_router};
pub use cleaner::TextCleaner;
pub use config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig, ServerConfigBuilder};
pub use error::{ApiError, ErrorBody};
pub use processor::NarrativeProcessor;
pub use server::serve;
