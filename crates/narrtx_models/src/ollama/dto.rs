//! Data transfer objects for Ollama's generate endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sampling options nested in a generate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OllamaOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Non-streaming generate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OllamaGenerateRequest {
    /// Model identifier
    model: String,
    /// Full prompt text
    prompt: String,
    /// Always false; the cleaner needs the whole answer at once
    #[builder(default)]
    stream: bool,
    /// Sampling options
    options: OllamaOptions,
}

impl OllamaGenerateRequest {
    /// Creates a new builder.
    pub fn builder() -> OllamaGenerateRequestBuilder {
        OllamaGenerateRequestBuilder::default()
    }
}

/// Generate response. Only `response` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OllamaGenerateResponse {
    /// Generated text
    response: String,
    /// Model that answered
    #[serde(default)]
    model: Option<String>,
    /// Whether generation finished
    #[serde(default)]
    done: Option<bool>,
}
