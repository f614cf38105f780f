//! Text-generation service integrations for narrtx.
//!
//! [`TextGenerator`] is the seam between the cleaning pipeline and whatever
//! produces model output. [`OllamaClient`] implements it against Ollama's
//! `/api/generate` endpoint.

mod generator;
mod ollama;

pub use generator::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, GenerationOptions,
    GenerationOptionsBuilder, TextGenerator,
};
pub use ollama::{
    DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, OllamaClient, OllamaGenerateRequest,
    OllamaGenerateRequestBuilder, OllamaGenerateResponse, OllamaOptions,
};
