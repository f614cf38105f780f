//! Ollama `/api/generate` integration.

mod client;
mod dto;

pub use client::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, OllamaClient};
pub use dto::{
    OllamaGenerateRequest, OllamaGenerateRequestBuilder, OllamaGenerateResponse, OllamaOptions,
};
