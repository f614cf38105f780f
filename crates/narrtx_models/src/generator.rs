//! The text-generation seam.

use async_trait::async_trait;
use derive_getters::Getters;
use narrtx_error::GenerationError;
use std::time::Duration;

/// Sampling temperature for cleaning requests.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Output token cap for cleaning requests.
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Deadline for a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sampling and deadline parameters for a generation call.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationOptions {
    /// Sampling temperature
    #[builder(default = "DEFAULT_TEMPERATURE")]
    temperature: f32,
    /// Maximum tokens to generate
    #[builder(default = "DEFAULT_MAX_TOKENS")]
    max_tokens: u32,
    /// Request deadline, after which the call fails with a timeout
    #[builder(default = "DEFAULT_TIMEOUT")]
    timeout: Duration,
}

impl GenerationOptions {
    /// Creates a new builder.
    pub fn builder() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder::default()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Something that turns a prompt into model text.
///
/// Implementations own their transport and deadline. Any failure (network,
/// timeout, bad status, undecodable body) is reported as a
/// [`GenerationError`]; callers decide whether to recover.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the model answering prompts.
    fn model_name(&self) -> &str;

    /// Sends `prompt` and returns the raw response text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
