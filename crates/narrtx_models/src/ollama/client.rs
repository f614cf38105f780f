//! HTTP client for a local Ollama server.

use crate::{
    GenerationOptions, OllamaGenerateRequest, OllamaGenerateResponse, OllamaOptions,
    TextGenerator,
};
use async_trait::async_trait;
use narrtx_error::{GenerationError, GenerationErrorKind};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Where Ollama listens by default.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Model used when none is configured.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama2";

fn request_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::new(GenerationErrorKind::Timeout)
    } else {
        GenerationError::new(GenerationErrorKind::Http(e.to_string()))
    }
}

/// Client for Ollama's non-streaming generate endpoint.
///
/// The configured timeout applies to the whole request, body included.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    options: GenerationOptions,
}

impl OllamaClient {
    /// Creates a client for `model` at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::ClientCreation`] if the HTTP client
    /// cannot be built.
    #[instrument(fields(base_url = %base_url.as_ref(), model = %model.as_ref()), skip_all)]
    pub fn new(
        base_url: impl AsRef<str>,
        model: impl AsRef<str>,
        options: GenerationOptions,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(*options.timeout())
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        debug!(
            base_url = %base_url,
            timeout_secs = options.timeout().as_secs(),
            "Created Ollama client"
        );

        Ok(Self {
            client,
            base_url,
            model: model.as_ref().to_string(),
            options,
        })
    }

    /// Creates a client with the default URL, model, and options.
    pub fn with_defaults() -> Result<Self, GenerationError> {
        Self::new(
            DEFAULT_OLLAMA_BASE_URL,
            DEFAULT_OLLAMA_MODEL,
            GenerationOptions::default(),
        )
    }

    /// Full URL of the generate endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Base URL of the server.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Options sent with each request.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Builds the request body for `prompt`.
    pub fn build_request(&self, prompt: &str) -> Result<OllamaGenerateRequest, GenerationError> {
        OllamaGenerateRequest::builder()
            .model(self.model.clone())
            .prompt(prompt)
            .stream(false)
            .options(OllamaOptions {
                temperature: *self.options.temperature(),
                max_tokens: *self.options.max_tokens(),
            })
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = self.build_request(prompt)?;
        let url = self.generate_url();

        debug!(url = %url, "Sending generate request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Ollama request failed");
                request_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Ollama API error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: OllamaGenerateResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Ollama response");
            if e.is_timeout() {
                GenerationError::new(GenerationErrorKind::Timeout)
            } else {
                GenerationError::new(GenerationErrorKind::ResponseParsing(e.to_string()))
            }
        })?;

        debug!(response_len = parsed.response().len(), "Received Ollama response");
        Ok(parsed.response().clone())
    }
}
