//! Configuration for the HTTP server and its Ollama connection

use derive_getters::Getters;
use narrtx_error::{ConfigError, ConfigErrorKind, NarrtxResult};
use narrtx_models::{
    DEFAULT_MAX_TOKENS, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT, GenerationOptions, OllamaClient,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Host the API binds to by default.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the API binds to by default.
pub const DEFAULT_PORT: u16 = 3000;

/// Server and generation settings.
///
/// Every field has a default, so an empty TOML file or an empty environment
/// yields a working local setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    host: String,
    /// Port to bind
    port: u16,
    /// Base URL of the Ollama server (e.g., "http://localhost:11434")
    ollama_base_url: String,
    /// Model used for cleaning
    model: String,
    /// Deadline for each cleaning call, in seconds
    request_timeout_secs: u64,
    /// Sampling temperature
    temperature: f32,
    /// Output token cap
    max_tokens: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| {
                ConfigError::new(ConfigErrorKind::InvalidEnvVar {
                    name: name.to_string(),
                    value: raw.clone(),
                })
            }),
        None => Ok(default),
    }
}

impl ServerConfig {
    /// Creates a new builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `NARRTX_HOST` (default: "127.0.0.1")
    /// - `NARRTX_PORT` (default: 3000)
    /// - `OLLAMA_BASE_URL` (default: "http://localhost:11434")
    /// - `OLLAMA_MODEL` (default: "llama2")
    /// - `OLLAMA_TIMEOUT_SECS` (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("NARRTX_HOST").unwrap_or(defaults.host),
            port: parse_var("NARRTX_PORT", lookup("NARRTX_PORT"), defaults.port)?,
            ollama_base_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
            model: lookup("OLLAMA_MODEL").unwrap_or(defaults.model),
            request_timeout_secs: parse_var(
                "OLLAMA_TIMEOUT_SECS",
                lookup("OLLAMA_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            )?,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        })
    }

    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(config_path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> NarrtxResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(ConfigErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Deadline for each cleaning call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Generation options derived from this config.
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions::builder()
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .timeout(self.request_timeout())
            .build()
            .unwrap_or_default()
    }

    /// Ollama client for this config.
    pub fn ollama_client(&self) -> NarrtxResult<OllamaClient> {
        Ok(OllamaClient::new(
            &self.ollama_base_url,
            &self.model,
            self.generation_options(),
        )?)
    }

    /// Replaces the host.
    pub fn with_host(self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self
        }
    }

    /// Replaces the port.
    pub fn with_port(self, port: u16) -> Self {
        Self { port, ..self }
    }

    /// Replaces the model.
    pub fn with_model(self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self
        }
    }

    /// Replaces the Ollama base URL.
    pub fn with_ollama_base_url(self, url: impl Into<String>) -> Self {
        Self {
            ollama_base_url: url.into(),
            ..self
        }
    }
}
