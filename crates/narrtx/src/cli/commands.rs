//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use narrtx_error::NarrtxResult;
use narrtx_server::ServerConfig;
use std::path::PathBuf;

/// narrtx command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "narrtx")]
#[command(about = "Clean narrative text with a local LLM and gate it on readability")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API
    Serve(ConfigArgs),

    /// Process a single narrative and print the result as JSON
    Process {
        /// Text to process; read from stdin when omitted
        text: Option<String>,

        /// Configuration overrides
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Query a running server's health endpoint
    Health {
        /// Base URL of the server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,
    },
}

/// Configuration source and overrides shared by commands that build a pipeline.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a TOML configuration file (environment variables are used otherwise)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Ollama model name
    #[arg(long)]
    pub model: Option<String>,

    /// Ollama base URL
    #[arg(long = "ollama-url")]
    pub ollama_url: Option<String>,
}

impl ConfigArgs {
    /// Loads the base config and applies command-line overrides.
    pub fn resolve(&self) -> NarrtxResult<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::from_env()?,
        };

        if let Some(host) = &self.host {
            config = config.with_host(host.clone());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(url) = &self.ollama_url {
            config = config.with_ollama_base_url(url.clone());
        }

        Ok(config)
    }
}
