//! narrtx - LLM-assisted narrative cleanup and readability gate.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_health_command, handle_process_command, handle_serve_command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => handle_serve_command(args).await?,
        Commands::Process { text, config } => handle_process_command(text, config).await?,
        Commands::Health { url } => handle_health_command(&url).await?,
    }

    Ok(())
}
