//! Serve command handler.

use super::ConfigArgs;
use narrtx_error::NarrtxResult;
use narrtx_server::{NarrativeProcessor, serve};

/// Handle the `serve` command
pub async fn handle_serve_command(args: ConfigArgs) -> NarrtxResult<()> {
    let config = args.resolve()?;
    tracing::info!(address = %config.bind_address(), "Starting narrtx server");

    let processor = NarrativeProcessor::from_config(&config)?;
    serve(&config, processor).await
}
