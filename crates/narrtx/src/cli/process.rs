//! One-shot processing command handler.

use super::ConfigArgs;
use narrtx_core::NarrativeRequest;
use narrtx_error::{NarrtxResult, ProcessingError, ProcessingErrorKind};
use narrtx_server::NarrativeProcessor;
use std::io::Read;

/// Handle the `process` command
///
/// Runs the same pipeline as the HTTP endpoint against the configured Ollama
/// server and prints the result.
#[tracing::instrument(skip_all)]
pub async fn handle_process_command(text: Option<String>, args: ConfigArgs) -> NarrtxResult<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let config = args.resolve()?;
    let processor = NarrativeProcessor::from_config(&config)?;
    let result = processor
        .process_request(&NarrativeRequest::new(text))
        .await?;

    let rendered = serde_json::to_string_pretty(&result)
        .map_err(|e| ProcessingError::new(ProcessingErrorKind::Unexpected(e.to_string())))?;
    println!("{}", rendered);
    Ok(())
}
