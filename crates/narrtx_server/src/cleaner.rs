//! Model-backed text cleaning with a local fallback.

use narrtx_core::{CleanResult, cleaning_prompt, extract_cleaned_text, heuristic_clean};
use narrtx_error::{GenerationError, GenerationErrorKind};
use narrtx_models::{DEFAULT_TIMEOUT, TextGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Cleans text through a [`TextGenerator`], falling back to
/// [`heuristic_clean`] when generation fails.
///
/// The generator call is bounded by `timeout` regardless of what the
/// generator enforces itself. Failures never reach the caller.
#[derive(Clone)]
pub struct TextCleaner {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl std::fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCleaner")
            .field("model", &self.generator.model_name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TextCleaner {
    /// Creates a cleaner with the default 60 second deadline.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_timeout(generator, DEFAULT_TIMEOUT)
    }

    /// Creates a cleaner with a custom deadline.
    pub fn with_timeout(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Deadline applied to each generation call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn generate_bounded(&self, prompt: &str) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.timeout, self.generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::new(GenerationErrorKind::Timeout)),
        }
    }

    /// Cleans `text`.
    #[instrument(skip(self, text), fields(model = %self.generator.model_name(), text_len = text.len()))]
    pub async fn clean(&self, text: &str) -> CleanResult {
        let prompt = cleaning_prompt(text);

        match self.generate_bounded(&prompt).await {
            Ok(raw) => {
                let cleaned = extract_cleaned_text(&raw);
                debug!(
                    raw_len = raw.len(),
                    cleaned_len = cleaned.len(),
                    "Extracted cleaned text from model response"
                );
                CleanResult::from_model(cleaned)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    unreachable = e.kind().is_unreachable(),
                    "Text generation failed, using heuristic fallback"
                );
                CleanResult::from_fallback(heuristic_clean(text))
            }
        }
    }
}
