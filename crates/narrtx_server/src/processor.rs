//! Narrative processing pipeline: clean, classify, score, decide.

use crate::{ServerConfig, TextCleaner};
use narrtx_core::{MIN_READABILITY_SCORE, NarrativeRequest, NarrativeResult, ReadabilityScorer};
use narrtx_error::{NarrtxResult, ProcessingError, ProcessingErrorKind};
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs the cleaning and scoring pipeline for one narrative at a time.
///
/// Holds no mutable state; share it behind an `Arc` across requests.
#[derive(Debug, Clone)]
pub struct NarrativeProcessor {
    cleaner: TextCleaner,
}

impl NarrativeProcessor {
    /// Creates a processor around `cleaner`.
    pub fn new(cleaner: TextCleaner) -> Self {
        Self { cleaner }
    }

    /// Creates a processor backed by the Ollama server in `config`.
    pub fn from_config(config: &ServerConfig) -> NarrtxResult<Self> {
        let client = config.ollama_client()?;
        let cleaner = TextCleaner::with_timeout(Arc::new(client), config.request_timeout());
        Ok(Self::new(cleaner))
    }

    /// The cleaner used by this processor.
    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    /// Processes a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingErrorKind::EmptyText`] if the text is missing or blank.
    pub async fn process_request(
        &self,
        request: &NarrativeRequest,
    ) -> Result<NarrativeResult, ProcessingError> {
        let text = request.validated_text()?;
        self.process(text).await
    }

    /// Processes `text`.
    ///
    /// Unreadable and low-scoring text are successful computations reported
    /// through [`NarrativeResult::success`].
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingErrorKind::EmptyText`] if `text` is blank.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn process(&self, text: &str) -> Result<NarrativeResult, ProcessingError> {
        if text.trim().is_empty() {
            return Err(ProcessingError::new(ProcessingErrorKind::EmptyText));
        }

        let cleaned = self.cleaner.clean(text).await;
        let used_fallback = *cleaned.used_fallback();

        if cleaned.is_unreadable() {
            info!(used_fallback, "Narrative is unreadable");
            return Ok(NarrativeResult::unreadable(text));
        }

        let cleaned_text = cleaned.into_text();
        let score = ReadabilityScorer::score(&cleaned_text);

        if score < MIN_READABILITY_SCORE {
            info!(score, used_fallback, "Narrative scored below readability threshold");
            return Ok(NarrativeResult::low_readability(text, cleaned_text, score));
        }

        let result = NarrativeResult::processed(text, cleaned_text, score);
        info!(
            score,
            used_fallback,
            words_removed = ?result.words_removed(),
            "Narrative processed"
        );
        Ok(result)
    }
}
