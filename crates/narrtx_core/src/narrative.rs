//! Request and result types for narrative processing.

use crate::count_words;
use derive_getters::Getters;
use narrtx_error::{ProcessingError, ProcessingErrorKind};
use serde::{Deserialize, Serialize};

/// Literal the cleaning model returns for text that cannot be salvaged.
pub const UNREADABLE_SENTINEL: &str = "UNREADABLE";

/// Cleaned text shorter than this many characters counts as unreadable.
pub const MIN_CLEANED_LENGTH: usize = 10;

/// Scores below this are rejected as non-readable.
pub const MIN_READABILITY_SCORE: u8 = 20;

/// Message returned for unreadable or low-scoring text.
pub const NON_READABLE_MESSAGE: &str =
    "The provided narrative is non-readable. Please provide the text again in the text box.";

/// Message returned when text passes every check.
pub const PROCESSED_MESSAGE: &str = "Text processed successfully";

/// Whether cleaned text should be rejected outright.
///
/// # Examples
///
/// ```
/// use narrtx_core::is_unreadable;
///
/// assert!(is_unreadable("UNREADABLE"));
/// assert!(is_unreadable("abcde"));
/// assert!(!is_unreadable("unreadable text, but long enough"));
/// ```
pub fn is_unreadable(cleaned: &str) -> bool {
    cleaned == UNREADABLE_SENTINEL || cleaned.chars().count() < MIN_CLEANED_LENGTH
}

/// Inbound request body.
///
/// `text` is optional on the wire so a missing field and an empty one are
/// rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeRequest {
    /// Raw narrative text
    #[serde(default)]
    pub text: Option<String>,
}

impl NarrativeRequest {
    /// Creates a request for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Returns the text if it has any non-whitespace content.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingErrorKind::EmptyText`] when the text is missing,
    /// empty, or whitespace only.
    #[track_caller]
    pub fn validated_text(&self) -> Result<&str, ProcessingError> {
        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProcessingError::new(ProcessingErrorKind::EmptyText)),
        }
    }
}

/// Output of the cleaning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct CleanResult {
    /// Model-derived or heuristic-derived cleaned text
    cleaned_text: String,
    /// True when the external service failed and the local heuristic ran
    used_fallback: bool,
}

impl CleanResult {
    /// Result produced by the generation service.
    pub fn from_model(cleaned_text: impl Into<String>) -> Self {
        Self {
            cleaned_text: cleaned_text.into(),
            used_fallback: false,
        }
    }

    /// Result produced by the local heuristic.
    pub fn from_fallback(cleaned_text: impl Into<String>) -> Self {
        Self {
            cleaned_text: cleaned_text.into(),
            used_fallback: true,
        }
    }

    /// Whether the cleaned text is unreadable.
    pub fn is_unreadable(&self) -> bool {
        is_unreadable(&self.cleaned_text)
    }

    /// Consumes the result, returning the cleaned text.
    pub fn into_text(self) -> String {
        self.cleaned_text
    }
}

/// Judgment returned for a processed narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeResult {
    /// Whether the narrative passed
    success: bool,
    /// Human-readable outcome
    message: String,
    /// Cleaned text; empty when the text was unreadable
    cleaned_text: String,
    /// Readability score in [0, 100]
    readability_score: u8,
    /// Text as submitted
    original_text: String,
    /// Words dropped by cleaning; only present on success and may be negative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    words_removed: Option<i64>,
}

impl NarrativeResult {
    /// Rejection for text the cleaner could not salvage.
    pub fn unreadable(original_text: impl Into<String>) -> Self {
        Self {
            success: false,
            message: NON_READABLE_MESSAGE.to_string(),
            cleaned_text: String::new(),
            readability_score: 0,
            original_text: original_text.into(),
            words_removed: None,
        }
    }

    /// Rejection for cleaned text that scored below the threshold.
    ///
    /// The cleaned text is still surfaced so the caller can see what scored
    /// poorly.
    pub fn low_readability(
        original_text: impl Into<String>,
        cleaned_text: impl Into<String>,
        readability_score: u8,
    ) -> Self {
        Self {
            success: false,
            message: NON_READABLE_MESSAGE.to_string(),
            cleaned_text: cleaned_text.into(),
            readability_score,
            original_text: original_text.into(),
            words_removed: None,
        }
    }

    /// Successful result. `words_removed` is derived from the two texts.
    pub fn processed(
        original_text: impl Into<String>,
        cleaned_text: impl Into<String>,
        readability_score: u8,
    ) -> Self {
        let original_text = original_text.into();
        let cleaned_text = cleaned_text.into();
        let words_removed = count_words(&original_text) as i64 - count_words(&cleaned_text) as i64;
        Self {
            success: true,
            message: PROCESSED_MESSAGE.to_string(),
            cleaned_text,
            readability_score,
            original_text,
            words_removed: Some(words_removed),
        }
    }
}
