//! Crude readability heuristic over sentence and word statistics.

use tracing::trace;

/// Counts whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts sentences delimited by runs of `.`, `!` or `?`.
///
/// Whitespace-only fragments are not sentences. The count may be zero; the
/// scorer floors it at one.
pub fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
}

/// Scores text on a 0-100 scale where higher means simpler.
///
/// Longer sentences and longer words both lower the score:
/// `100 - 2 * words_per_sentence - 5 * mean_word_length`, clamped and
/// rounded. Word length counts characters as written, punctuation included.
///
/// # Examples
///
/// ```
/// use narrtx_core::ReadabilityScorer;
///
/// assert_eq!(ReadabilityScorer::score("Hello world. This is fine."), 73);
/// assert_eq!(ReadabilityScorer::score("   "), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    /// Computes the score for `text`.
    pub fn score(text: &str) -> u8 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0;
        }

        let word_count = words.len() as f64;
        let sentence_count = count_sentences(text).max(1) as f64;

        let avg_words_per_sentence = word_count / sentence_count;
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = total_chars as f64 / word_count;

        let raw = 100.0 - avg_words_per_sentence * 2.0 - avg_word_length * 5.0;
        trace!(
            words = words.len(),
            sentences = sentence_count,
            avg_words_per_sentence,
            avg_word_length,
            raw,
            "Computed readability"
        );

        // Clamped to [0, 100] first, so half-away-from-zero is half-up here
        raw.clamp(0.0, 100.0).round() as u8
    }
}
