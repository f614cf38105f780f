//! Local gibberish filter used when the generation service is unavailable.

use crate::UNREADABLE_SENTINEL;
use tracing::debug;

/// Percentage of tokens that must survive for the text to count as readable.
pub const FALLBACK_MIN_KEEP_PERCENT: usize = 30;

const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '!', '?', ';', ':', '(', ')'];

fn looks_english(token: &str) -> bool {
    let bare: String = token
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    bare.len() > 1
        && bare
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '\'' || c == '-')
}

/// Filters `text` down to tokens that look like English words.
///
/// A token survives when, after removing `.,!?;:()`, it is longer than one
/// character and made only of ASCII letters, apostrophes and hyphens.
/// Survivors keep their original punctuation. When fewer than 30% of tokens
/// survive the whole text is reported as [`UNREADABLE_SENTINEL`].
///
/// # Examples
///
/// ```
/// use narrtx_core::heuristic_clean;
///
/// assert_eq!(heuristic_clean("Hello there, xq7z friend."), "Hello there, friend.");
/// assert_eq!(heuristic_clean("zx9 q1 42 ok"), "UNREADABLE");
/// ```
pub fn heuristic_clean(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let kept: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| looks_english(token))
        .collect();

    debug!(
        tokens = tokens.len(),
        kept = kept.len(),
        "Applied heuristic gibberish filter"
    );

    // Exactly 30% still counts as readable
    if kept.len() * 100 < tokens.len() * FALLBACK_MIN_KEEP_PERCENT {
        UNREADABLE_SENTINEL.to_string()
    } else {
        kept.join(" ")
    }
}
