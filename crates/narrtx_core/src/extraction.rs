//! Pulls the cleaned text out of a chatty model response.

use regex::Regex;
use std::sync::LazyLock;

/// Substrings after which a model response is treated as commentary.
///
/// Checked in order; the first marker present wins, even if a later marker
/// appears earlier in the text.
pub const EXPLANATION_MARKERS: [&str; 6] = [
    "\n\nExplanation:",
    "\nExplanation:",
    "\n\n1.",
    "\n1.",
    "\nNote:",
    "\n\nNote:",
];

static CLEANED_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Cleaned text:\s*").expect("CLEANED_LABEL_RE should compile")
});

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Extracts the answer from a raw generation response.
///
/// Truncates at the first matching explanation marker, drops a leading
/// `Cleaned text:` label, strips one surrounding quote on each side, and
/// trims.
///
/// # Examples
///
/// ```
/// use narrtx_core::extract_cleaned_text;
///
/// let raw = "Clean output text\n\nExplanation: blah";
/// assert_eq!(extract_cleaned_text(raw), "Clean output text");
///
/// let raw = "cleaned TEXT: \"The cat sat.\"";
/// assert_eq!(extract_cleaned_text(raw), "The cat sat.");
/// ```
pub fn extract_cleaned_text(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(index) = EXPLANATION_MARKERS
        .iter()
        .find_map(|marker| text.find(marker))
    {
        text = &text[..index];
    }

    if let Some(label) = CLEANED_LABEL_RE.find(text) {
        text = &text[label.end()..];
    }

    if let Some(rest) = text.strip_prefix(is_quote) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(is_quote) {
        text = rest;
    }

    text.trim().to_string()
}
