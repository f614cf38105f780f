//! Core data types and text heuristics for narrtx.
//!
//! Everything in this crate is pure: no I/O, no async. The server crate wires
//! these pieces around the call to the external generation service.

mod extraction;
mod fallback;
mod narrative;
mod prompt;
mod readability;

pub use extraction::{EXPLANATION_MARKERS, extract_cleaned_text};
pub use fallback::{FALLBACK_MIN_KEEP_PERCENT, heuristic_clean};
pub use narrative::{
    CleanResult, MIN_CLEANED_LENGTH, MIN_READABILITY_SCORE, NON_READABLE_MESSAGE,
    NarrativeRequest, NarrativeResult, PROCESSED_MESSAGE, UNREADABLE_SENTINEL, is_unreadable,
};
pub use prompt::cleaning_prompt;
pub use readability::{ReadabilityScorer, count_sentences, count_words};
