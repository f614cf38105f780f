//! Tests for the readability heuristic.

use narrtx_core::{ReadabilityScorer, count_words};

#[test]
fn test_example_sentence_score() {
    // 5 words over 2 sentences; lengths 5,6,4,2,5 with punctuation kept
    // 100 - 2.5 * 2 - 4.4 * 5 = 73
    assert_eq!(ReadabilityScorer::score("Hello world. This is fine."), 73);
}

#[test]
fn test_empty_and_blank_text_score_zero() {
    assert_eq!(ReadabilityScorer::score(""), 0);
    assert_eq!(ReadabilityScorer::score(" \n\t "), 0);
}

#[test]
fn test_unterminated_text_counts_as_one_sentence() {
    // 3 words, 1 sentence, avg length 3: 100 - 6 - 15
    assert_eq!(ReadabilityScorer::score("the cat sat"), 79);
}

#[test]
fn test_punctuation_only_floors_sentence_count() {
    // "?!" is one word of length 2 and zero sentences, floored to one
    assert_eq!(ReadabilityScorer::score("?!"), 88);
}

#[test]
fn test_negative_raw_score_clamps_to_zero() {
    // 1 word of length 80 in 1 sentence: 100 - 2 - 400 = -302
    assert_eq!(ReadabilityScorer::score(&"x".repeat(80)), 0);
}

#[test]
fn test_long_words_stay_just_above_zero() {
    // 4 words, 73 characters, 1 sentence: 100 - 8 - 91.25 = 0.75 -> 1
    let text = "Incomprehensibilities notwithstanding, antidisestablishmentarianism persists";
    assert_eq!(ReadabilityScorer::score(text), 1);
}

#[test]
fn test_rounds_half_up() {
    // 1 word of length 9 in 1 sentence: 100 - 2 - 45 = 53
    assert_eq!(ReadabilityScorer::score("abcdefghi"), 53);
    // 2 words, lengths 1 and 2, 1 sentence: 100 - 4 - 7.5 = 88.5 -> 89
    assert_eq!(ReadabilityScorer::score("a bc"), 89);
}

#[test]
fn test_score_always_in_range() {
    let samples = vec![
        String::new(),
        "a".to_string(),
        "A. B. C. D. E. F.".to_string(),
        "word ".repeat(500),
        "Short. Sweet. Simple.".to_string(),
        "x".repeat(80),
        "!!! ??? ...".to_string(),
        "Ünïcödé wörds ärë cöüntëd by chäräctërs.".to_string(),
    ];
    for sample in &samples {
        let score = ReadabilityScorer::score(sample);
        assert!(score <= 100, "score {} out of range for {:?}", score, sample);
    }
    assert_eq!(ReadabilityScorer::score(&samples[5]), 0);
}

#[test]
fn test_simpler_text_scores_higher() {
    let simple = ReadabilityScorer::score("I ran. It was fun. We won.");
    let dense = ReadabilityScorer::score(
        "Notwithstanding considerable organizational complexity the committee deliberated extensively",
    );
    assert!(simple > dense);
}

#[test]
fn test_count_words_matches_scorer_rule() {
    assert_eq!(count_words("a b c"), 3);
    assert_eq!(count_words("  spaced   out  "), 2);
}
