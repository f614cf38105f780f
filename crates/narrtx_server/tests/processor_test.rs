//! Tests for the pass/fail decision policy.

mod test_utils;

use narrtx_core::{NON_READABLE_MESSAGE, NarrativeRequest, PROCESSED_MESSAGE};
use narrtx_error::ProcessingErrorKind;
use narrtx_models::DEFAULT_TIMEOUT;
use narrtx_server::{NarrativeProcessor, ServerConfig};
use std::time::Duration;
use test_utils::{FailingGenerator, FixedGenerator, processor_with};

#[tokio::test]
async fn test_readable_text_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let processor = processor_with(FixedGenerator::new("Hello world. This is fine."));

    let result = processor.process("Hello wrld. This is fine xzq.").await?;

    assert!(*result.success());
    assert_eq!(result.message(), PROCESSED_MESSAGE);
    assert_eq!(result.cleaned_text(), "Hello world. This is fine.");
    assert_eq!(*result.readability_score(), 73);
    assert_eq!(result.original_text(), "Hello wrld. This is fine xzq.");
    assert_eq!(*result.words_removed(), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_sentinel_is_rejected_without_text() -> Result<(), Box<dyn std::error::Error>> {
    let processor = processor_with(FixedGenerator::new("UNREADABLE"));

    let result = processor.process("qwfp arst zxcv").await?;

    assert!(!*result.success());
    assert_eq!(result.message(), NON_READABLE_MESSAGE);
    assert_eq!(result.cleaned_text(), "");
    assert_eq!(*result.readability_score(), 0);
    assert_eq!(result.original_text(), "qwfp arst zxcv");
    assert_eq!(*result.words_removed(), None);
    Ok(())
}

#[tokio::test]
async fn test_short_cleaned_text_is_unreadable() -> Result<(), Box<dyn std::error::Error>> {
    // "abcde" would score well but is under ten characters
    let processor = processor_with(FixedGenerator::new("abcde"));

    let result = processor.process("abcde fghij").await?;

    assert!(!*result.success());
    assert_eq!(*result.readability_score(), 0);
    assert_eq!(result.cleaned_text(), "");
    Ok(())
}

#[tokio::test]
async fn test_low_score_keeps_cleaned_text() -> Result<(), Box<dyn std::error::Error>> {
    let dense = "Notwithstanding considerable organizational complexity, interdepartmental \
                 communication methodologies necessitated comprehensive reconsideration";
    let processor = processor_with(FixedGenerator::new(dense));

    let result = processor.process(dense).await?;

    assert!(!*result.success());
    assert_eq!(result.message(), NON_READABLE_MESSAGE);
    assert_eq!(result.cleaned_text(), dense);
    assert!(*result.readability_score() < 20);
    assert_eq!(*result.words_removed(), None);
    Ok(())
}

#[tokio::test]
async fn test_fallback_result_is_scored() -> Result<(), Box<dyn std::error::Error>> {
    let processor = processor_with(FailingGenerator::unreachable());

    let result = processor.process("I saw a dog. It ran 9x9 fast.").await?;

    // "I", "a" and "9x9" are dropped by the heuristic
    assert!(*result.success());
    assert_eq!(result.cleaned_text(), "saw dog. It ran fast.");
    assert_eq!(*result.words_removed(), Some(3));
    Ok(())
}

#[tokio::test]
async fn test_fallback_gibberish_is_unreadable() -> Result<(), Box<dyn std::error::Error>> {
    let processor = processor_with(FailingGenerator::unreachable());

    let result = processor.process("#$% 123 q9 zz11 @@").await?;

    assert!(!*result.success());
    assert_eq!(result.cleaned_text(), "");
    Ok(())
}

#[tokio::test]
async fn test_words_removed_may_be_negative() -> Result<(), Box<dyn std::error::Error>> {
    let processor = processor_with(FixedGenerator::new("I am going to go to the shop."));

    let result = processor.process("gonna go shop").await?;

    assert!(*result.success());
    assert_eq!(*result.words_removed(), Some(-5));
    Ok(())
}

#[tokio::test]
async fn test_blank_text_is_a_validation_error() {
    let processor = processor_with(FixedGenerator::new("unused"));

    let err = processor.process("  \n ").await.unwrap_err();
    assert_eq!(err.kind(), &ProcessingErrorKind::EmptyText);

    let err = processor
        .process_request(&NarrativeRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &ProcessingErrorKind::EmptyText);
}

#[test]
fn test_from_config_uses_configured_deadline() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::builder()
        .request_timeout_secs(5_u64)
        .model("phi3")
        .build()?;

    let processor = NarrativeProcessor::from_config(&config)?;

    assert_eq!(processor.cleaner().timeout(), Duration::from_secs(5));
    assert!(format!("{:?}", processor.cleaner()).contains("phi3"));
    Ok(())
}

#[test]
fn test_default_processor_uses_sixty_second_deadline() {
    let processor = processor_with(FixedGenerator::new("unused"));
    assert_eq!(processor.cleaner().timeout(), DEFAULT_TIMEOUT);
    assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(60));
}
