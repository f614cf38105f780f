//! Mock text generators for pipeline and API tests.

#![allow(dead_code)]

use async_trait::async_trait;
use narrtx_error::{GenerationError, GenerationErrorKind};
use narrtx_models::TextGenerator;
use narrtx_server::{NarrativeProcessor, TextCleaner};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers every prompt with the same text and records the prompts it saw.
#[derive(Debug, Default)]
pub struct FixedGenerator {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    fn model_name(&self) -> &str {
        "mock-fixed"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}

/// Fails every call with the given kind.
#[derive(Debug)]
pub struct FailingGenerator {
    kind: GenerationErrorKind,
}

impl FailingGenerator {
    pub fn new(kind: GenerationErrorKind) -> Self {
        Self { kind }
    }

    pub fn unreachable() -> Self {
        Self::new(GenerationErrorKind::Http("connection refused".to_string()))
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn model_name(&self) -> &str {
        "mock-failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::new(self.kind.clone()))
    }
}

/// Sleeps before answering.
#[derive(Debug)]
pub struct SlowGenerator {
    delay: Duration,
}

impl SlowGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TextGenerator for SlowGenerator {
    fn model_name(&self) -> &str {
        "mock-slow"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        tokio::time::sleep(self.delay).await;
        Ok("This answer arrived far too late.".to_string())
    }
}

/// Panics on every call.
#[derive(Debug)]
pub struct PanickingGenerator;

#[async_trait]
impl TextGenerator for PanickingGenerator {
    fn model_name(&self) -> &str {
        "mock-panicking"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        panic!("generator exploded");
    }
}

/// Processor over any generator with the default deadline.
pub fn processor_with(generator: impl TextGenerator + 'static) -> NarrativeProcessor {
    NarrativeProcessor::new(TextCleaner::new(Arc::new(generator)))
}
