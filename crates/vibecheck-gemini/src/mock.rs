//! Deterministic generator for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use vibecheck_core::{AnalyzeError, AnalyzeResult};

use crate::TextGenerator;

/// Scripted backend: always returns the same canned reply (or the same
/// failure) and counts how often it was consulted.
pub struct MockGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    /// A mock that replies with the given raw text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A mock that fails every call with an upstream error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `generate` was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> AnalyzeResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AnalyzeError::Upstream(message.clone())),
        }
    }
}
