//! Upstream text generation for VibeCheck.
//!
//! The analyzer only needs one thing from the backend: a prompt in, raw
//! (expected-JSON) text out. `TextGenerator` is that seam; `GeminiClient`
//! is the real implementation and `MockGenerator` a scripted one for tests.

pub mod client;
pub mod mock;

pub use client::GeminiClient;
pub use mock::MockGenerator;

use async_trait::async_trait;
use vibecheck_core::AnalyzeResult;

/// A generation backend. Could be Gemini or a test script.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a prompt and return the raw text of the model's reply.
    async fn generate(&self, prompt: &str) -> AnalyzeResult<String>;
}
