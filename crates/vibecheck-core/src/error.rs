//! Centralized error types for VibeCheck.

use thiserror::Error;

/// Fixed detail message returned when Gemini output cannot be used.
pub const MALFORMED_UPSTREAM_DETAIL: &str = "Gemini returned invalid JSON";

/// Main error type for analyzer operations.
///
/// Every request ends in exactly one of these or a success envelope; no
/// partial results are ever returned.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Caller-supplied text is empty or whitespace-only. Rejected before
    /// any upstream call is made.
    #[error("Text cannot be empty")]
    InvalidInput,

    /// Upstream text is not valid JSON, or parses but fails shape
    /// validation against the expected analysis object.
    #[error("Gemini returned invalid JSON")]
    MalformedUpstream(String),

    /// Any other failure during the upstream call (auth, network,
    /// rate-limit, timeout). Carries the underlying description.
    #[error("{0}")]
    Upstream(String),

    /// Startup configuration problem (missing credential, bad origin).
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for analyzer operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

impl AnalyzeError {
    /// Create an upstream error from any displayable cause.
    pub fn upstream(cause: impl std::fmt::Display) -> Self {
        Self::Upstream(cause.to_string())
    }
}
