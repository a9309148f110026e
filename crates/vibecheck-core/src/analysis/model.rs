//! Request/response contract for the analyzer.

use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Structured classification produced by the model.
///
/// Shape validation happens at deserialization: all three fields are
/// required and must carry the right JSON type. `urgency` is prompted to
/// stay in 1..=5 but an out-of-range integer passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// One-sentence summary of the input.
    pub summary: String,
    /// Free-form emotional tone label ("stressed", "neutral", ...).
    pub tone: String,
    /// Urgency score, 1 (low) to 5 (high).
    pub urgency: i64,
}

/// Successful response returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    pub status: &'static str,
    /// Identifier of the generation model consulted.
    pub model: String,
    pub analysis: Analysis,
}

impl ResponseEnvelope {
    pub fn success(model: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            status: "success",
            model: model.into(),
            analysis,
        }
    }
}
