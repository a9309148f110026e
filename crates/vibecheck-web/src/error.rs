//! Mapping from the analyzer error taxonomy to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vibecheck_core::AnalyzeError;

/// Request-boundary error. Every failure a handler can produce converts
/// into one of these; nothing propagates past the handler.
#[derive(Debug)]
pub struct ApiError(pub AnalyzeError);

impl From<AnalyzeError> for ApiError {
    fn from(err: AnalyzeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AnalyzeError::InvalidInput => StatusCode::BAD_REQUEST,
            AnalyzeError::MalformedUpstream(_)
            | AnalyzeError::Upstream(_)
            | AnalyzeError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match &self.0 {
            // Caller mistake, not an upstream fault.
            AnalyzeError::InvalidInput => {
                tracing::debug!("Rejected empty analyze request");
            }
            AnalyzeError::MalformedUpstream(detail) => {
                tracing::error!(%detail, "Gemini returned an unusable payload");
            }
            other => {
                tracing::error!(error = %other, "Gemini API error");
            }
        }

        // Callers see the Display text only; the carried detail stays in
        // the logs.
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
