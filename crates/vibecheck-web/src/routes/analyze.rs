//! The analyze endpoint.

use axum::{extract::State, Json};
use vibecheck_core::analysis::{self, AnalyzeRequest, ResponseEnvelope};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /analyze` — validate the text, consult the generation backend,
/// shape-check its reply and wrap it in a success envelope.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let text = analysis::validate_text(&req.text)?;

    let prompt = analysis::build_prompt(text);
    let raw = state.generator.generate(&prompt).await?;

    let parsed = analysis::parse_analysis(&raw)?;

    Ok(Json(ResponseEnvelope::success(
        state.config.model_id.clone(),
        parsed,
    )))
}
