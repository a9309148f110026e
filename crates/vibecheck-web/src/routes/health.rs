//! Liveness and health handlers.

use axum::Json;
use serde_json::{json, Value};

/// Liveness string returned from the service root.
pub const LIVENESS_MESSAGE: &str = "VibeCheck backend is live";

pub async fn root() -> Json<Value> {
    Json(json!({ "message": LIVENESS_MESSAGE }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
