//! VibeCheck Web Server
//!
//! Axum-based server exposing the analyze endpoint plus liveness routes.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use vibecheck_core::{AnalyzeError, AnalyzeResult};

use state::AppState;

/// Create the application router.
///
/// Fails only when the configured CORS origin is not a valid header value.
pub fn create_router(state: AppState) -> AnalyzeResult<Router> {
    let cors = cors_layer(&state.config.allowed_origin)?;

    Ok(Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// Cross-origin access for the one designated development origin, with all
/// methods and headers allowed. A convenience for the local frontend, not
/// a security boundary.
fn cors_layer(origin: &str) -> AnalyzeResult<CorsLayer> {
    let origin = origin.parse::<HeaderValue>().map_err(|_| {
        AnalyzeError::Config(format!("invalid CORS origin: {origin}"))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Run the web server until the process is stopped.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state)?;

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Analyzer listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;
    use vibecheck_core::Config;
    use vibecheck_gemini::MockGenerator;

    fn test_app() -> Router {
        let config = Config {
            api_key: "test-key".to_string(),
            model_id: "gemini-3-flash-preview".to_string(),
            allowed_origin: "http://localhost:5173".to_string(),
        };
        let state = AppState::new(Arc::new(config), Arc::new(MockGenerator::replying("{}")));
        create_router(state).unwrap()
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], routes::health::LIVENESS_MESSAGE);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[test]
    fn invalid_cors_origin_fails_router_construction() {
        let config = Config {
            api_key: "test-key".to_string(),
            model_id: "gemini-3-flash-preview".to_string(),
            allowed_origin: "not\na\nheader".to_string(),
        };
        let state = AppState::new(Arc::new(config), Arc::new(MockGenerator::replying("{}")));
        assert!(create_router(state).is_err());
    }
}
