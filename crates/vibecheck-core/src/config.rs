//! Runtime configuration, read once from the process environment at startup
//! and threaded through explicitly.

use crate::error::{AnalyzeError, AnalyzeResult};

/// Default Gemini model consulted for analyses.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default development origin allowed by CORS (React + Vite).
pub const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Upstream credentials and model selection.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Gemini backend.
    pub api_key: String,
    /// Identifier of the generation model to consult.
    pub model_id: String,
    /// Single origin allowed to call the service cross-origin.
    pub allowed_origin: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL` and `VIBECHECK_ORIGIN`
    /// fall back to development defaults.
    pub fn from_env() -> AnalyzeResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AnalyzeError::Config("GEMINI_API_KEY is not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(AnalyzeError::Config("GEMINI_API_KEY is empty".to_string()));
        }

        let model_id =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let allowed_origin =
            std::env::var("VIBECHECK_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());

        Ok(Self {
            api_key,
            model_id,
            allowed_origin,
        })
    }
}
