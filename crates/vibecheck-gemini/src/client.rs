//! Gemini HTTP client.
//!
//! Talks to the `generateContent` endpoint with JSON output forced via
//! `responseMimeType` and a medium thinking level, the designed trade-off
//! between answer quality and latency.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vibecheck_core::{AnalyzeError, AnalyzeResult, Config};

use crate::TextGenerator;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upstream request timeout. The backend gives no default worth relying
/// on, so the client pins one explicitly.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Gemini generation client. Cheap to clone; the inner `reqwest::Client`
/// is safe for concurrent use, so one instance is built at startup and
/// shared across all requests.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_level: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClient {
    /// Create a client for the given configuration against the public API.
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL (used by tests).
    pub fn with_base_url(config: &Config, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model_id.clone(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    /// Model identifier this client consults.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> AnalyzeResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                thinking_config: ThinkingConfig {
                    thinking_level: "MEDIUM",
                },
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalyzeError::upstream(format!("Failed to reach Gemini: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzeError::Upstream(format!(
                "Gemini API error ({status}): {body}"
            )));
        }

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalyzeError::upstream(format!("Failed to read Gemini response: {e}")))?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AnalyzeError::Upstream("Gemini returned no candidates".to_string()))?;

        debug!(model = %self.model, chars = text.len(), "Received generation");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_key: "test-key".to_string(),
            model_id: "gemini-3-flash-preview".to_string(),
            allowed_origin: "http://localhost:5173".to_string(),
        }
    }

    #[test]
    fn endpoint_targets_configured_model() {
        let client = GeminiClient::with_base_url(&test_config(), "https://example.test/v1beta/");
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn request_body_forces_json_output() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                thinking_config: ThinkingConfig {
                    thinking_level: "MEDIUM",
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["thinkingLevel"],
            "MEDIUM"
        );
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
