//! Input validation, prompt construction and upstream-response parsing.
//!
//! The whole request pipeline is linear: validate the caller's text, build
//! the prompt, hand it to the generation backend, then parse and
//! shape-check whatever text comes back. Each step returns an explicit
//! `Result`; nothing is retried.

pub mod model;

pub use model::{Analysis, AnalyzeRequest, ResponseEnvelope};

use crate::error::{AnalyzeError, AnalyzeResult};

/// Reject empty or whitespace-only input before any upstream call.
pub fn validate_text(text: &str) -> AnalyzeResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::InvalidInput);
    }
    Ok(trimmed)
}

/// Build the instructional prompt, embedding the caller's text verbatim.
///
/// The model is told to emit ONLY a JSON object with exactly the three
/// keys the `Analysis` shape requires.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a productivity assistant.

Analyze the following text and return ONLY a valid JSON object with this exact structure:
{{
  "summary": "one sentence summary",
  "tone": "emotional tone",
  "urgency": number from 1 to 5
}}

Text:
{text}
"#
    )
}

/// Parse the raw upstream text as JSON and validate it against the
/// `Analysis` shape.
///
/// Both failure modes (not JSON at all, or JSON of the wrong shape) fold
/// into `MalformedUpstream`; the serde detail is carried for logging while
/// callers see the fixed diagnostic message.
pub fn parse_analysis(raw: &str) -> AnalyzeResult<Analysis> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| AnalyzeError::MalformedUpstream(format!("invalid JSON: {e}")))?;

    let analysis: Analysis = serde_json::from_value(value)
        .map_err(|e| AnalyzeError::MalformedUpstream(format!("shape mismatch: {e}")))?;

    tracing::debug!(urgency = analysis.urgency, tone = %analysis.tone, "Parsed analysis");

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(validate_text(""), Err(AnalyzeError::InvalidInput)));
        assert!(matches!(
            validate_text("   "),
            Err(AnalyzeError::InvalidInput)
        ));
        assert!(matches!(
            validate_text("\n\t "),
            Err(AnalyzeError::InvalidInput)
        ));
    }

    #[test]
    fn non_empty_text_is_trimmed() {
        assert_eq!(validate_text("  ship it  ").unwrap(), "ship it");
    }

    #[test]
    fn prompt_embeds_text_verbatim_and_names_all_keys() {
        let prompt = build_prompt("Meeting moved to 3pm, reply ASAP!");
        assert!(prompt.contains("Meeting moved to 3pm, reply ASAP!"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"tone\""));
        assert!(prompt.contains("\"urgency\""));
    }

    #[test]
    fn well_formed_response_passes_through_unchanged() {
        let raw = r#"{"summary": "Meeting moved to 3pm.", "tone": "neutral", "urgency": 2}"#;
        let analysis = parse_analysis(raw).unwrap();
        assert_eq!(analysis.summary, "Meeting moved to 3pm.");
        assert_eq!(analysis.tone, "neutral");
        assert_eq!(analysis.urgency, 2);
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_analysis("not json").unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedUpstream(_)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = parse_analysis(r#"{"summary": "ok"}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedUpstream(_)));
    }

    #[test]
    fn wrong_type_is_malformed() {
        let err =
            parse_analysis(r#"{"summary": "ok", "tone": "calm", "urgency": "high"}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::MalformedUpstream(_)));
    }

    #[test]
    fn out_of_range_urgency_passes_through() {
        let raw = r#"{"summary": "fire", "tone": "panicked", "urgency": 9}"#;
        assert_eq!(parse_analysis(raw).unwrap().urgency, 9);
    }

    #[test]
    fn malformed_error_displays_fixed_detail() {
        let err = parse_analysis("not json").unwrap_err();
        assert_eq!(err.to_string(), "Gemini returned invalid JSON");
    }
}
