/// Gemini client — the single point of entry for all generative-language API
/// calls in CraftCV.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All text-assist interactions MUST go through this module.
///
/// Each call is a single request/response: no retry, no backoff. Callers in
/// `assist::ops` substitute fallback values on any failure.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1/models";
/// The model used for all assist calls in CraftCV.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-pro";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no text candidates")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// The single Gemini client shared by all assist operations.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Sends one prompt and returns the first text candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_URL}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or(GeminiError::EmptyContent)?;

        debug!("Gemini call succeeded: {} chars of text", text.len());
        Ok(text)
    }
}

/// Returns the first `{...}` substring of the model output: first opening
/// brace through the last closing brace. Models routinely wrap JSON in prose
/// or code fences, so no stricter matching is attempted.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Returns the first `[...]` substring, same contract as `extract_json_object`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_object_from_prose() {
        let text = "Here is your result:\n{\"improved\": \"x\"}\nHope that helps!";
        assert_eq!(extract_json_object(text), Some("{\"improved\": \"x\"}"));
    }

    #[test]
    fn test_extract_object_spans_to_last_brace() {
        let text = "{\"a\": {\"b\": 1}}";
        assert_eq!(extract_json_object(text), Some("{\"a\": {\"b\": 1}}"));
    }

    #[test]
    fn test_extract_object_missing_returns_none() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("only an opening {"), None);
    }

    #[test]
    fn test_extract_array_from_fenced_output() {
        let text = "```json\n[\"Rust\", \"Go\"]\n```";
        assert_eq!(extract_json_array(text), Some("[\"Rust\", \"Go\"]"));
    }

    #[test]
    fn test_extract_array_missing_returns_none() {
        assert_eq!(extract_json_array("{\"not\": \"an array\"}"), None);
    }
}
