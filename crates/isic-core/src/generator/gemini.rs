//! Google Gemini HTTP client.
//!
//! Calls `POST /v1beta/models/{model}:generateContent` with the prompt as a
//! single user turn. The API key travels in the `x-goog-api-key` header so it
//! never appears in URLs or transport error messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::TextGenerator;
use crate::classification::model::Credential;
use crate::config::ClassifierConfig;
use crate::error::GenerationError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

impl GeminiClient {
    /// Create a client from config. The timeout bounds the whole request.
    pub fn new(config: &ClassifierConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, credential: &Credential, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, "Calling Gemini generateContent");
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, credential.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&body);
            error!(%status, %message, "Gemini API error");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_text(parsed)
    }
}

/// Pull a readable message out of an error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error: ErrorBody { message: Some(message), status } }) => match status {
            Some(status) => format!("{} ({})", message, status),
            None => message,
        },
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

/// Concatenate the text parts of the first candidate, skipping thought parts.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|f| f.block_reason);

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = block_reason
            .map(|r| format!("prompt blocked: {}", r))
            .unwrap_or_else(|| "no candidates".to_string());
        return Err(GenerationError::EmptyResponse(reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.thought)
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .map(|r| format!("finish reason: {}", r))
            .unwrap_or_else(|| "candidate had no text parts".to_string());
        return Err(GenerationError::EmptyResponse(reason));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_endpoint() {
        let config = ClassifierConfig::new(Some("http://localhost:9999/"), Some("gemini-test"), None);
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(client.model(), "gemini-test");
    }

    #[test]
    fn test_extract_concatenates_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"role":"model","parts":[
                {"text":"Section: J\n"},
                {"text":"Division: 62"}
            ]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "Section: J\nDivision: 62");
    }

    #[test]
    fn test_extract_skips_thoughts_and_keeps_whitespace() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[
                {"text":"thinking...","thought":true},
                {"text":"  **Section J**  \n"}
            ]}}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "  **Section J**  \n");
    }

    #[test]
    fn test_blocked_prompt() {
        let response = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        match extract_text(response) {
            Err(GenerationError::EmptyResponse(reason)) => assert!(reason.contains("SAFETY")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_candidate_without_text() {
        let response = parse(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#);
        match extract_text(response) {
            Err(GenerationError::EmptyResponse(reason)) => assert!(reason.contains("MAX_TOKENS")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            api_error_message(body),
            "API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)"
        );
        assert_eq!(api_error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(api_error_message(""), "empty response body");
    }
}
