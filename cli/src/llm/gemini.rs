//! # Gemini `generateContent` Client
//!
//! File: cli/src/llm/gemini.rs
//!
//! Sends one user turn plus the system instruction to
//! `{base_url}/models/{model}:generateContent` and returns the text of the
//! first candidate. The API key travels in the `x-goog-api-key` header so it
//! never shows up in logged URLs.
//!
use super::{LlmError, TextGenerator};
use crate::core::config::LlmConfig;
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Upper bound for a single model call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
    system_prompt: String,
    max_output_tokens: u32,
    temperature: f32,
}

// --- Wire types ---

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig, api_key: String, system_prompt: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for the language model")?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        Ok(Self {
            client,
            url,
            api_key,
            system_prompt,
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, user_text: &str) -> std::result::Result<String, LlmError> {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &self.system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user_text }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
            },
        };

        debug!("Calling language model at {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .ok()
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| format!("language model returned {}", status));
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        Ok(first_candidate_text(parsed))
    }
}

/// Concatenates the text parts of the first candidate. A response without
/// candidates yields an empty string; the caller decides what to show then.
fn first_candidate_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Bytes,
        http::{HeaderMap, StatusCode, Uri},
        response::IntoResponse,
        Json, Router,
    };
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1beta", addr)
    }

    fn config(base_url: String) -> LlmConfig {
        LlmConfig {
            base_url,
            model: "gemini-test".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: "sys" }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "hi" }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 400,
                temperature: 0.5,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 400);
        assert_eq!(value["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn test_first_candidate_text() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": " Hello" }, { "text": " world " }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(first_candidate_text(response), "Hello world");

        let empty: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(first_candidate_text(empty), "");
    }

    #[tokio::test]
    async fn test_generate_success() -> Result<()> {
        let app = Router::new().fallback(|uri: Uri, headers: HeaderMap, body: Bytes| async move {
            let request: Value = serde_json::from_slice(&body).unwrap();
            let ok = uri.path() == "/v1beta/models/gemini-test:generateContent"
                && headers.get("x-goog-api-key").map(|v| v.as_bytes()) == Some(b"secret".as_slice())
                && request["contents"][0]["parts"][0]["text"] == "where are you based?";
            if ok {
                Json(json!({ "candidates": [{ "content": { "parts": [{ "text": "Berlin.\n" }] } }] }))
                    .into_response()
            } else {
                (StatusCode::BAD_REQUEST, "unexpected request").into_response()
            }
        });
        let base = spawn(app).await;
        let client = GeminiClient::new(&config(base), "secret".into(), "sys".into())?;

        assert_eq!(client.generate("where are you based?").await, Ok("Berlin.".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_rate_limited() -> Result<()> {
        let app = Router::new().fallback(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" } })),
            )
        });
        let base = spawn(app).await;
        let client = GeminiClient::new(&config(base), "secret".into(), "sys".into())?;

        let err = client.generate("hello").await.unwrap_err();
        assert_eq!(err.status(), 429);
        assert_eq!(err.to_string(), "Resource exhausted");
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_malformed() -> Result<()> {
        let app = Router::new().fallback(|| async { "not json" });
        let base = spawn(app).await;
        let client = GeminiClient::new(&config(base), "secret".into(), "sys".into())?;

        assert!(matches!(
            client.generate("hello").await,
            Err(LlmError::MalformedResponse(_))
        ));
        Ok(())
    }
}
