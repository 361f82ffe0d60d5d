//! # Remote Answer Source
//!
//! File: cli/src/agent/remote.rs
//!
//! ## Overview
//!
//! The assistant can try a richer, remote answer source before falling back
//! to the local matcher. The remote side speaks a tiny JSON protocol:
//!
//! ```text
//! POST <endpoint>
//! { "message": "<raw visitor text>" }
//!
//! 2xx  { "reply": "<answer>" }
//! 4xx/5xx  { "error": "<reason>" }
//! ```
//!
//! Any transport failure, timeout, non-2xx status, body over 64 KiB or body
//! without a string `reply` field is a `RemoteError`. Callers never show
//! these to visitors; they only decide that the local matcher answers
//! instead.
//!
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Largest response body read from the endpoint.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Why a remote answer could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("remote answer request failed: {0}")]
    Transport(String),

    #[error("remote answer request timed out")]
    Timeout,

    #[error("remote answer endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("remote answer body is malformed: {0}")]
    MalformedBody(String),
}

/// A source of answers that lives somewhere else, usually behind HTTP.
#[async_trait]
pub trait RemoteAnswerSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Asks the remote source. `message` is passed through untouched.
    async fn ask(&self, message: &str) -> std::result::Result<String, RemoteError>;
}

/// `RemoteAnswerSource` backed by an HTTP endpoint.
pub struct HttpAnswerSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnswerSource {
    /// Builds a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the answer endpoint")?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait]
impl RemoteAnswerSource for HttpAnswerSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn ask(&self, message: &str) -> std::result::Result<String, RemoteError> {
        debug!("Asking remote answer endpoint {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "message": message }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = read_body(response).await?;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_reply(&body)
    }
}

fn transport_error(e: reqwest::Error) -> RemoteError {
    if e.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Transport(e.to_string())
    }
}

/// Reads the body, refusing anything larger than `MAX_BODY_BYTES`.
async fn read_body(mut response: reqwest::Response) -> std::result::Result<String, RemoteError> {
    let too_large = || RemoteError::MalformedBody(format!("body exceeds {} bytes", MAX_BODY_BYTES));
    if response
        .content_length()
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
    {
        return Err(too_large());
    }
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Extracts the `reply` string from a success body.
fn parse_reply(body: &str) -> std::result::Result<String, RemoteError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RemoteError::MalformedBody(format!("not JSON ({})", e)))?;
    match value.get("reply") {
        Some(Value::String(reply)) => Ok(reply.clone()),
        Some(_) => Err(RemoteError::MalformedBody(
            "`reply` is not a string".to_string(),
        )),
        None => Err(RemoteError::MalformedBody(
            "missing `reply` field".to_string(),
        )),
    }
}

/// Pulls `error` out of a failure body, or falls back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    /// Serves `app` on an ephemeral local port and returns its base URL.
    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_parse_reply() {
        assert_eq!(parse_reply(r#"{"reply":"hi"}"#), Ok("hi".to_string()));
        assert!(matches!(
            parse_reply(r#"{"reply":42}"#),
            Err(RemoteError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_reply(r#"{"answer":"hi"}"#),
            Err(RemoteError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_reply("<html>"),
            Err(RemoteError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error":"Message too long"}"#), "Message too long");
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn test_ask_sends_raw_message_and_reads_reply() -> Result<()> {
        let app = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                // Echo the message untouched so the test can see it was not trimmed.
                let message = body["message"].as_str().unwrap_or_default().to_string();
                Json(json!({ "reply": format!("[{}]", message) }))
            }),
        );
        let base = spawn(app).await;
        let source = HttpAnswerSource::new(format!("{}/api/chat", base), Duration::from_secs(5))?;

        let reply = source.ask("  Hello there ").await;
        assert_eq!(reply, Ok("[  Hello there ]".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_non_success_status() -> Result<()> {
        let app = Router::new().route(
            "/api/chat",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "error": "slow down" })),
                )
            }),
        );
        let base = spawn(app).await;
        let source = HttpAnswerSource::new(format!("{}/api/chat", base), Duration::from_secs(5))?;

        let reply = source.ask("hello").await;
        assert_eq!(
            reply,
            Err(RemoteError::Status {
                status: 429,
                message: "slow down".to_string()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_malformed_body() -> Result<()> {
        let app = Router::new().route("/api/chat", post(|| async { Json(json!({ "ok": true })) }));
        let base = spawn(app).await;
        let source = HttpAnswerSource::new(format!("{}/api/chat", base), Duration::from_secs(5))?;

        assert!(matches!(
            source.ask("hello").await,
            Err(RemoteError::MalformedBody(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_rejects_oversized_body() -> Result<()> {
        let app = Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "reply": "x".repeat(MAX_BODY_BYTES) })) }),
        );
        let base = spawn(app).await;
        let source = HttpAnswerSource::new(format!("{}/api/chat", base), Duration::from_secs(5))?;

        match source.ask("hello").await {
            Err(RemoteError::MalformedBody(reason)) => assert!(reason.contains("exceeds")),
            other => panic!("unexpected result {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_unreachable_endpoint() -> Result<()> {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        let source = HttpAnswerSource::new(format!("http://{}/api/chat", addr), Duration::from_secs(2))?;
        let result = source.ask("hello").await;
        assert!(matches!(
            result,
            Err(RemoteError::Transport(_)) | Err(RemoteError::Timeout)
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_ask_timeout() -> Result<()> {
        let app = Router::new().route(
            "/api/chat",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({ "reply": "too late" }))
            }),
        );
        let base = spawn(app).await;
        let source =
            HttpAnswerSource::new(format!("{}/api/chat", base), Duration::from_millis(100))?;

        assert_eq!(source.ask("hello").await, Err(RemoteError::Timeout));
        Ok(())
    }
}
