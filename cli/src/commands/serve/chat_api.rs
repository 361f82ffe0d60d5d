//! # Chat API Handlers
//!
//! File: cli/src/commands/serve/chat_api.rs
//!
//! ## Overview
//!
//! JSON endpoints mounted under `/api` next to the static site:
//!
//! | Route | Behavior |
//! |---|---|
//! | `POST /api/chat` | Forwards the visitor message to the language model. |
//! | `POST /api/answer` | Answers from the local knowledge base. Always 200. |
//! | `GET /api/health` | Liveness plus a summary of what is configured. |
//!
//! `/api/chat` and `/api/answer` carry their own CORS headers
//! (`Access-Control-Allow-Origin: *`, methods `POST, OPTIONS`, header
//! `Content-Type`) on every response, including errors and the empty `OPTIONS`
//! reply. Other methods on `/api/chat` get a 405 JSON error.
//!
//! ## `/api/chat` validation order
//!
//! 1. No generator configured: 500 `"<KEY_ENV> not configured"`.
//! 2. Body is not JSON: 400 `"Invalid JSON body"`.
//! 3. `message` missing, empty or not a string: 400.
//! 4. Trimmed message empty: 400 `"Message cannot be empty"`.
//! 5. Trimmed message longer than the limit (in characters): 400 `"Message too long"`.
//!
use crate::knowledge::KnowledgeBase;
use crate::llm::TextGenerator;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error};

/// Shared, read-only state for the API handlers.
#[derive(Clone)]
pub struct AppState {
    pub knowledge: Arc<KnowledgeBase>,
    pub generator: Option<Arc<dyn TextGenerator>>,
    /// Name of the environment variable that holds the API key, for the
    /// "not configured" message.
    pub api_key_env: String,
    pub max_message_chars: usize,
    pub fallback_reply: String,
}

const CORS_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(chat).options(preflight).fallback(method_not_allowed),
        )
        .route(
            "/api/answer",
            post(answer).options(preflight).fallback(method_not_allowed),
        )
        .route("/api/health", get(health))
        .with_state(state)
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, CORS_HEADERS, Json(body)).into_response()
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    json_response(status, json!({ "error": message.into() }))
}

async fn preflight() -> Response {
    (StatusCode::OK, CORS_HEADERS).into_response()
}

async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Parses a request body. An empty body counts as an empty JSON value so it
/// is reported as a missing `message`.
fn parse_body(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Some(Value::Null);
    }
    serde_json::from_slice(body).ok()
}

async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let Some(generator) = state.generator.clone() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{} not configured", state.api_key_env),
        );
    };

    let Some(value) = parse_body(&body) else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };

    let message = match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message,
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Body must include \"message\" (string)",
            )
        }
    };

    let text = message.trim();
    if text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Message cannot be empty");
    }
    if text.chars().count() > state.max_message_chars {
        return error_response(StatusCode::BAD_REQUEST, "Message too long");
    }

    match generator.generate(text).await {
        Ok(reply) => {
            let reply = if reply.trim().is_empty() {
                debug!("Language model returned an empty reply, using fallback");
                state.fallback_reply.clone()
            } else {
                reply
            };
            json_response(StatusCode::OK, json!({ "reply": reply }))
        }
        Err(e) => {
            error!("Language model error: {}", e);
            let status =
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, e.to_string())
        }
    }
}

async fn answer(State(state): State<AppState>, body: Bytes) -> Response {
    let value = parse_body(&body).unwrap_or(Value::Null);
    let message = value.get("message").cloned().unwrap_or(Value::Null);
    let reply = state.knowledge.answer_value(&message);
    json_response(StatusCode::OK, json!({ "reply": reply }))
}

async fn health(State(state): State<AppState>) -> Response {
    Json(json!({
        "status": "ok",
        "entries": state.knowledge.len(),
        "llm": state.generator.is_some(),
    }))
    .into_response()
}
