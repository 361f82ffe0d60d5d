//! # folio Language-Model Collaborator
//!
//! File: cli/src/llm/mod.rs
//!
//! ## Overview
//!
//! `/api/chat` forwards visitor messages to a hosted language model. This
//! module defines the narrow seam the server talks to (`TextGenerator`) and
//! the Gemini implementation behind it. Prompt content lives outside the
//! code: a configured file, or a short neutral instruction by default.
//!
//! ## Architecture
//!
//! - `TextGenerator`: async trait, one user message in, one reply out.
//! - `LlmError`: transport, API and response-shape failures. `status()` maps
//!   a failure onto the HTTP status `/api/chat` should answer with.
//! - `gemini`: `GeminiClient`, a reqwest client for `generateContent`.
//!
use crate::core::config::LlmConfig;
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs;
use thiserror::Error;
use tracing::debug;

pub mod gemini;

pub use gemini::GeminiClient;

/// Used when no `system_prompt_file` is configured.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You answer questions from visitors of a product designer's \
portfolio website, in the first person, briefly and politely. If you do not know something, \
suggest getting in touch by email.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    #[error("language model request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("language model response is malformed: {0}")]
    MalformedResponse(String),
}

impl LlmError {
    /// HTTP status to surface: 429 when the provider rate-limited us, 500
    /// for everything else.
    pub fn status(&self) -> u16 {
        match self {
            LlmError::Api { status: 429, .. } => 429,
            _ => 500,
        }
    }
}

/// Generates a reply for a single visitor message.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, user_text: &str) -> std::result::Result<String, LlmError>;
}

/// Reads the configured system prompt, or returns the default one.
pub fn load_system_prompt(config: &LlmConfig) -> Result<String> {
    match &config.system_prompt_file {
        Some(path) => {
            debug!("Reading system prompt from {}", path);
            let prompt = fs::read_to_string(path)
                .with_context(|| format!("Failed to read system prompt file: {}", path))?;
            Ok(prompt.trim().to_string())
        }
        None => Ok(DEFAULT_SYSTEM_PROMPT.to_string()),
    }
}
