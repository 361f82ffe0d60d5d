//! # folio Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types shared across the folio application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FolioError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Knowledge base loading errors
//! - Preference store errors
//! - Server startup errors
//!
//! The question matcher and the assistant's reply path never produce errors;
//! everything that can go wrong there is absorbed into the default answer.
//! The remote answer source and the LLM client carry their own error enums
//! (`agent::RemoteError`, `llm::LlmError`) because callers branch on them.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if keyword.is_empty() {
//!     return Err(FolioError::Knowledge(format!("entry {} has an empty keyword", index)))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the folio application.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Knowledge base error: {0}")]
    Knowledge(String),

    #[error("Preference store error: {0}")]
    PreferenceStore(String),

    #[error("Unknown theme '{id}'. Available themes: {available}")]
    UnknownTheme { id: String, available: String },

    #[error("Server error: {0}")]
    Server(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
