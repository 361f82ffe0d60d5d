//! # folio FAQ Assistant
//!
//! File: cli/src/agent/mod.rs
//!
//! ## Overview
//!
//! The assistant answers visitor questions. It may ask a remote answer
//! endpoint first (for example the site's own `/api/chat`, which is backed by
//! a language model) and falls back to the local keyword matcher whenever
//! that fails or is not configured.
//!
//! ## Architecture
//!
//! - `remote`: `RemoteAnswerSource` trait, `RemoteError`, and the reqwest-based
//!   `HttpAnswerSource`.
//! - `assistant`: `Assistant`, which chains the remote source and the local
//!   knowledge base, and the `Reply` it produces.
//!
pub mod assistant;
pub mod remote;

pub use assistant::{Assistant, Reply, ReplySource};
pub use remote::{HttpAnswerSource, RemoteAnswerSource, RemoteError};
