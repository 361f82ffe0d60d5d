//! # folio Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Shared infrastructure used by every command:
//! - `config`: layered TOML configuration, merging and validation
//! - `error`: the `FolioError` enum and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config::{self, Config};
//! use crate::core::error::{FolioError, Result};
//! ```
//!
pub mod config;
pub mod error;
