//! # folio Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level command of the `folio` CLI. Each defines its own
//! clap arguments struct and an async `handle_*` function that `main.rs`
//! dispatches to.
//!
//! ## Commands
//!
//! - `serve`: static site plus chat API
//! - `ask`: one question, one answer
//! - `chat`: interactive conversation in the terminal
//! - `prefs`: theme and accessibility preferences
//! - `knowledge`: inspect and validate knowledge tables
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use std::path::Path;
use std::sync::Arc;

pub mod ask;
pub mod chat;
pub mod knowledge;
pub mod prefs;
pub mod serve;

/// Loads the knowledge base from `flag` if given, else from the configured
/// file, else the built-in table.
pub(crate) fn load_knowledge(flag: Option<&Path>, config: &Config) -> Result<Arc<KnowledgeBase>> {
    let configured = config.knowledge.path();
    let path = flag.or(configured.as_deref());
    Ok(Arc::new(KnowledgeBase::load(path)?))
}
