//! # folio Site Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `folio serve` hosts the built portfolio site and the JSON endpoints its
//! chat widget talks to:
//!
//! - static files with SPA fallback to the index file
//! - `POST /api/chat`, backed by the language model when an API key is set
//! - `POST /api/answer`, backed by the local knowledge base
//! - `GET /api/health`
//!
//! ## Architecture
//!
//! - `config.rs`: `ServeArgs` and `.folio-serve.toml` merging
//! - `chat_api.rs`: the `/api` handlers and their shared `AppState`
//! - `server_logic.rs`: router assembly, port selection, shutdown
//! - `utils.rs`: startup diagnostics
//!
//! ## Examples
//!
//! ```bash
//! # Serve ./dist on port 8000
//! folio serve dist
//!
//! # Listen on all interfaces with a custom knowledge file
//! GEMINI_API_KEY=... folio serve --host 0.0.0.0 --knowledge faq.toml dist
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::llm::{self, GeminiClient, TextGenerator};
use std::sync::Arc;
use tracing::{info, warn};

pub use config::ServeArgs;

pub mod chat_api;
pub mod config;
pub mod server_logic;
pub mod utils;

/// # Handle Serve Command (`handle_serve`)
///
/// Merges the server settings, loads the knowledge base, sets up the
/// language model client if an API key is present, then runs until shutdown.
pub async fn handle_serve(args: ServeArgs, config: &Config) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let server_config = config::load_and_merge_config(&args).await?;
    info!("Effective server config: {:?}", server_config);

    let state = build_state(&args, config)?;
    server_logic::run_server(server_config, state).await
}

fn build_state(args: &ServeArgs, config: &Config) -> Result<chat_api::AppState> {
    let knowledge = super::load_knowledge(args.knowledge.as_deref(), config)?;

    let generator: Option<Arc<dyn TextGenerator>> = match config.llm.api_key() {
        Some(api_key) => {
            let system_prompt = llm::load_system_prompt(&config.llm)?;
            let client = GeminiClient::new(&config.llm, api_key, system_prompt)?;
            info!("Language model enabled: {}", client.url());
            Some(Arc::new(client))
        }
        None => {
            warn!(
                "{} is not set; /api/chat will answer with an error. /api/answer still works.",
                config.llm.api_key_env
            );
            None
        }
    };

    Ok(chat_api::AppState {
        knowledge,
        generator,
        api_key_env: config.llm.api_key_env.clone(),
        max_message_chars: config.llm.max_message_chars,
        fallback_reply: config.llm.fallback_reply.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LlmConfig;
    use crate::knowledge::KnowledgeBase;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_state_without_key() -> Result<()> {
        let config = Config {
            llm: LlmConfig {
                api_key_env: "FOLIO_TEST_KEY_THAT_IS_NEVER_SET".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let args = ServeArgs::parse_from(["serve"]);
        let state = build_state(&args, &config)?;
        assert!(state.generator.is_none());
        assert_eq!(state.knowledge.len(), KnowledgeBase::builtin().len());
        assert_eq!(state.api_key_env, "FOLIO_TEST_KEY_THAT_IS_NEVER_SET");
        Ok(())
    }

    #[test]
    fn test_build_state_with_knowledge_flag() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("faq.toml");
        fs::write(
            &path,
            "default_answer = \"Ask me later.\"\n[[entries]]\nkeywords = [\"tea\"]\nanswer = \"Green.\"\n",
        )?;
        let args = ServeArgs::parse_from(["serve", "--knowledge", path.to_str().unwrap()]);
        let state = build_state(&args, &Config::default())?;
        assert_eq!(state.knowledge.len(), 1);
        assert_eq!(state.knowledge.answer(Some("tea?")), "Green.");
        Ok(())
    }
}
