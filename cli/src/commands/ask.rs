//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! `folio ask <QUESTION>` prints one answer. The remote answer endpoint is
//! tried first when configured (`--endpoint`, `FOLIO_ANSWER_ENDPOINT` or
//! `agent.endpoint`); the local knowledge base answers otherwise.
//!
//! ```bash
//! folio ask "How can I contact you?"
//! folio ask --local --explain where are you based
//! ```
//!
use super::load_knowledge;
use crate::agent::Assistant;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::knowledge::{KnowledgeBase, NormalizedQuery};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Remote answer endpoint, tried before the knowledge base.
    #[arg(long, env = "FOLIO_ANSWER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Only use the local knowledge base.
    #[arg(long)]
    pub local: bool,

    /// Also print which knowledge entry matched and why.
    #[arg(long)]
    pub explain: bool,

    /// Knowledge file (TOML) to use instead of the configured one.
    #[arg(long)]
    pub knowledge: Option<PathBuf>,
}

pub async fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let question = args.question.join(" ");
    info!("Handling ask command: {:?}", question);

    let knowledge = load_knowledge(args.knowledge.as_deref(), config)?;
    let assistant = if args.local {
        Assistant::local(knowledge)
    } else {
        Assistant::from_config(&config.agent, args.endpoint.as_deref(), knowledge)?
    };

    let reply = assistant.reply(&question).await;
    println!("{}", reply.text);

    if args.explain {
        println!();
        println!("source: {}", reply.source);
        println!("{}", explain(assistant.knowledge(), &question));
    }
    Ok(())
}

/// Describes how the local matcher treats `question`.
fn explain(knowledge: &KnowledgeBase, question: &str) -> String {
    let Some(query) = NormalizedQuery::parse(Some(question)) else {
        return "local match: blank question, default answer".to_string();
    };
    match knowledge.best_match(&query) {
        Some(found) => {
            let entry = &knowledge.entries()[found.index];
            let hits: Vec<&str> = entry
                .keywords
                .iter()
                .filter(|keyword| query.contains(keyword))
                .map(String::as_str)
                .collect();
            format!(
                "local match: entry #{} with score {} (keywords: {})",
                found.index + 1,
                found.score,
                hits.join(", ")
            )
        }
        None => "local match: no keyword found, default answer".to_string(),
    }
}
