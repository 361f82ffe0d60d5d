//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! An interactive conversation with the assistant in the terminal, the way
//! the site's chat bar behaves:
//!
//! - Blank lines are ignored.
//! - After a question a "thinking" indicator is shown, and the reply appears
//!   no sooner than the configured delay (2 s by default), however fast the
//!   answer was found.
//! - `bye`, `exit`, `quit` or end of input ends the session.
//!
use super::load_knowledge;
use crate::agent::Assistant;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Remote answer endpoint, tried before the knowledge base.
    #[arg(long, env = "FOLIO_ANSWER_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Only use the local knowledge base.
    #[arg(long)]
    pub local: bool,

    /// Show replies immediately instead of after the thinking delay.
    #[arg(long)]
    pub no_delay: bool,

    /// Name shown in front of replies.
    #[arg(long, default_value = "Timea")]
    pub name: String,

    /// Knowledge file (TOML) to use instead of the configured one.
    #[arg(long)]
    pub knowledge: Option<PathBuf>,
}

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command");
    let knowledge = load_knowledge(args.knowledge.as_deref(), config)?;
    let assistant = if args.local {
        Assistant::local(knowledge)
    } else {
        Assistant::from_config(&config.agent, args.endpoint.as_deref(), knowledge)?
    };
    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        config.agent.thinking_delay()
    };

    println!(
        "Chat with {}! Ask about experience, work or how to get in touch. Type 'bye' to quit.",
        args.name
    );
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&assistant, stdin, &mut stdout, &args.name, delay).await
}

/// Runs the conversation loop over any line source and writer.
async fn run_session<R, W>(
    assistant: &Assistant,
    input: R,
    out: &mut W,
    name: &str,
    delay: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "You: ").context("Failed to write prompt")?;
        out.flush().context("Failed to flush output")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            writeln!(out).context("Failed to write output")?;
            break;
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if EXIT_WORDS.iter().any(|word| text.eq_ignore_ascii_case(word)) {
            writeln!(out, "{}: Goodbye!", name).context("Failed to write output")?;
            break;
        }

        write!(out, "{} is thinking...", name).context("Failed to write output")?;
        out.flush().context("Failed to flush output")?;

        let (reply, _) = tokio::join!(assistant.reply(text), tokio::time::sleep(delay));
        debug!("Reply from {} source", reply.source);

        writeln!(out, "\r{}: {}", name, reply.text).context("Failed to write output")?;
    }
    Ok(())
}
