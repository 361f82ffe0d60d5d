//! # folio Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point of the `folio` CLI: the portfolio site server and its FAQ
//! assistant. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Loading layered configuration for the commands that need it
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Serve the built site with the chat API
//! folio serve ./dist
//!
//! # Ask a single question with debug logging
//! folio -vv ask "What are you working on?"
//! ```
//!
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod agent;
mod commands;
mod core;
mod knowledge;
mod llm;
mod prefs;

use crate::core::config;
use crate::core::error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Portfolio site server and FAQ assistant",
    long_about = "Serve a portfolio site with its chat API, ask the FAQ assistant questions,\n\
                  and manage visitor theme and accessibility preferences.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file to use instead of the user and project files.
    #[arg(long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Ask the assistant a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Chat with the assistant in the terminal.
    Chat(commands::chat::ChatArgs),
    /// Show or change theme and accessibility preferences.
    #[command(alias = "p")]
    Prefs(commands::prefs::PrefsArgs),
    /// Inspect or validate knowledge tables.
    #[command(alias = "k")]
    Knowledge(commands::knowledge::KnowledgeArgs),
}

/// Loads configuration for the commands that use it and dispatches.
async fn run(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Serve(args) => {
            commands::serve::handle_serve(args, &config::load_config(config_path)?).await
        }
        Commands::Ask(args) => commands::ask::handle_ask(args, &config::load_config(config_path)?).await,
        Commands::Chat(args) => {
            commands::chat::handle_chat(args, &config::load_config(config_path)?).await
        }
        Commands::Prefs(args) => commands::prefs::handle_prefs(args).await,
        Commands::Knowledge(args) => {
            commands::knowledge::handle_knowledge(args, &config::load_config(config_path)?).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli.command, cli.config.as_deref()).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
