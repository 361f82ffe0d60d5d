//! # Knowledge Command
//!
//! File: cli/src/commands/knowledge.rs
//!
//! - `folio knowledge list [--file PATH]` prints the active table.
//! - `folio knowledge check PATH` validates a knowledge file and reports
//!   entries that can never win.
//!
use super::load_knowledge;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
pub struct KnowledgeArgs {
    #[command(subcommand)]
    command: KnowledgeCommand,
}

#[derive(Subcommand, Debug)]
enum KnowledgeCommand {
    /// Print every entry of the active knowledge base.
    List {
        /// Knowledge file to list instead of the configured one.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate a knowledge file.
    Check { file: PathBuf },
}

pub async fn handle_knowledge(args: KnowledgeArgs, config: &Config) -> Result<()> {
    match args.command {
        KnowledgeCommand::List { file } => {
            let knowledge = load_knowledge(file.as_deref(), config)?;
            print!("{}", render_table(&knowledge));
        }
        KnowledgeCommand::Check { file } => {
            info!("Checking knowledge file {}", file.display());
            let knowledge = KnowledgeBase::from_file(&file)?;
            println!("{}: {} entries, OK", file.display(), knowledge.len());
            for warning in lint(&knowledge) {
                println!("warning: {}", warning);
            }
        }
    }
    Ok(())
}

const ANSWER_PREVIEW_CHARS: usize = 60;

fn preview(answer: &str) -> String {
    if answer.chars().count() <= ANSWER_PREVIEW_CHARS {
        answer.to_string()
    } else {
        let cut: String = answer.chars().take(ANSWER_PREVIEW_CHARS - 3).collect();
        format!("{}...", cut)
    }
}

fn render_table(knowledge: &KnowledgeBase) -> String {
    let mut out = String::new();
    for (index, entry) in knowledge.entries().iter().enumerate() {
        let keywords: Vec<String> = entry.keywords.iter().map(|k| format!("{:?}", k)).collect();
        out.push_str(&format!(
            "{:>3}. [{}]\n     {}\n",
            index + 1,
            keywords.join(", "),
            preview(&entry.answer)
        ));
    }
    out.push_str(&format!(
        "default: {}\n{} entries\n",
        preview(knowledge.default_answer()),
        knowledge.len()
    ));
    out
}

/// Things that load fine but are probably mistakes.
fn lint(knowledge: &KnowledgeBase) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut owners: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

    for (index, entry) in knowledge.entries().iter().enumerate() {
        if entry.keywords.is_empty() {
            warnings.push(format!("entry {} has no keywords and never matches", index + 1));
        }
        for keyword in &entry.keywords {
            owners.entry(keyword.as_str()).or_default().push(index + 1);
        }
    }

    for (keyword, entries) in owners {
        if entries.len() > 1 {
            let list: Vec<String> = entries.iter().map(usize::to_string).collect();
            warnings.push(format!(
                "keyword {:?} appears in entries {}; on equal scores the last one wins",
                keyword,
                list.join(", ")
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeEntry;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("short"), "short");
        let long = "é".repeat(80);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), ANSWER_PREVIEW_CHARS);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_render_table() {
        let knowledge = KnowledgeBase::new(
            vec![KnowledgeEntry::new(["hi ", "Hello"], "Hey there.")],
            "No idea.",
        );
        let table = render_table(&knowledge);
        assert!(table.contains("  1. [\"hi \", \"hello\"]"));
        assert!(table.contains("Hey there."));
        assert!(table.contains("default: No idea."));
        assert!(table.ends_with("1 entries\n"));
    }

    #[test]
    fn test_lint() {
        let knowledge = KnowledgeBase::new(
            vec![
                KnowledgeEntry::new(["work"], "a"),
                KnowledgeEntry::new(Vec::<String>::new(), "b"),
                KnowledgeEntry::new(["work", "ecosia"], "c"),
            ],
            "d",
        );
        let warnings = lint(&knowledge);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("entry 2 has no keywords"));
        assert!(warnings[1].contains("\"work\" appears in entries 1, 3"));
    }

    #[test]
    fn test_builtin_has_no_keywordless_entries() {
        let warnings = lint(&KnowledgeBase::builtin());
        assert!(warnings.iter().all(|w| !w.contains("no keywords")));
    }

    #[tokio::test]
    async fn test_check_rejects_invalid_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            "default_answer = \"x\"\n[[entries]]\nkeywords = [\"\"]\nanswer = \"y\"\n",
        )?;
        let args = KnowledgeArgs::try_parse_from(["knowledge", "check", path.to_str().unwrap()])?;
        assert!(handle_knowledge(args, &Config::default()).await.is_err());
        Ok(())
    }
}
