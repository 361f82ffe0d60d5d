//! # folio Knowledge Base
//!
//! File: cli/src/knowledge/mod.rs
//!
//! ## Overview
//!
//! The knowledge base is the fixed, ordered table of keyword sets and
//! answers that the FAQ assistant matches visitor questions against, plus
//! the default answer used when nothing matches. It is built once at
//! startup and shared read-only (usually behind an `Arc`) for the rest of
//! the process.
//!
//! ## Architecture
//!
//! - `builtin`: The designer FAQ table compiled into the binary.
//! - `query`: Boundary validation of visitor text into `NormalizedQuery`.
//! - `matcher`: Scoring and best-answer selection.
//!
//! A custom table can replace the built-in one through the `[knowledge] file`
//! setting. Knowledge files are TOML:
//!
//! ```toml
//! default_answer = "I can only answer questions about my work."
//!
//! [[entries]]
//! keywords = ["contact", "email"]
//! answer = "Email me at work@example.com"
//! ```
//!
//! Keywords are lowercased when the table is built so matching stays
//! case-insensitive however they were authored. Whitespace inside a keyword
//! is significant and left alone.
//!
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info, warn};

mod builtin;
pub mod matcher;
pub mod query;

pub use matcher::Match;
pub use query::NormalizedQuery;

/// One row of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Lowercase fragments; each one found in a message adds a point.
    pub keywords: Vec<String>,
    /// Returned verbatim when this entry wins.
    pub answer: String,
}

impl KnowledgeEntry {
    /// Builds an entry, lowercasing every keyword.
    pub fn new<I, S>(keywords: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            answer: answer.into(),
        }
    }
}

/// Ordered, immutable table of entries plus the default answer.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    default_answer: String,
}

/// On-disk shape of a knowledge file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct KnowledgeFile {
    default_answer: String,
    #[serde(default)]
    entries: Vec<KnowledgeFileEntry>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct KnowledgeFileEntry {
    #[serde(default)]
    keywords: Vec<String>,
    answer: String,
}

impl KnowledgeBase {
    /// Builds a knowledge base from in-memory entries.
    pub fn new(entries: Vec<KnowledgeEntry>, default_answer: impl Into<String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| KnowledgeEntry::new(entry.keywords, entry.answer))
            .collect();
        Self {
            entries,
            default_answer: default_answer.into(),
        }
    }

    /// The designer FAQ table shipped with the binary.
    pub fn builtin() -> Self {
        let entries = builtin::ENTRIES
            .iter()
            .map(|(keywords, answer)| KnowledgeEntry::new(keywords.iter(), *answer))
            .collect();
        Self::new(entries, builtin::DEFAULT_ANSWER)
    }

    /// # Parse Knowledge Table (`from_toml_str`)
    ///
    /// Parses and validates a TOML knowledge table.
    ///
    /// ## Errors
    ///
    /// - The content is not valid TOML or has unknown fields.
    /// - The default answer is blank.
    /// - Any keyword is the empty string (it would match every message).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeFile =
            toml::from_str(content).context("Failed to parse knowledge table")?;

        if file.default_answer.trim().is_empty() {
            return Err(anyhow!(FolioError::Knowledge(
                "default_answer cannot be empty".to_string()
            )));
        }

        let mut entries = Vec::with_capacity(file.entries.len());
        for (index, entry) in file.entries.into_iter().enumerate() {
            if entry.keywords.iter().any(|k| k.is_empty()) {
                return Err(anyhow!(FolioError::Knowledge(format!(
                    "entry {} has an empty keyword; empty keywords would match every message",
                    index + 1
                ))));
            }
            if entry.keywords.is_empty() {
                warn!(
                    "Knowledge entry {} has no keywords and can never be selected.",
                    index + 1
                );
            }
            entries.push(KnowledgeEntry::new(entry.keywords, entry.answer));
        }

        debug!("Parsed knowledge table with {} entries", entries.len());
        Ok(Self::new(entries, file.default_answer))
    }

    /// Reads a knowledge table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading knowledge base from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid knowledge file: {}", path.display()))
    }

    /// Loads the configured table, or the built-in one when none is set.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => {
                debug!("Using built-in knowledge base");
                Ok(Self::builtin())
            }
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Reply used when nothing matches.
    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
