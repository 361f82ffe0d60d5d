//! # Question Matcher
//!
//! File: cli/src/knowledge/matcher.rs
//!
//! ## Overview
//!
//! Maps visitor text to exactly one answer from a `KnowledgeBase`.
//!
//! Each entry scores one point per keyword that occurs anywhere in the
//! normalized message (plain substring containment, so `"berlin"` also
//! matches inside a longer token while `"hi "` needs its trailing space).
//! An entry takes over as the best match when its score is positive and
//! greater than *or equal to* the best score so far. Among entries tied on
//! the top score, the one declared last wins. Knowledge tables are authored
//! with this in mind: more specific entries sit after general ones.
//!
//! When nothing scores, or the input is not usable text, the default answer
//! is returned. Matching never fails, performs no I/O and only reads the
//! immutable table, so it can be called from any number of request handlers
//! at once.
//!
use super::query::NormalizedQuery;
use super::{KnowledgeBase, KnowledgeEntry};
use serde_json::Value;
use tracing::trace;

/// The winning entry for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Position of the entry in declaration order.
    pub index: usize,
    /// Number of the entry's keywords found in the query.
    pub score: usize,
}

impl KnowledgeEntry {
    /// Counts the keywords of this entry contained in the query.
    pub fn score(&self, query: &NormalizedQuery) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| query.contains(keyword))
            .count()
    }
}

impl KnowledgeBase {
    /// # Best Match (`best_match`)
    ///
    /// Scans the entries in declaration order and returns the winning entry,
    /// or `None` when no entry scores above zero.
    pub fn best_match(&self, query: &NormalizedQuery) -> Option<Match> {
        let mut best: Option<Match> = None;
        let mut best_score = 0;

        for (index, entry) in self.entries().iter().enumerate() {
            let score = entry.score(query);
            // `>=` so that later entries win ties.
            if score > 0 && score >= best_score {
                best_score = score;
                best = Some(Match { index, score });
            }
        }

        trace!(query = query.as_str(), ?best, "matched query");
        best
    }

    /// Answer for an already normalized query.
    pub fn answer_query(&self, query: &NormalizedQuery) -> &str {
        match self.best_match(query) {
            Some(found) => &self.entries()[found.index].answer,
            None => self.default_answer(),
        }
    }

    /// # Answer (`answer`)
    ///
    /// Returns the best answer for raw visitor text. Absent or blank input
    /// yields the default answer without consulting the entries.
    pub fn answer(&self, message: Option<&str>) -> &str {
        match NormalizedQuery::parse(message) {
            Some(query) => self.answer_query(&query),
            None => self.default_answer(),
        }
    }

    /// Same as [`KnowledgeBase::answer`] for loosely typed input. Non-string
    /// values get the default answer.
    pub fn answer_value(&self, message: &Value) -> &str {
        match NormalizedQuery::from_json(message) {
            Some(query) => self.answer_query(&query),
            None => self.default_answer(),
        }
    }
}
