//! # Normalized Visitor Queries
//!
//! File: cli/src/knowledge/query.rs
//!
//! Visitor text arrives from a text box, a CLI argument or an untyped JSON
//! body. It is validated here, once, into a `NormalizedQuery`: trimmed and
//! lowercased. Absent, non-string and blank input never becomes a query, so
//! the matcher only ever sees well-formed values.
//!
use serde_json::Value;

/// Trimmed, lowercased visitor text. Guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    /// Normalizes an optional message. Returns `None` for absent input and
    /// for input that is empty after trimming.
    pub fn parse(message: Option<&str>) -> Option<Self> {
        let trimmed = message?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Normalizes a loosely typed value, such as the `message` field of a
    /// JSON body. Anything other than a JSON string is rejected.
    pub fn from_json(value: &Value) -> Option<Self> {
        Self::parse(value.as_str())
    }

    /// The normalized text used for keyword containment tests.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against the normalized text.
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }
}
