//! # folio Integration Test Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests. Every command built here runs
//! with the folio environment variables cleared, so results do not depend on
//! the developer's shell.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

const FOLIO_ENV: [&str; 5] = [
    "FOLIO_CONFIG",
    "FOLIO_ANSWER_ENDPOINT",
    "FOLIO_PREFS_FILE",
    "GEMINI_API_KEY",
    "RUST_LOG",
];

/// Path of the compiled `folio` binary.
pub fn folio_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("folio")
}

/// A `folio` command with a clean environment.
pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("Failed to find folio binary for testing");
    for var in FOLIO_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Writes `content` as `folio.toml` in `dir` and returns its path, for use
/// with `--config` so user and project files are ignored.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("folio.toml");
    fs::write(&path, content).expect("Failed to write test config");
    path
}

/// A minimal knowledge file with one entry.
pub fn write_knowledge(dir: &Path) -> PathBuf {
    let path = dir.join("faq.toml");
    fs::write(
        &path,
        r#"default_answer = "Try asking about tea."

[[entries]]
keywords = ["tea"]
answer = "Green tea, always."
"#,
    )
    .expect("Failed to write test knowledge file");
    path
}
