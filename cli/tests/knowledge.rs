//! # folio Knowledge Integration Tests
//!
//! File: cli/tests/knowledge.rs
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_knowledge_list_builtin() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    folio_cmd()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "knowledge", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("  1. [")
                .and(predicate::str::contains("\"ecosia\""))
                .and(predicate::str::contains("default: ")),
        );
}

#[test]
fn test_knowledge_list_custom_file() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let knowledge = write_knowledge(dir.path());
    folio_cmd()
        .current_dir(dir.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "knowledge",
            "list",
            "--file",
            knowledge.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[\"tea\"]").and(predicate::str::contains("1 entries")));
}

#[test]
fn test_knowledge_check_valid_file() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let knowledge = write_knowledge(dir.path());
    folio_cmd()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "knowledge", "check", knowledge.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries, OK"));
}

#[test]
fn test_knowledge_check_reports_shared_keywords() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let path = dir.path().join("shared.toml");
    fs::write(
        &path,
        r#"default_answer = "?"

[[entries]]
keywords = ["work"]
answer = "General."

[[entries]]
keywords = ["work", "ecosia"]
answer = "Specific."
"#,
    )
    .unwrap();
    folio_cmd()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "knowledge", "check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: keyword \"work\" appears in entries 1, 2"));
}

#[test]
fn test_knowledge_check_rejects_empty_keyword() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    let path = dir.path().join("bad.toml");
    fs::write(
        &path,
        "default_answer = \"?\"\n[[entries]]\nkeywords = [\"\"]\nanswer = \"Everything.\"\n",
    )
    .unwrap();
    folio_cmd()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "knowledge", "check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty keyword"));
}

#[test]
fn test_knowledge_check_missing_file() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "");
    folio_cmd()
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "knowledge", "check", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read knowledge file"));
}
