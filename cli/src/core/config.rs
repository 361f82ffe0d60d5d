//! # folio Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements loading, merging, validation and access to the
//! folio configuration. Settings cover the assistant's remote answer
//! endpoint, the language-model collaborator behind `/api/chat`, and the
//! knowledge table used by the local matcher.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file passed with `--config` / `FOLIO_CONFIG` (replaces 2 and 3)
//! 2. Project-specific `.folio.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! Project and user files are merged table by table, so a project file only
//! needs the keys it changes. Paths are `~`-expanded, and relative paths
//! are resolved against the directory of the file that sets them, so a
//! `.folio.toml` found in an ancestor works from any subdirectory. The
//! result is validated before use. Environment overrides (`FOLIO_ANSWER_ENDPOINT`)
//! and command-line flags are applied by the commands on top of this.
//!
//! ## Examples
//!
//! ```toml
//! [agent]
//! endpoint = "https://example.com/api/chat"
//! timeout_ms = 5000
//! thinking_delay_ms = 1500
//!
//! [llm]
//! model = "gemini-1.5-flash"
//! temperature = 0.7
//! system_prompt_file = "~/.config/folio/prompt.txt"
//!
//! [knowledge]
//! file = "faq.toml"
//! ```
//!
//! The configuration is loaded once per command execution and passed to the
//! modules that need it.
//!
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Name of the project configuration file searched for in the current
/// directory and its ancestors.
const PROJECT_CONFIG_FILENAME: &str = ".folio.toml";

/// `(section, key)` pairs holding file paths.
const PATH_KEYS: [(&str, &str); 2] = [("knowledge", "file"), ("llm", "system_prompt_file")];

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Settings for the assistant used by `folio ask` and `folio chat`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Remote answer endpoint (`POST { message }` -> `{ reply }`). When unset,
    /// every question is answered by the local matcher.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout for the remote endpoint, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Delay before a reply is shown in `folio chat`, in milliseconds.
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

/// Settings for the language-model collaborator behind `/api/chat`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// File with the system instruction sent to the model (can use ~).
    #[serde(default)]
    pub system_prompt_file: Option<String>,
    /// Longest accepted visitor message, counted in characters after trimming.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
    /// Sent when the model returns an empty reply.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

/// Knowledge table selection.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Custom knowledge file (can use ~). The built-in table is used when unset.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_timeout_ms() -> u64 {
    8000
}
fn default_thinking_delay_ms() -> u64 {
    2000
}
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}
fn default_max_output_tokens() -> u32 {
    400
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_message_chars() -> usize {
    2000
}
fn default_fallback_reply() -> String {
    "I'm not sure how to answer that. Please email me at work@timea.cc!".to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_ms: default_timeout_ms(),
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_llm_base_url(),
            api_key_env: default_api_key_env(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            system_prompt_file: None,
            max_message_chars: default_max_message_chars(),
            fallback_reply: default_fallback_reply(),
        }
    }
}

impl AgentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl LlmConfig {
    /// Reads the API key from the configured environment variable.
    /// Blank values count as missing.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl KnowledgeConfig {
    pub fn path(&self) -> Option<PathBuf> {
        self.file.as_ref().map(PathBuf::from)
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads, merges, expands and validates the configuration.
///
/// ## Arguments
///
/// * `explicit`: A file given with `--config`. When present, user and
///   project files are not consulted.
///
/// ## Errors
///
/// Returns an error if a configuration file cannot be read or parsed, or if
/// the merged configuration fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    load_config_from(explicit, &current_dir)
}

/// `load_config` with the project file search starting at `start_dir`.
fn load_config_from(explicit: Option<&Path>, start_dir: &Path) -> Result<Config> {
    let merged = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            read_table(path)?
        }
        None => {
            let mut table = load_user_table()?.unwrap_or_default();
            if let Some(project) = load_project_table(start_dir)? {
                merge_tables(&mut table, project);
            }
            table
        }
    };

    let config: Config = toml::Value::Table(merged)
        .try_into()
        .context("Failed to interpret configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_table() -> Result<Option<toml::Table>> {
    if let Some(proj_dirs) = ProjectDirs::from("dev", "folio", "folio") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            read_table(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_table(start_dir: &Path) -> Result<Option<toml::Table>> {
    match find_project_config_path(start_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            read_table(&path).map(Some)
        }
        None => {
            debug!("No project configuration file (.folio.toml) found in current directory or ancestors.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.folio.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads one configuration file and resolves its path settings against the
/// file's own directory.
fn read_table(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut table = toml::from_str::<toml::Table>(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    resolve_table_paths(&mut table, base_dir);
    Ok(table)
}

/// Overlays `overlay` onto `base`. Nested tables merge key by key; any other
/// value in `overlay` replaces the one in `base`.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(overlay_inner) => {
                if let Some(toml::Value::Table(base_inner)) = base.get_mut(&key) {
                    merge_tables(base_inner, overlay_inner);
                } else {
                    base.insert(key, toml::Value::Table(overlay_inner));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Expands `~` in path settings, then joins relative ones onto `base_dir`.
/// Values of the wrong type are left for deserialization to reject.
fn resolve_table_paths(table: &mut toml::Table, base_dir: &Path) {
    for (section, key) in PATH_KEYS {
        let Some(toml::Value::String(value)) = table
            .get_mut(section)
            .and_then(toml::Value::as_table_mut)
            .and_then(|section| section.get_mut(key))
        else {
            continue;
        };
        let expanded = PathBuf::from(shellexpand::tilde(value.as_str()).into_owned());
        let resolved = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *value = resolved.to_string_lossy().into_owned();
        debug!("Resolved {}.{} to {}", section, key, value);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    if let Some(endpoint) = &config.agent.endpoint {
        validate_endpoint(endpoint)?;
    }
    if config.agent.timeout_ms == 0 {
        return Err(anyhow!(FolioError::Config(
            "agent.timeout_ms must be greater than zero.".to_string()
        )));
    }
    if !(0.0..=2.0).contains(&config.llm.temperature) {
        return Err(anyhow!(FolioError::Config(format!(
            "llm.temperature must be between 0 and 2, got {}.",
            config.llm.temperature
        ))));
    }
    if config.llm.max_message_chars == 0 {
        return Err(anyhow!(FolioError::Config(
            "llm.max_message_chars must be greater than zero.".to_string()
        )));
    }
    if config.llm.max_output_tokens == 0 {
        return Err(anyhow!(FolioError::Config(
            "llm.max_output_tokens must be greater than zero.".to_string()
        )));
    }
    if config.llm.api_key_env.trim().is_empty() {
        return Err(anyhow!(FolioError::Config(
            "llm.api_key_env cannot be empty.".to_string()
        )));
    }
    if let Some(file) = &config.knowledge.file {
        if !Path::new(file).is_file() {
            warn!("Configured knowledge file '{}' does not exist.", file);
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}

/// Checks that an endpoint is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!(FolioError::Config(format!(
            "Invalid answer endpoint '{}'. Expected an http:// or https:// URL.",
            endpoint
        ))))
    }
}
