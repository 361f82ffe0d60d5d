//! # Serve Command Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Settings for `folio serve` come from two places:
//!
//! 1. Command-line arguments (`ServeArgs`).
//! 2. An optional `.folio-serve.toml` in the directory given on the command
//!    line.
//!
//! A CLI value wins whenever it differs from its default; otherwise the file
//! value is used. `directory` in the file is resolved relative to the file.
//!
//! ```toml
//! port = 9000
//! host = "0.0.0.0"
//! directory = "dist"
//! enable_cors = true
//! index_file = "index.html"
//! spa_fallback = true
//! ```
//!
use crate::core::error::{FolioError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = ".folio-serve.toml";

/// Serve the built portfolio site and its chat API.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Directory containing the built site.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Do not send CORS headers for static files.
    #[arg(long)]
    pub no_cors: bool,

    /// Answer unknown paths with 404 instead of the index file.
    #[arg(long)]
    pub no_spa: bool,

    #[arg(long, short, default_value = "index.html")]
    pub index: String,

    /// Knowledge file for `/api/answer` (TOML). Defaults to the configured one.
    #[arg(long)]
    pub knowledge: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub directory: PathBuf,
    pub enable_cors: bool,
    pub index_file: String,
    pub spa_fallback: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            directory: PathBuf::from("."),
            enable_cors: true,
            index_file: "index.html".to_string(),
            spa_fallback: true,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    host: Option<String>,
    directory: Option<String>,
    enable_cors: Option<bool>,
    index_file: Option<String>,
    spa_fallback: Option<bool>,
}

/// # Load and Merge Configuration (`load_and_merge_config`)
///
/// Builds the effective `ServerConfig` from `args` and the optional
/// `.folio-serve.toml`, then canonicalizes the served directory.
pub async fn load_and_merge_config(args: &ServeArgs) -> Result<ServerConfig> {
    let mut effective = ServerConfig::from_args(args);
    let cli_defaults = ServeArgs::parse_from(["serve"]);

    let search_dir = if args.directory.is_absolute() {
        args.directory.clone()
    } else {
        env::current_dir()
            .context("Failed to get current working directory")?
            .join(&args.directory)
    };
    debug!("Looking for {} in {}", CONFIG_FILE_NAME, search_dir.display());

    if let Some(file) = load_config_from_dir(&search_dir)? {
        if args.port == cli_defaults.port {
            effective.port = file.port;
        }
        if args.host == cli_defaults.host {
            effective.host = file.host;
        }
        if args.index == cli_defaults.index {
            effective.index_file = file.index_file;
        }
        if !args.no_cors {
            effective.enable_cors = file.enable_cors;
        }
        if !args.no_spa {
            effective.spa_fallback = file.spa_fallback;
        }
        effective.directory = file.directory;
    } else {
        debug!("No {} found; using arguments only.", CONFIG_FILE_NAME);
    }

    effective.resolve_directory().await?;
    Ok(effective)
}

fn load_config_from_dir(search_dir: &Path) -> Result<Option<ServerConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(None);
    }
    info!("Loading server settings from {}", config_path.display());

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let file: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    let defaults = ServerConfig::default();

    let host = match file.host {
        Some(ref host) => host.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host '{}' in {} ({}), using {}",
                host,
                config_path.display(),
                e,
                defaults.host
            );
            defaults.host
        }),
        None => defaults.host,
    };

    let mut directory = PathBuf::from(file.directory.as_deref().unwrap_or("."));
    if directory.is_relative() {
        directory = search_dir.join(directory);
    }

    Ok(Some(ServerConfig {
        port: file.port.unwrap_or(defaults.port),
        host,
        directory,
        enable_cors: file.enable_cors.unwrap_or(defaults.enable_cors),
        index_file: file.index_file.unwrap_or(defaults.index_file),
        spa_fallback: file.spa_fallback.unwrap_or(defaults.spa_fallback),
    }))
}

impl ServerConfig {
    fn from_args(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            directory: args.directory.clone(),
            enable_cors: !args.no_cors,
            index_file: args.index.clone(),
            spa_fallback: !args.no_spa,
        }
    }

    /// Makes `directory` absolute and canonical; it must exist and be a
    /// directory.
    async fn resolve_directory(&mut self) -> Result<()> {
        let absolute = if self.directory.is_absolute() {
            self.directory.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(&self.directory)
        };

        let canonical = tokio::fs::canonicalize(&absolute).await.map_err(|e| {
            FolioError::Server(format!(
                "Directory '{}' could not be found or accessed: {}",
                absolute.display(),
                e
            ))
        })?;
        let metadata = tokio::fs::metadata(&canonical)
            .await
            .with_context(|| format!("Failed to get metadata for '{}'", canonical.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!(FolioError::Server(format!(
                "Path is not a directory: {}",
                canonical.display()
            )));
        }
        debug!("Serving directory resolved to {}", canonical.display());
        self.directory = canonical;
        Ok(())
    }

    pub fn index_path(&self) -> PathBuf {
        self.directory.join(&self.index_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(directory: PathBuf) -> ServeArgs {
        ServeArgs {
            directory,
            port: 8000,
            host: Ipv4Addr::LOCALHOST.into(),
            no_cors: false,
            no_spa: false,
            index: "index.html".into(),
            knowledge: None,
        }
    }

    #[test]
    fn test_cli_defaults_match_config_defaults() {
        let parsed = ServeArgs::parse_from(["serve"]);
        assert_eq!(ServerConfig::from_args(&parsed), ServerConfig::default());
    }

    #[test]
    fn test_from_args_inverts_flags() {
        let mut a = args(PathBuf::from("/srv/site"));
        a.no_cors = true;
        a.no_spa = true;
        let config = ServerConfig::from_args(&a);
        assert!(!config.enable_cors);
        assert!(!config.spa_fallback);
        assert_eq!(config.directory, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_load_config_from_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(load_config_from_dir(temp_dir.path())?.is_none());

        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
            port = 9090
            host = "0.0.0.0"
            directory = "dist"
            enable_cors = false
            index_file = "home.html"
            spa_fallback = false
            "#,
        )?;
        let config = load_config_from_dir(temp_dir.path())?.unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.directory, temp_dir.path().join("dist"));
        assert!(!config.enable_cors);
        assert_eq!(config.index_file, "home.html");
        assert!(!config.spa_fallback);
        Ok(())
    }

    #[test]
    fn test_load_config_invalid_host_falls_back() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "host = \"nope\"\n")?;
        let config = load_config_from_dir(temp_dir.path())?.unwrap();
        assert_eq!(config.host, ServerConfig::default().host);
        assert_eq!(config.directory, temp_dir.path().join("."));
        Ok(())
    }

    #[test]
    fn test_load_config_rejects_unknown_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "show_hidden = true\n")?;
        assert!(load_config_from_dir(temp_dir.path()).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_merge_file_values_used_for_default_args() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let site = temp_dir.path().join("dist");
        fs::create_dir(&site)?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "port = 9090\ndirectory = \"dist\"\nspa_fallback = false\n",
        )?;

        let config = load_and_merge_config(&args(temp_dir.path().to_path_buf())).await?;
        assert_eq!(config.port, 9090);
        assert!(!config.spa_fallback);
        assert!(config.enable_cors);
        assert_eq!(config.directory, fs::canonicalize(&site)?);
        Ok(())
    }

    #[tokio::test]
    async fn test_merge_cli_overrides_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "port = 9090\nindex_file = \"home.html\"\nenable_cors = true\n",
        )?;

        let mut a = args(temp_dir.path().to_path_buf());
        a.port = 9999;
        a.index = "main.html".into();
        a.no_cors = true;
        let config = load_and_merge_config(&a).await?;
        assert_eq!(config.port, 9999);
        assert_eq!(config.index_file, "main.html");
        assert!(!config.enable_cors);
        assert_eq!(config.index_path(), fs::canonicalize(temp_dir.path())?.join("main.html"));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_directory_errors() -> Result<()> {
        let mut missing = ServerConfig {
            directory: PathBuf::from("/path/that/definitely/does/not/exist"),
            ..ServerConfig::default()
        };
        assert!(missing.resolve_directory().await.is_err());

        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x")?;
        let mut not_dir = ServerConfig {
            directory: file,
            ..ServerConfig::default()
        };
        assert!(not_dir.resolve_directory().await.is_err());
        Ok(())
    }
}
