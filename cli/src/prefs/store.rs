//! # Preference Storage
//!
//! File: cli/src/prefs/store.rs
//!
//! A string key/value store, the shape of browser local storage. Two
//! implementations:
//!
//! - `JsonFileStore`: one JSON object per file, re-read on every access so
//!   several `folio` processes see each other's writes. Keys whose value is
//!   not a string read as missing and are left alone by writes to other keys.
//! - `MemoryStore`: a `HashMap`, optionally failing every write.
//!
use crate::core::error::{FolioError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the preferences file location.
pub const PREFS_FILE_ENV: &str = "FOLIO_PREFS_FILE";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores preferences in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `prefs.json` in the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "folio", "folio").ok_or_else(|| {
            FolioError::PreferenceStore("Could not determine the user data directory".into())
        })?;
        Ok(dirs.data_dir().join("prefs.json"))
    }

    /// Explicit path, then `FOLIO_PREFS_FILE`, then the default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Ok(path) = std::env::var(PREFS_FILE_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::new(shellexpand::tilde(&path).into_owned()));
            }
        }
        Ok(Self::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored object. Values of any JSON type are kept so that one
    /// malformed key never hides or loses its siblings.
    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            debug!("Preferences file {:?} does not exist yet", self.path);
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file {:?}", self.path))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(FolioError::PreferenceStore(format!(
                "Preferences file {:?} is not a JSON object",
                self.path
            ))
            .into()),
            Err(e) => Err(FolioError::PreferenceStore(format!(
                "Preferences file {:?} is not valid JSON: {}",
                self.path, e
            ))
            .into()),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir_exists(parent)?;
        }
        let content = serde_json::to_string_pretty(map)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file {:?}", self.path))?;
        debug!("Wrote preferences to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    /// Only string values count; anything else reads as missing.
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.read_map()?.remove(key) {
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => {
                debug!("Ignoring non-string value for '{}': {}", key, other);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Only a file that cannot be parsed at all is replaced.
        let mut map = self.read_map().unwrap_or_else(|e| {
            warn!("Replacing unreadable preferences file: {:#}", e);
            Map::new()
        });
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)
    }
}

fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(FolioError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// In-memory store. `failing()` builds one whose writes always error.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!(FolioError::PreferenceStore("storage unavailable".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
