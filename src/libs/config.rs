//! User configuration.
//!
//! Stored as pretty-printed JSON in `config.json` inside the data directory
//! (see [`DataStorage`]). Every field has a default, so a missing file or a
//! partial one is fine:
//!
//! ```json
//! {
//!   "import": { "mode": "merge", "conflict": "skip" },
//!   "export": { "file": "todo_export.csv" }
//! }
//! ```
//!
//! Unlike the task store, a config file that fails to parse is reported as an
//! error: it is written by hand and silently ignoring it would hide mistakes.

use super::data_storage::DataStorage;
use super::export::DEFAULT_EXPORT_FILE;
use super::reconcile::{ConflictStrategy, ImportMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    pub mode: ImportMode,
    pub conflict: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub file: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub import: ImportConfig,
    pub export: ExportConfig,
}

impl Default for ImportConfig {
    fn default() -> Self {
        ImportConfig {
            mode: ImportMode::Merge,
            conflict: ConflictStrategy::Skip.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn conflict_strategy(&self) -> ConflictStrategy {
        ConflictStrategy::from_name(&self.import.conflict)
    }
}
