//! Settings for the shoplist binary
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! JSON settings file, then command-line overrides. The file uses the same
//! field names as [`Settings`]; missing fields keep their defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::kv::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;

/// Name of the directory created under the platform data directory
pub const APP_DIR_NAME: &str = "shoplist";

/// Log file name used when none is configured
pub const DEFAULT_LOG_FILE: &str = "shoplist.log";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the storage slots and the default log file
    pub data_dir: PathBuf,
    /// Slot name the list is stored under
    pub storage_key: String,
    /// Default tracing filter, e.g. "info" or "shoplist=debug"
    pub log_level: String,
    /// Log destination; `<data_dir>/shoplist.log` when unset
    pub log_file: Option<PathBuf>,
    /// Keep the list in memory only
    pub ephemeral: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
            log_file: None,
            ephemeral: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key)?;

        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("Data directory must not be empty");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("Log level must not be empty");
        }

        Ok(())
    }

    /// Where log output goes
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_LOG_FILE))
    }
}

/// Platform data directory for shoplist, or `./.shoplist` if there is none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.storage_key, "shoppingItems");
        assert!(!settings.ephemeral);
        assert!(settings.validate().is_ok());
        assert!(settings.log_path().ends_with(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "storage_key": "groceries" }"#).unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(settings.storage_key, "groceries");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.data_dir, default_data_dir());
    }

    #[test]
    fn test_full_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            log_file: Some(dir.path().join("custom.log")),
            ..Settings::default()
        };

        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Settings::load_from_file("/nonexistent/shoplist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }

    #[test]
    fn test_invalid_storage_key_rejected() {
        let settings = Settings {
            storage_key: "../items".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            storage_key: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
