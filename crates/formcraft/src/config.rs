// File: formcraft/src/config.rs
// Purpose: Configuration parsing from formcraft.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageBackend,

    #[serde(default)]
    pub autosave: AutosaveConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Storage backend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageBackend {
    /// In-memory storage (fast, lost on exit)
    Memory,

    /// One JSON file per key under a data directory
    Filesystem(FilesystemConfig),
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Filesystem(FilesystemConfig::default())
    }
}

/// Filesystem storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilesystemConfig {
    /// Data directory path
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// Debounced autosave configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutosaveConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Quiet time after the last change before the form is written
    #[serde(default = "default_quiet_window_ms")]
    pub quiet_window_ms: u64,
}

impl AutosaveConfig {
    pub fn quiet_window(&self) -> Duration {
        Duration::from_millis(self.quiet_window_ms)
    }
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            quiet_window_ms: default_quiet_window_ms(),
        }
    }
}

/// Undo/redo history configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Maximum snapshots kept (0 = unbounded)
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

// Default values
fn default_data_path() -> PathBuf {
    PathBuf::from(".formcraft/data")
}

fn default_true() -> bool {
    true
}

fn default_quiet_window_ms() -> u64 {
    1000
}

fn default_history_capacity() -> usize {
    100
}

impl Config {
    /// Configuration for an ephemeral in-memory store
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Self::default()
        }
    }

    /// Load configuration from a formcraft.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.storage,
            StorageBackend::Filesystem(FilesystemConfig {
                path: PathBuf::from(".formcraft/data")
            })
        );
        assert!(config.autosave.enabled);
        assert_eq!(config.autosave.quiet_window(), Duration::from_secs(1));
        assert_eq!(config.history.capacity, 100);
    }

    #[test]
    fn test_empty_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "  \n").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load(dir.path().join("formcraft.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[autosave]\nquiet_window_ms = \"soon\"\n").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_custom_sections() {
        let toml = r#"
            [storage]
            backend = "memory"

            [autosave]
            quiet_window_ms = 250

            [history]
            capacity = 0
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.autosave.enabled);
        assert_eq!(config.autosave.quiet_window(), Duration::from_millis(250));
        assert_eq!(config.history.capacity, 0);
    }

    #[test]
    fn test_filesystem_path() {
        let toml = r#"
            [storage]
            backend = "filesystem"
            path = "/tmp/forms"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.storage,
            StorageBackend::Filesystem(FilesystemConfig {
                path: PathBuf::from("/tmp/forms")
            })
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("/definitely/not/here/formcraft.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
