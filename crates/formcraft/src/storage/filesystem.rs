//! Filesystem storage backend

use crate::config::FilesystemConfig;
use crate::storage::Storage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem storage backend
///
/// Stores each key as a JSON file in the data directory.
/// Persistent across restarts, suitable for a single local user.
#[derive(Clone)]
pub struct FilesystemStorage {
    config: FilesystemConfig,
}

impl FilesystemStorage {
    /// Create a new filesystem storage backend
    pub async fn new(config: FilesystemConfig) -> Result<Self> {
        fs::create_dir_all(&config.path)
            .await
            .with_context(|| format!("Failed to create data directory {:?}", config.path))?;

        Ok(Self { config })
    }

    /// Get the file path for a key
    fn key_to_path(&self, key: &str) -> PathBuf {
        // Sanitize key to make it filesystem-safe
        let safe_key = key
            .replace('/', "_")
            .replace('\\', "_")
            .replace(':', "_");

        self.config.path.join(format!("{}.json", safe_key))
    }
}

#[async_trait]
impl Storage for FilesystemStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {:?}", path))?;

        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.key_to_path(key);

        // Write next to the target, then rename over it
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("Failed to replace {:?}", path))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);

        if path.exists() {
            fs::remove_file(&path)
                .await
                .with_context(|| format!("Failed to delete {:?}", path))?;
        }

        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.key_to_path(key).exists())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&self.config.path)
            .await
            .context("Failed to read data directory")?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                if let Some(name) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(name.to_string());
                }
            }
        }

        Ok(keys)
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> FilesystemConfig {
        FilesystemConfig {
            path: dir.path().to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_filesystem_storage_basic() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(config(&temp_dir)).await.unwrap();

        storage.set("form_1", r#"{"fields":[]}"#.to_string()).await.unwrap();

        let retrieved = storage.get("form_1").await.unwrap();
        assert_eq!(retrieved.as_deref(), Some(r#"{"fields":[]}"#));
        assert!(storage.exists("form_1").await.unwrap());

        storage.delete("form_1").await.unwrap();
        assert!(!storage.exists("form_1").await.unwrap());
        assert_eq!(storage.get("form_1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_filesystem_storage_persistence() {
        let temp_dir = TempDir::new().unwrap();

        {
            let storage = FilesystemStorage::new(config(&temp_dir)).await.unwrap();
            storage.set("theme", "\"dark\"".to_string()).await.unwrap();
        }

        // Reopen (simulating restart)
        {
            let storage = FilesystemStorage::new(config(&temp_dir)).await.unwrap();
            assert_eq!(storage.get("theme").await.unwrap().as_deref(), Some("\"dark\""));
            assert_eq!(storage.keys().await.unwrap(), vec!["theme".to_string()]);
        }
    }

    #[tokio::test]
    async fn test_filesystem_key_sanitized() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FilesystemStorage::new(config(&temp_dir)).await.unwrap();

        storage.set("form_../escape", "1".to_string()).await.unwrap();
        assert!(temp_dir.path().join("form_.._escape.json").exists());
    }
}
