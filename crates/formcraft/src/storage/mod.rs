//! Key-value storage backends for saved forms

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::StorageBackend;

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemStorage;
pub use memory::MemoryStorage;

/// String-keyed storage holding JSON-encoded values
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Delete a key
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Get all keys
    async fn keys(&self) -> Result<Vec<String>>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// Create a storage backend from config
pub async fn open(backend: &StorageBackend) -> Result<Arc<dyn Storage>> {
    match backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageBackend::Filesystem(config) => {
            let storage = FilesystemStorage::new(config.clone()).await?;
            Ok(Arc::new(storage))
        }
    }
}
