//! In-memory storage backend

use crate::storage::Storage;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend
///
/// Fast but non-persistent - everything is lost when the process exits.
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create a new memory storage backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(key))
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries.keys().cloned().collect())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
