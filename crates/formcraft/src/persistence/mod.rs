//! Saving and loading forms, responses and the theme preference
//!
//! Storage layout:
//!
//! | Key              | Value                                         |
//! |------------------|-----------------------------------------------|
//! | `form_{formId}`  | [`FormRecord`] (`fields`, `totalSteps`, ...)   |
//! | `form_responses` | [`ResponseBook`] (`{ formId: Response[] }`)    |
//! | `theme`          | `"light"` or `"dark"`                         |

use formcraft_types::{compute_total_steps, Theme};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{Result, StoreError};
use crate::response::ResponseBook;
use crate::snapshot::{FormRecord, FormSnapshot};
use crate::storage::Storage;

pub mod autosave;

pub use autosave::Autosave;

pub const FORM_KEY_PREFIX: &str = "form_";
pub const RESPONSES_KEY: &str = "form_responses";
pub const THEME_KEY: &str = "theme";

/// Storage key of a saved form
pub fn form_key(form_id: &str) -> String {
    format!("{}{}", FORM_KEY_PREFIX, form_id)
}

/// Typed access to the key-value storage
#[derive(Clone)]
pub struct PersistenceManager {
    storage: Arc<dyn Storage>,
}

impl PersistenceManager {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn storage_name(&self) -> &'static str {
        self.storage.name()
    }

    async fn read<T: DeserializeOwned>(&self, key: &str, what: &'static str) -> Result<Option<T>> {
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                what,
                key: key.to_string(),
                source,
            })
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T, what: &'static str) -> Result<()> {
        let json = serde_json::to_string(value)
            .map_err(|source| StoreError::Serialization { what, source })?;
        self.storage.set(key, json).await?;
        Ok(())
    }

    /// Write `snapshot` under `form_{formId}`, generating an id when the
    /// snapshot has none. Returns the id written.
    pub async fn save(&self, snapshot: &FormSnapshot) -> Result<String> {
        let form_id = snapshot
            .form_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let record = FormRecord {
            fields: snapshot.fields.clone(),
            total_steps: snapshot.total_steps,
            form_id: form_id.clone(),
            form_title: snapshot.form_title.clone(),
        };

        self.write(&form_key(&form_id), &record, "form").await?;
        tracing::info!(
            "Saved form {} ({} fields) to {} storage",
            form_id,
            record.fields.len(),
            self.storage.name()
        );

        Ok(form_id)
    }

    /// Read a saved form; `None` when nothing is stored under the id
    pub async fn load(&self, form_id: &str) -> Result<Option<FormSnapshot>> {
        let record: Option<FormRecord> = self.read(&form_key(form_id), "form").await?;

        Ok(record.map(|mut record| {
            // stored counts are trusted only if they agree with the fields
            record.total_steps = compute_total_steps(&record.fields);
            record.into_snapshot()
        }))
    }

    pub async fn delete(&self, form_id: &str) -> Result<bool> {
        let key = form_key(form_id);
        if !self.storage.exists(&key).await? {
            return Ok(false);
        }
        self.storage.delete(&key).await?;
        Ok(true)
    }

    /// Ids of every saved form, sorted
    pub async fn list_forms(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self
            .storage
            .keys()
            .await?
            .into_iter()
            .filter(|key| key != RESPONSES_KEY)
            .filter_map(|key| key.strip_prefix(FORM_KEY_PREFIX).map(str::to_string))
            .collect();
        ids.sort();
        Ok(ids)
    }

    pub async fn load_responses(&self) -> Result<ResponseBook> {
        Ok(self
            .read(RESPONSES_KEY, "responses")
            .await?
            .unwrap_or_default())
    }

    pub async fn save_responses(&self, book: &ResponseBook) -> Result<()> {
        self.write(RESPONSES_KEY, book, "responses").await
    }

    pub async fn load_theme(&self) -> Result<Option<Theme>> {
        self.read(THEME_KEY, "theme").await
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write(THEME_KEY, &theme, "theme").await
    }
}
