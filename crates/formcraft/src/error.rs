// File: formcraft/src/error.rs
// Purpose: Error types surfaced by the form store

/// Failures of store operations that touch storage or break an invariant.
///
/// Unknown template, form and field ids are not errors; those operations
/// report `false` and leave the store untouched.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("Failed to encode {what}: {source}")]
    Serialization {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored {what} under {key:?} is corrupt: {source}")]
    Corrupt {
        what: &'static str,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError::Storage(err)
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
