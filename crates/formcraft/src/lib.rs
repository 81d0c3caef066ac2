//! # formcraft
//!
//! Form-state core for a multi-step form builder.
//!
//! ## Features
//!
//! - **Form Store**: add, update, remove and reorder fields across steps
//! - **Undo/Redo**: every field change is snapshotted into a linear history
//! - **Templates**: seed a form from a built-in definition ("contact")
//! - **Persistence**: save/load forms and responses through a pluggable
//!   key-value [`Storage`](storage::Storage) (memory or filesystem)
//! - **Autosave**: debounced, so a burst of edits writes once
//! - **Preview**: fill a form in with validation gating each step
//!
//! ## Example
//!
//! ```rust
//! use formcraft::{FormStore, FieldDraft, FieldType};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = FormStore::in_memory();
//!
//!     store.load_template("contact").await;
//!     store.add_field(FieldDraft::new(FieldType::Checkbox, "Subscribe").step(2)).await;
//!
//!     let form_id = store.save_form().await.unwrap();
//!     assert!(store.load_form(&form_id).await.unwrap());
//! }
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod persistence;
pub mod preview;
pub mod response;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod templates;

pub use config::{AutosaveConfig, Config, FilesystemConfig, HistoryConfig, StorageBackend};
pub use error::StoreError;
pub use history::History;
pub use persistence::{Autosave, PersistenceManager};
pub use preview::PreviewSession;
pub use response::{Response, ResponseBook};
pub use snapshot::{FormRecord, FormSnapshot};
pub use store::{share_url, FormState, FormStore, Submission};
pub use templates::Template;

// Re-export the shared model so callers need a single dependency
pub use formcraft_types::{
    compute_total_steps, create_field, fields_in_step, Device, Field, FieldDraft, FieldType,
    FieldUpdate, FieldValue, Theme, ValidationRules,
};
pub use formcraft_validation::{validate, ErrorMap};
