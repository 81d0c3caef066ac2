// File: formcraft/src/snapshot.rs
// Purpose: Form snapshot and its persisted record

use formcraft_types::Field;
use serde::{Deserialize, Serialize};

/// The field collection plus form-level metadata at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: Vec<Field>,
    pub total_steps: u32,
    pub form_id: Option<String>,
    pub form_title: Option<String>,
}

/// Stored shape of a saved form (`form_{formId}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub fields: Vec<Field>,
    pub total_steps: u32,
    pub form_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_title: Option<String>,
}

impl FormRecord {
    pub fn into_snapshot(self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields,
            total_steps: self.total_steps,
            form_id: Some(self.form_id),
            form_title: self.form_title,
        }
    }
}
