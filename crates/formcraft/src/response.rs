// File: formcraft/src/response.rs
// Purpose: Submitted form responses

use chrono::{DateTime, Utc};
use formcraft_types::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One submitted instance of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: String,
    /// Submission time, serialized as RFC 3339
    pub timestamp: DateTime<Utc>,
    /// Field id -> entered value
    pub data: BTreeMap<String, FieldValue>,
}

impl Response {
    pub fn new(data: BTreeMap<String, FieldValue>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            data,
        }
    }
}

/// Every form's responses, keyed by form id; stored under `form_responses`
pub type ResponseBook = BTreeMap<String, Vec<Response>>;
