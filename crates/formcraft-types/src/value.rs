// File: formcraft-types/src/value.rs
// Purpose: Values entered into form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value entered into a field: text for most inputs, a flag for checkboxes.
/// Absent values are represented as `Option::None` by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Empty text and `false` count as "no answer"
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Bool(b) => !b,
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    /// Length in `char`s (Unicode scalar values, not UTF-16 units);
    /// checkbox values have none
    pub fn char_len(&self) -> Option<usize> {
        match self {
            FieldValue::Bool(_) => None,
            FieldValue::Text(s) => Some(s.chars().count()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}
