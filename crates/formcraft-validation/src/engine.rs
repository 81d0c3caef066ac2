// File: formcraft-validation/src/engine.rs
// Purpose: Single-field validation

use formcraft_types::{Field, FieldValue};

use crate::pattern::matches_pattern;

pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_FORMAT: &str = "Invalid format";

/// Validate `value` against the constraints of `field`.
///
/// Returns the first error message, or `None` when the value is acceptable.
/// A failed required check short-circuits the length and pattern checks. An
/// absent value on an optional field passes.
///
/// A length bound of 0 is treated as unset.
pub fn validate(field: &Field, value: Option<&FieldValue>) -> Option<String> {
    let answered = value.filter(|v| !v.is_empty());

    if field.required && answered.is_none() {
        return Some(MSG_REQUIRED.to_string());
    }

    let (rules, value) = match (&field.validation, value) {
        (Some(rules), Some(value)) => (rules, value),
        _ => return None,
    };

    if let Some(len) = value.char_len() {
        if let Some(min) = rules.min_length.filter(|m| *m > 0) {
            if len < min {
                return Some(format!("Minimum length is {} characters", min));
            }
        }

        if let Some(max) = rules.max_length.filter(|m| *m > 0) {
            if len > max {
                return Some(format!("Maximum length is {} characters", max));
            }
        }
    }

    if let Some(pattern) = rules.pattern.as_deref().filter(|p| !p.is_empty()) {
        if !matches_pattern(&value.to_string(), pattern) {
            return Some(
                rules
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MSG_INVALID_FORMAT.to_string()),
            );
        }
    }

    None
}
