// File: formcraft-validation/src/report.rs
// Purpose: Validate many fields at once (a step, or a whole form)

use formcraft_types::{Field, FieldValue};
use std::collections::BTreeMap;

use crate::engine::validate;

/// Error message per failing field id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every checked field passed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn insert(&mut self, field_id: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field_id.into(), message.into());
    }

    pub fn remove(&mut self, field_id: &str) -> Option<String> {
        self.0.remove(field_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Validate every field independently; one failure never hides another.
pub fn validate_fields<'a, I>(fields: I, values: &BTreeMap<String, FieldValue>) -> ErrorMap
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut errors = ErrorMap::new();
    for field in fields {
        if let Some(message) = validate(field, values.get(&field.id)) {
            errors.insert(field.id.clone(), message);
        }
    }
    errors
}

/// Validate the fields placed on one step
pub fn validate_step(fields: &[Field], step: u32, values: &BTreeMap<String, FieldValue>) -> ErrorMap {
    validate_fields(fields.iter().filter(|f| f.step == step), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_types::{create_field, FieldDraft, FieldType, ValidationRules};

    fn form() -> Vec<Field> {
        vec![
            create_field(FieldDraft::new(FieldType::Text, "Name").required(true), 1),
            create_field(
                FieldDraft::new(FieldType::Text, "Zip")
                    .validation(ValidationRules::pattern("^[0-9]{5}$", None)),
                1,
            ),
            create_field(FieldDraft::new(FieldType::Textarea, "Notes").required(true), 2),
        ]
    }

    #[test]
    fn test_all_failures_reported() {
        let fields = form();
        let mut values = BTreeMap::new();
        values.insert(fields[1].id.clone(), FieldValue::from("abc"));

        let errors = validate_fields(&fields, &values);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(&fields[0].id), Some("This field is required"));
        assert_eq!(errors.get(&fields[1].id), Some("Invalid format"));
    }

    #[test]
    fn test_step_only_checks_its_fields() {
        let fields = form();
        let mut values = BTreeMap::new();
        values.insert(fields[0].id.clone(), FieldValue::from("Ada"));
        values.insert(fields[1].id.clone(), FieldValue::from("12345"));

        assert!(validate_step(&fields, 1, &values).is_empty());

        let step_two = validate_step(&fields, 2, &values);
        assert_eq!(step_two.len(), 1);
        assert!(step_two.get(&fields[2].id).is_some());
    }
}
