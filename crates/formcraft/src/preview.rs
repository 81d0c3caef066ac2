// File: formcraft/src/preview.rs
// Purpose: Filling in a form - per-step validation gates navigation

use formcraft_types::{Field, FieldValue};
use formcraft_validation::{validate_fields, validate_step, ErrorMap};
use std::collections::BTreeMap;

use crate::snapshot::FormSnapshot;

/// A form being filled in.
///
/// Moving forward and submitting are refused while the fields concerned have
/// errors; moving back never is.
#[derive(Debug, Clone)]
pub struct PreviewSession {
    form_id: Option<String>,
    form_title: Option<String>,
    fields: Vec<Field>,
    total_steps: u32,
    current_step: u32,
    values: BTreeMap<String, FieldValue>,
    errors: ErrorMap,
}

impl PreviewSession {
    pub fn new(snapshot: FormSnapshot) -> Self {
        Self {
            form_id: snapshot.form_id,
            form_title: snapshot.form_title,
            fields: snapshot.fields,
            total_steps: snapshot.total_steps.max(1),
            current_step: 1,
            values: BTreeMap::new(),
            errors: ErrorMap::new(),
        }
    }

    pub fn form_id(&self) -> Option<&str> {
        self.form_id.as_deref()
    }

    pub fn form_title(&self) -> Option<&str> {
        self.form_title.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step >= self.total_steps
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    /// Errors from the last navigation or submit attempt
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Enter a value; the field's previous error is cleared
    pub fn set_value(&mut self, field_id: &str, value: impl Into<FieldValue>) {
        self.values.insert(field_id.to_string(), value.into());
        self.errors.remove(field_id);
    }

    /// Advance one step if the current step validates.
    ///
    /// On failure the session stays put and the errors are returned (and kept
    /// in [`errors`](Self::errors)).
    pub fn next_step(&mut self) -> Result<u32, ErrorMap> {
        self.errors = validate_step(&self.fields, self.current_step, &self.values);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        self.current_step = (self.current_step + 1).min(self.total_steps);
        Ok(self.current_step)
    }

    pub fn prev_step(&mut self) -> u32 {
        self.current_step = self.current_step.saturating_sub(1).max(1);
        self.current_step
    }

    /// Validate every field and hand back the entered values of known fields
    pub fn submit(&mut self) -> Result<BTreeMap<String, FieldValue>, ErrorMap> {
        self.errors = validate_fields(&self.fields, &self.values);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        Ok(self
            .fields
            .iter()
            .filter_map(|f| self.values.get(&f.id).map(|v| (f.id.clone(), v.clone())))
            .collect())
    }
}
