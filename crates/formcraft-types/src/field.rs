// File: formcraft-types/src/field.rs
// Purpose: Form field definitions, creation and partial updates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::device::UnknownVariant;

/// Kind of input a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
}

impl FieldType {
    /// Every field type, in palette order
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
        }
    }

    /// Label shown in the builder palette
    pub fn palette_label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text Input",
            FieldType::Textarea => "Text Area",
            FieldType::Select => "Dropdown",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio Group",
            FieldType::Date => "Date Input",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FieldType::Text => "Single line text input for short answers",
            FieldType::Textarea => "Multi-line text input for longer responses",
            FieldType::Select => "Select from predefined options",
            FieldType::Checkbox => "Single checkbox for yes/no answers",
            FieldType::Radio => "Choose one option from multiple choices",
            FieldType::Date => "Date picker for temporal input",
        }
    }

    /// Whether the type renders a list of choices (`options`)
    pub fn supports_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("field type", s))
    }
}

/// Declared constraints checked by the validation engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression the value must match somewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Replaces the generic pattern error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationRules {
    pub fn length(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
            ..Self::default()
        }
    }

    pub fn pattern(pattern: impl Into<String>, message: Option<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            message,
            ..Self::default()
        }
    }

    /// True when no constraint is declared
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.pattern.is_none()
    }
}

/// One form input definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default = "first_step")]
    pub step: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

fn first_step() -> u32 {
    1
}

impl Field {
    /// Choices of a select/radio field; empty for every other type
    pub fn options(&self) -> &[String] {
        match (&self.options, self.field_type.supports_options()) {
            (Some(options), true) => options,
            _ => &[],
        }
    }

    fn normalize(&mut self) {
        self.step = self.step.max(1);
        if !self.field_type.supports_options() {
            self.options = None;
        }
    }
}

/// Field description handed to [`create_field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub required: bool,
    /// Explicit page; the active step is used when `None`
    pub step: Option<u32>,
    pub validation: Option<ValidationRules>,
    pub options: Vec<String>,
}

impl FieldDraft {
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            field_type,
            label: label.into(),
            placeholder: None,
            help_text: None,
            required: false,
            step: None,
            validation: None,
            options: Vec::new(),
        }
    }

    /// Draft produced by clicking a palette entry: "New Text Input" and so on
    pub fn from_palette(field_type: FieldType) -> Self {
        Self::new(field_type, format!("New {}", field_type.palette_label()))
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn validation(mut self, rules: ValidationRules) -> Self {
        self.validation = Some(rules);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Build a field with a fresh id, placed on `current_step` unless the draft
/// names a step explicitly.
pub fn create_field(draft: FieldDraft, current_step: u32) -> Field {
    let options = draft.field_type.supports_options().then_some(draft.options);
    let mut field = Field {
        id: uuid::Uuid::new_v4().to_string(),
        field_type: draft.field_type,
        label: draft.label,
        placeholder: draft.placeholder,
        help_text: draft.help_text,
        required: draft.required,
        step: draft.step.unwrap_or(current_step),
        validation: draft.validation,
        options,
    };
    field.normalize();
    field
}

/// Highest step used by any field, or 1 for an empty form
pub fn compute_total_steps(fields: &[Field]) -> u32 {
    fields.iter().map(|f| f.step).max().unwrap_or(1).max(1)
}

/// Fields placed on `step`, in collection order
pub fn fields_in_step(fields: &[Field], step: u32) -> impl Iterator<Item = &Field> {
    fields.iter().filter(move |f| f.step == step)
}

/// Partial update of a field. `None` leaves a property as it is; the nested
/// `Option`s distinguish "leave" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub placeholder: Option<Option<String>>,
    pub help_text: Option<Option<String>>,
    pub required: Option<bool>,
    pub step: Option<u32>,
    pub validation: Option<Option<ValidationRules>>,
    pub options: Option<Vec<String>>,
}

impl FieldUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn step(mut self, step: u32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn validation(mut self, rules: Option<ValidationRules>) -> Self {
        self.validation = Some(rules);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply onto `field`. The id is never touched.
    pub fn apply(&self, field: &mut Field) {
        if let Some(field_type) = self.field_type {
            field.field_type = field_type;
        }
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = help_text.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(step) = self.step {
            field.step = step;
        }
        if let Some(validation) = &self.validation {
            field.validation = validation.clone().filter(|rules| !rules.is_empty() || rules.message.is_some());
        }
        if let Some(options) = &self.options {
            field.options = Some(options.clone());
        }
        if field.field_type.supports_options() && field.options.is_none() {
            field.options = Some(Vec::new());
        }
        field.normalize();
    }
}
