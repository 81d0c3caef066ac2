// File: formcraft/src/templates.rs
// Purpose: Built-in form templates used to seed a new form

use formcraft_types::{compute_total_steps, Field, FieldType, ValidationRules};
use once_cell::sync::Lazy;

/// A named, predefined field collection
#[derive(Debug, Clone)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<Field>,
}

impl Template {
    pub fn total_steps(&self) -> u32 {
        compute_total_steps(&self.fields)
    }
}

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| vec![contact_template()]);

/// All built-in templates
pub fn all() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by id
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

fn text(id: &str, field_type: FieldType, label: &str, placeholder: &str, step: u32) -> Field {
    Field {
        id: id.to_string(),
        field_type,
        label: label.to_string(),
        placeholder: Some(placeholder.to_string()),
        help_text: None,
        required: false,
        step,
        validation: None,
        options: None,
    }
}

fn contact_template() -> Template {
    let mut name = text("name", FieldType::Text, "Full Name", "Enter your full name", 1);
    name.required = true;
    name.validation = Some(ValidationRules::length(Some(2), Some(50)));

    let mut email = text("email", FieldType::Text, "Email", "Enter your email", 1);
    email.required = true;
    email.validation = Some(ValidationRules::pattern(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
        Some("Please enter a valid email address".to_string()),
    ));

    let mut phone = text("phone", FieldType::Text, "Phone", "Enter your phone number", 2);
    phone.validation = Some(ValidationRules::pattern(
        "^[0-9]{10}$",
        Some("Please enter a valid 10-digit phone number".to_string()),
    ));

    let mut message = text(
        "message",
        FieldType::Textarea,
        "Message",
        "How can we help you?",
        2,
    );
    message.required = true;
    message.validation = Some(ValidationRules::length(Some(10), Some(500)));

    Template {
        id: "contact",
        name: "Contact Us",
        description: "Basic contact form with name, email, and message fields",
        fields: vec![name, email, phone, message],
    }
}
