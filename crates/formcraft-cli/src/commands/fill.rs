use anyhow::{Context, Result};
use colored::Colorize;
use formcraft::{Field, FieldType, FieldValue, FormStore, Submission};

use super::open_form;

/// Parse a `field=value` argument
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected field=value, got '{}'", raw)),
    }
}

/// Checkbox values are booleans when they read as one
fn to_value(field: Option<&Field>, raw: &str) -> FieldValue {
    match (field.map(|f| f.field_type), raw.parse::<bool>()) {
        (Some(FieldType::Checkbox), Ok(checked)) => FieldValue::Bool(checked),
        _ => FieldValue::from(raw),
    }
}

pub async fn validate(store: &FormStore, form_id: &str, field_id: &str, raw: &str) -> Result<()> {
    open_form(store, form_id).await?;

    let Some(field) = store.field(field_id).await else {
        anyhow::bail!("Form {} has no field '{}'", form_id, field_id);
    };

    let value = to_value(Some(&field), raw);
    match FormStore::validate_field(&field, Some(&value)) {
        None => println!("{} {}", "✓".green(), "valid".green()),
        Some(message) => println!("{} {}", "✗".red(), message),
    }
    Ok(())
}

pub async fn submit(store: &FormStore, form_id: &str, values: Vec<(String, String)>) -> Result<()> {
    open_form(store, form_id).await?;

    let mut session = store.preview().await;
    if let Some(title) = session.form_title() {
        println!("{}", title.bold());
    }
    for (field_id, raw) in values {
        let field = session.fields().iter().find(|f| f.id == field_id);
        if field.is_none() {
            tracing::warn!("Form {} has no field '{}', ignoring its value", form_id, field_id);
        }
        let value = to_value(field, &raw);
        session.set_value(&field_id, value);
    }

    match store.submit(&mut session).await.context("Failed to record the response")? {
        Submission::Accepted(response) => {
            println!("{} Recorded response {}", "✓".green(), response.id.cyan());
            Ok(())
        }
        Submission::Rejected(errors) => {
            println!("{}", "Submission rejected:".red().bold());
            for (field_id, message) in errors.iter() {
                println!("  {} {}", field_id.yellow(), message);
            }
            anyhow::bail!("{} field(s) failed validation", errors.len())
        }
    }
}

pub async fn responses(store: &FormStore, form_id: &str, json: bool) -> Result<()> {
    let responses = store.get_responses(form_id).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&responses)?);
        return Ok(());
    }

    if responses.is_empty() {
        println!("No responses for {} yet.", form_id);
        return Ok(());
    }

    for response in responses {
        println!(
            "{} {}",
            response.timestamp.to_rfc3339().dimmed(),
            response.id.cyan()
        );
        for (field_id, value) in &response.data {
            println!("  {}: {}", field_id, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("email=a=b@example.com"),
            Ok(("email".to_string(), "a=b@example.com".to_string()))
        );
        assert_eq!(parse_assignment("name="), Ok(("name".to_string(), String::new())));
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("novalue").is_err());
    }

    #[test]
    fn test_checkbox_values_become_booleans() {
        let checkbox = formcraft::create_field(formcraft::FieldDraft::new(FieldType::Checkbox, "Agree"), 1);
        let text = formcraft::create_field(formcraft::FieldDraft::new(FieldType::Text, "Name"), 1);

        assert_eq!(to_value(Some(&checkbox), "true"), FieldValue::Bool(true));
        assert_eq!(to_value(Some(&checkbox), "yes"), FieldValue::from("yes"));
        assert_eq!(to_value(Some(&text), "true"), FieldValue::from("true"));
        assert_eq!(to_value(None, "false"), FieldValue::from("false"));
    }
}
