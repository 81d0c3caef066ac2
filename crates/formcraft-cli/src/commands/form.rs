use anyhow::{Context, Result};
use colored::Colorize;
use formcraft::{share_url, FormStore};

use super::open_form;

pub fn templates() -> Result<()> {
    println!("{}", "Templates".green().bold());
    println!();

    for template in formcraft::templates::all() {
        println!(
            "  {} {} ({} fields, {} steps)",
            template.id.cyan(),
            template.name,
            template.fields.len(),
            template.total_steps()
        );
        println!("      {}", template.description.dimmed());
    }

    Ok(())
}

pub async fn new(store: &FormStore, template: Option<&str>, title: Option<String>) -> Result<()> {
    if let Some(template_id) = template {
        if !store.load_template(template_id).await {
            anyhow::bail!(
                "Unknown template '{}'. Run `formcraft templates` to see what is available.",
                template_id
            );
        }
    }

    store.set_form_title(title).await;
    let form_id = store.save_form().await.context("Failed to save the new form")?;

    println!("{} Created form {}", "✓".green(), form_id.cyan());
    Ok(())
}

pub async fn show(store: &FormStore, form_id: &str) -> Result<()> {
    open_form(store, form_id).await?;
    let state = store.state().await;

    let title = state.form_title.as_deref().unwrap_or("Untitled form");
    println!("{} {}", title.green().bold(), format!("({})", form_id).dimmed());

    if state.fields.is_empty() {
        println!();
        println!("  No fields yet. Add one with `formcraft add {} --type text`.", form_id);
        return Ok(());
    }

    for step in 1..=state.total_steps {
        println!();
        println!("{}", format!("Step {} of {}", step, state.total_steps).bold());

        let mut empty = true;
        for (index, field) in state.fields.iter().enumerate() {
            if field.step != step {
                continue;
            }
            empty = false;

            let marker = if field.required { "*".red().to_string() } else { " ".to_string() };
            println!(
                "  {:>2}. {}{} [{}] {}",
                index,
                field.label,
                marker,
                field.field_type,
                field.id.dimmed()
            );
            if !field.options().is_empty() {
                println!("        options: {}", field.options().join(", "));
            }
            if let Some(rules) = &field.validation {
                if let Some(min) = rules.min_length {
                    println!("        min length: {}", min);
                }
                if let Some(max) = rules.max_length {
                    println!("        max length: {}", max);
                }
                if let Some(pattern) = &rules.pattern {
                    println!("        pattern: {}", pattern);
                }
            }
        }

        if empty {
            println!("  {}", "(no fields)".dimmed());
        }
    }

    Ok(())
}

pub async fn list(store: &FormStore) -> Result<()> {
    let forms = store
        .persistence()
        .list_forms()
        .await
        .context("Failed to list saved forms")?;

    if forms.is_empty() {
        println!("No saved forms. Create one with `formcraft new`.");
        return Ok(());
    }

    for form_id in forms {
        let title = match store.persistence().load(&form_id).await {
            Ok(Some(snapshot)) => snapshot.form_title.unwrap_or_default(),
            Ok(None) => continue,
            Err(e) => {
                tracing::warn!("Skipping unreadable form {}: {}", form_id, e);
                continue;
            }
        };
        println!("  {} {}", form_id.cyan(), title);
    }

    Ok(())
}

pub async fn delete(store: &FormStore, form_id: &str) -> Result<()> {
    let deleted = store
        .persistence()
        .delete(form_id)
        .await
        .context("Failed to delete form")?;

    if !deleted {
        anyhow::bail!("No saved form with id '{}'", form_id);
    }

    println!("{} Deleted form {}", "✓".green(), form_id.cyan());
    Ok(())
}

pub async fn share(store: &FormStore, form_id: &str, base: &str) -> Result<()> {
    open_form(store, form_id).await?;
    println!("{}", share_url(base, form_id));
    Ok(())
}
