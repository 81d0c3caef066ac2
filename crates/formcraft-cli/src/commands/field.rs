use anyhow::Result;
use colored::Colorize;
use formcraft::{FieldDraft, FieldType, FieldUpdate, FormStore, ValidationRules};

use super::open_form;

pub struct AddArgs {
    pub field_type: FieldType,
    pub label: Option<String>,
    pub step: Option<u32>,
    pub required: bool,
    pub placeholder: Option<String>,
    pub options: Vec<String>,
}

pub struct UpdateArgs {
    pub label: Option<String>,
    pub step: Option<u32>,
    pub required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub message: Option<String>,
    pub clear_validation: bool,
    pub options: Vec<String>,
}

impl UpdateArgs {
    fn touches_validation(&self) -> bool {
        self.min_length.is_some()
            || self.max_length.is_some()
            || self.pattern.is_some()
            || self.message.is_some()
    }

    /// Merge the given rule flags over the field's current rules
    fn rules(&self, current: Option<ValidationRules>) -> ValidationRules {
        let mut rules = current.unwrap_or_default();
        if let Some(min) = self.min_length {
            rules.min_length = Some(min);
        }
        if let Some(max) = self.max_length {
            rules.max_length = Some(max);
        }
        if let Some(pattern) = &self.pattern {
            rules.pattern = Some(pattern.clone());
        }
        if let Some(message) = &self.message {
            rules.message = Some(message.clone());
        }
        rules
    }
}

pub async fn add(store: &FormStore, form_id: &str, args: AddArgs) -> Result<()> {
    open_form(store, form_id).await?;

    if !args.options.is_empty() && !args.field_type.supports_options() {
        anyhow::bail!("{} fields do not take options", args.field_type);
    }

    let mut draft = match args.label {
        Some(label) => FieldDraft::new(args.field_type, label),
        None => FieldDraft::from_palette(args.field_type),
    };
    draft = draft.required(args.required).options(args.options);
    if let Some(step) = args.step {
        draft = draft.step(step);
    }
    if let Some(placeholder) = args.placeholder {
        draft = draft.placeholder(placeholder);
    }

    let field = store.add_field(draft).await;

    println!(
        "{} Added {} field {} on step {}",
        "✓".green(),
        field.field_type,
        field.id.cyan(),
        field.step
    );
    Ok(())
}

pub async fn update(store: &FormStore, form_id: &str, field_id: &str, args: UpdateArgs) -> Result<()> {
    open_form(store, form_id).await?;

    let Some(current) = store.field(field_id).await else {
        anyhow::bail!("Form {} has no field '{}'", form_id, field_id);
    };

    let mut update = FieldUpdate::new();
    if let Some(label) = &args.label {
        update = update.label(label.as_str());
    }
    if let Some(step) = args.step {
        update = update.step(step);
    }
    if let Some(required) = args.required {
        update = update.required(required);
    }
    if args.clear_validation {
        update = update.validation(None);
    } else if args.touches_validation() {
        update = update.validation(Some(args.rules(current.validation)));
    }
    if !args.options.is_empty() {
        if !current.field_type.supports_options() {
            anyhow::bail!("{} fields do not take options", current.field_type);
        }
        update = update.options(args.options.iter().cloned());
    }

    if update.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    store.update_field(field_id, &update).await;
    println!("{} Updated {}", "✓".green(), field_id.cyan());
    Ok(())
}

pub async fn remove(store: &FormStore, form_id: &str, field_id: &str) -> Result<()> {
    open_form(store, form_id).await?;

    if !store.remove_field(field_id).await {
        anyhow::bail!("Form {} has no field '{}'", form_id, field_id);
    }

    println!(
        "{} Removed {} ({} steps left)",
        "✓".green(),
        field_id.cyan(),
        store.total_steps().await
    );
    Ok(())
}

pub async fn move_to(store: &FormStore, form_id: &str, field_id: &str, index: usize) -> Result<()> {
    open_form(store, form_id).await?;

    if !store.move_field(field_id, index).await {
        anyhow::bail!("Form {} has no field '{}'", form_id, field_id);
    }

    println!("{} Moved {} to position {}", "✓".green(), field_id.cyan(), index);
    Ok(())
}
