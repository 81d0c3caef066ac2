pub mod field;
pub mod fill;
pub mod form;
pub mod theme;

use anyhow::Result;
use formcraft::FormStore;

use crate::Commands;

pub async fn execute(command: Commands, store: &FormStore) -> Result<()> {
    match command {
        Commands::Templates => form::templates(),
        Commands::New { template, title } => {
            form::new(store, template.as_deref(), title).await
        }
        Commands::Show { form } => form::show(store, &form).await,
        Commands::List => form::list(store).await,
        Commands::Delete { form } => form::delete(store, &form).await,
        Commands::Share { form, base } => form::share(store, &form, &base).await,
        Commands::Add {
            form,
            field_type,
            label,
            step,
            required,
            placeholder,
            options,
        } => {
            let args = field::AddArgs {
                field_type,
                label,
                step,
                required,
                placeholder,
                options,
            };
            field::add(store, &form, args).await
        }
        Commands::Update {
            form,
            field,
            label,
            step,
            required,
            optional,
            min_length,
            max_length,
            pattern,
            message,
            clear_validation,
            options,
        } => {
            let args = field::UpdateArgs {
                label,
                step,
                required: match (required, optional) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                min_length,
                max_length,
                pattern,
                message,
                clear_validation,
                options,
            };
            field::update(store, &form, &field, args).await
        }
        Commands::Remove { form, field } => field::remove(store, &form, &field).await,
        Commands::Move { form, field, index } => {
            field::move_to(store, &form, &field, index).await
        }
        Commands::Validate { form, field, value } => {
            fill::validate(store, &form, &field, &value).await
        }
        Commands::Submit { form, values } => fill::submit(store, &form, values).await,
        Commands::Responses { form, json } => fill::responses(store, &form, json).await,
        Commands::Theme { mode } => theme::execute(store, mode.as_deref()).await,
    }
}

/// Load `form_id` into the store or fail with a readable error
pub async fn open_form(store: &FormStore, form_id: &str) -> Result<()> {
    if !store.load_form(form_id).await? {
        anyhow::bail!("No saved form with id '{}'. Run `formcraft list` to see saved forms.", form_id);
    }
    Ok(())
}
