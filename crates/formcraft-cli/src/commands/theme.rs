use anyhow::{Context, Result};
use colored::Colorize;
use formcraft::{FormStore, Theme};

pub async fn execute(store: &FormStore, mode: Option<&str>) -> Result<()> {
    let current = store.theme().await;

    let next = match mode {
        None => {
            println!("{}", current);
            return Ok(());
        }
        Some("toggle") => current.toggled(),
        Some(name) => name.parse::<Theme>()?,
    };

    store.set_theme(next).await.context("Failed to save theme")?;
    println!("{} Theme set to {}", "✓".green(), next.to_string().cyan());
    Ok(())
}
