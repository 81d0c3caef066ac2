mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formcraft::{Config, FieldType, FormStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formcraft")]
#[command(version, about = "formcraft - multi-step form builder", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = "formcraft.toml")]
    config: PathBuf,

    /// Log store activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List built-in templates
    Templates,

    /// Create and save a new form
    New {
        /// Seed the form from a template
        #[arg(short, long)]
        template: Option<String>,

        /// Form title
        #[arg(long)]
        title: Option<String>,
    },

    /// Print a form step by step
    Show {
        /// Form id
        form: String,
    },

    /// Add a field to a form
    Add {
        /// Form id
        form: String,

        /// Field type: text, textarea, select, checkbox, radio or date
        #[arg(short = 't', long = "type")]
        field_type: FieldType,

        /// Field label (defaults to "New <type>")
        #[arg(short, long)]
        label: Option<String>,

        /// Step to place the field on
        #[arg(short, long)]
        step: Option<u32>,

        #[arg(long)]
        required: bool,

        #[arg(long)]
        placeholder: Option<String>,

        /// Choice for select/radio fields (repeatable)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Change properties of a field
    Update {
        /// Form id
        form: String,

        /// Field id
        field: String,

        #[arg(short, long)]
        label: Option<String>,

        #[arg(short, long)]
        step: Option<u32>,

        #[arg(long, conflicts_with = "optional")]
        required: bool,

        #[arg(long)]
        optional: bool,

        #[arg(long)]
        min_length: Option<usize>,

        #[arg(long)]
        max_length: Option<usize>,

        /// Regular expression the value must match (Rust `regex` syntax:
        /// no lookaround or backreferences; such patterns reject every value)
        #[arg(long)]
        pattern: Option<String>,

        /// Message shown when the pattern does not match
        #[arg(long)]
        message: Option<String>,

        /// Drop all validation rules
        #[arg(long, conflicts_with_all = ["min_length", "max_length", "pattern", "message"])]
        clear_validation: bool,

        /// Replace the choices (repeatable)
        #[arg(short, long = "option")]
        options: Vec<String>,
    },

    /// Remove a field
    Remove {
        /// Form id
        form: String,

        /// Field id
        field: String,
    },

    /// Move a field to a new position
    Move {
        /// Form id
        form: String,

        /// Field id
        field: String,

        /// Target position, 0-based
        index: usize,
    },

    /// Check one value against a field's rules
    Validate {
        /// Form id
        form: String,

        /// Field id
        field: String,

        value: String,
    },

    /// Fill in a form and record the response
    Submit {
        /// Form id
        form: String,

        /// Field value as field=value (repeatable)
        #[arg(short, long = "value", value_parser = commands::fill::parse_assignment)]
        values: Vec<(String, String)>,
    },

    /// Print the responses recorded for a form
    Responses {
        /// Form id
        form: String,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// List saved forms
    List,

    /// Delete a saved form
    Delete {
        /// Form id
        form: String,
    },

    /// Show or set the colour theme
    Theme {
        /// light, dark or toggle
        mode: Option<String>,
    },

    /// Print the address a form is shared at
    Share {
        /// Form id
        form: String,

        #[arg(short, long, default_value = "http://localhost:3000")]
        base: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to read {}", cli.config.display()))?;
    let store = FormStore::open(&config)
        .await
        .context("Failed to open form storage")?;

    let outcome = commands::execute(cli.command, &store).await;

    // whatever the command changed goes to disk before exit
    store.flush().await.context("Failed to save form")?;

    outcome
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
