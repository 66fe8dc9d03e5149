//! tm-forms CLI
//!
//! Describe, validate and preview the study forms from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tm_forms::config::FormsConfig;
use tm_forms::{render, CatalogSource, FormData, FormErrors, FormKind, JsonCatalog, Outcome, StaticCatalog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tm-forms")]
#[command(version)]
#[command(about = "Forms for translation-memory user studies")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a form's field metadata as JSON
    Describe {
        form: FormKind,
        /// Catalog JSON with country and language rows
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Validate a JSON payload and print the cleaned data or the errors
    Validate {
        form: FormKind,
        payload: PathBuf,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Draw a form in the terminal
    Preview {
        form: FormKind,
        /// Payload to pre-fill and validate
        #[arg(long)]
        payload: Option<PathBuf>,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Store the catalog path in the user configuration
    SetCatalog { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = FormsConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Command::SetCatalog { path } => {
            let config = FormsConfig {
                catalog_path: Some(path),
                ..config
            };
            match config.save()? {
                Some(written) => tracing::info!(path = %written.display(), "Saved configuration"),
                None => anyhow::bail!("No configuration directory available"),
            }
        }
        Command::Describe { form, catalog } => {
            let catalog = open_catalog(&config, catalog);
            let fields = form.describe(&*catalog).await?;
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        Command::Validate {
            form,
            payload,
            catalog,
        } => {
            let catalog = open_catalog(&config, catalog);
            let data = read_payload(&payload).await?;
            let outcome = form.process(&*catalog, &data).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.is_valid() {
                std::process::exit(1);
            }
        }
        Command::Preview {
            form,
            payload,
            catalog,
        } => {
            let catalog = open_catalog(&config, catalog);
            let data = match payload {
                Some(path) => read_payload(&path).await?,
                None => FormData::new(),
            };
            preview(form, &*catalog, &data).await?;
        }
    }

    Ok(())
}

/// Open the configured catalog, or an empty one when none is configured
fn open_catalog(config: &FormsConfig, explicit: Option<PathBuf>) -> Box<dyn CatalogSource> {
    match config.resolve_catalog(explicit) {
        Some(path) => {
            let catalog = JsonCatalog::new(path);
            tracing::info!(path = %catalog.path().display(), "Using catalog");
            Box::new(catalog)
        }
        None => {
            tracing::warn!("No catalog configured, country and language choices are empty");
            Box::new(StaticCatalog::default())
        }
    }
}

async fn read_payload(path: &Path) -> Result<FormData> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read payload {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid payload {}", path.display()))
}

async fn preview(form: FormKind, catalog: &dyn CatalogSource, data: &FormData) -> Result<()> {
    let fields = form.describe(catalog).await?;
    // Only show errors for submitted payloads
    let errors = if data.is_empty() {
        FormErrors::new()
    } else {
        match form.process(catalog, data).await? {
            Outcome::Valid { .. } => FormErrors::new(),
            Outcome::Invalid { errors } => errors,
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_preview(&mut terminal, form, &fields, data, &errors);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_preview<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    form: FormKind,
    fields: &[tm_forms::FormField],
    data: &FormData,
    errors: &FormErrors,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            render::draw_form(frame, frame.area(), form.label(), fields, data, errors)
        })?;

        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
