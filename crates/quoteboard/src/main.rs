//! quoteboard - SEO service quote configurator

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quoteboard_core::models::Settings;
use quoteboard_core::settings::default_settings_path;
use quoteboard_core::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "quoteboard",
    version,
    about = "SEO service quote configurator",
    long_about = "Interactive configurator for SEO service quotes.\n\
                  \n\
                  Pick services from a fixed catalog, adjust hours and base parameters,\n\
                  and see one-time and monthly totals update live.\n\
                  \n\
                  Examples:\n\
                    quoteboard                                   # Run TUI (default)\n\
                    quoteboard --preset advanced                 # Start from a preset\n\
                    quoteboard quote --preset essential          # Print a quote\n\
                    quoteboard quote --toggle rep --hours meta=0.5 --json\n\
                    quoteboard catalog                           # List services and ids\n\
                  \n\
                  Environment Variables:\n\
                    QUOTEBOARD_CONFIG                # Settings file (default: <config dir>/quoteboard/config.toml)\n\
                    QUOTEBOARD_LOG                   # Log filter, e.g. debug (default: warn)\n\
                    QUOTEBOARD_NO_COLOR              # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Settings file
    #[arg(long, env = "QUOTEBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Hourly rate in euros (overrides settings)
    #[arg(long, env = "QUOTEBOARD_RATE")]
    rate: Option<f64>,

    /// Number of standard pages (overrides settings)
    #[arg(long, env = "QUOTEBOARD_PAGES")]
    pages: Option<f64>,

    /// Number of pillar pages (overrides settings)
    #[arg(long, env = "QUOTEBOARD_PILLAR_PAGES")]
    pillar_pages: Option<f64>,

    /// Initial preset: essential, advanced or premium
    #[arg(long, env = "QUOTEBOARD_PRESET")]
    preset: Option<String>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "QUOTEBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print a quote and exit
    Quote {
        /// Toggle a service by id (repeatable, applied after the preset)
        #[arg(long, short = 't')]
        toggle: Vec<String>,
        /// Override hours as SERVICE=HOURS (repeatable, applied last)
        #[arg(long = "hours", short = 'H')]
        hours: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List category groups and services
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode.unwrap_or(Mode::Tui);

    init_tracing(cli.log_file.as_deref(), matches!(mode, Mode::Tui), cli.no_color)?;

    // An explicit --config must exist; the default location may be absent
    let mut settings = Settings::load_from(cli.config.as_deref()).with_context(|| {
        let path = cli.config.clone().or_else(default_settings_path);
        match path {
            Some(path) => format!("Failed to load settings from {}", path.display()),
            None => "Failed to load settings".to_string(),
        }
    })?;

    // Flags win over the file
    settings.hourly_rate = cli.rate.or(settings.hourly_rate);
    settings.standard_pages = cli.pages.or(settings.standard_pages);
    settings.pillar_pages = cli.pillar_pages.or(settings.pillar_pages);
    settings.preset = cli.preset.or(settings.preset);

    match mode {
        Mode::Tui => run_tui(&settings)?,
        Mode::Quote {
            toggle,
            hours,
            json,
        } => run_quote(&settings, &toggle, &hours, json, cli.no_color)?,
        Mode::Catalog { json } => run_catalog(json, cli.no_color),
    }

    Ok(())
}

/// Initialize the global subscriber
///
/// Filter comes from `QUOTEBOARD_LOG` (default `warn`). The TUI owns the
/// terminal, so it only logs when a file is given.
fn init_tracing(log_file: Option<&Path>, tui: bool, no_color: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_env("QUOTEBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Arc::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(!no_color)
                        .with_target(true),
                )
                .init();
        }
    }

    Ok(())
}

fn run_tui(settings: &Settings) -> Result<()> {
    let engine = settings
        .build_engine()
        .context("Failed to initialize pricing engine")?;

    quoteboard_tui::run(engine, settings.color_scheme)
}

fn run_quote(
    settings: &Settings,
    toggles: &[String],
    hours: &[String],
    json: bool,
    no_color: bool,
) -> Result<()> {
    let mut engine = settings
        .build_engine()
        .context("Failed to initialize pricing engine")?;

    cli::apply_quote_flags(&mut engine, toggles, hours)?;
    tracing::debug!(active = engine.active_count(), "quote assembled");

    println!("{}", cli::format_quote(&engine.snapshot(), json, no_color));
    Ok(())
}

fn run_catalog(json: bool, no_color: bool) {
    println!(
        "{}",
        cli::format_catalog(&Catalog::builtin(), json, no_color)
    );
}
