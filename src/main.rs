mod commands;
mod logging;
mod render;
mod sample;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calview_core::config::CalviewConfig;
use calview_core::event::{EventRecord, load_events};
use calview_core::view::ViewMode;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calview")]
#[command(about = "View your events by month, week, day or as a list")]
struct Cli {
    /// Events file (JSON array). Shows sample events if omitted
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    /// Config file (defaults to ~/.config/calview/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar
    Show {
        /// month, week, day or list
        #[arg(short, long, default_value = "month")]
        view: ViewMode,

        /// Date to show (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Use the expanded layout
        #[arg(long)]
        expanded: bool,

        /// Print the render description as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the details popup of one event
    Event {
        id: String,

        /// Window size as WIDTHxHEIGHT
        #[arg(long, default_value = "1280x800")]
        viewport: String,

        /// Clicked element as X,Y,WIDTH,HEIGHT
        #[arg(long, default_value = "580,400,120,24")]
        anchor: String,

        /// Print the popup as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a page by path, as the menu links do
    Open {
        /// Page path: /, /calendar or /profile
        #[arg(default_value = "/")]
        path: String,

        /// Show the menu instead of the page
        #[arg(long)]
        menu: bool,
    },
    /// Show or create the config file
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            view,
            date,
            expanded,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let events = load_event_records(cli.events.as_deref())?;
            let fallback = default_date(cli.events.as_deref());
            let date = parse_date(date.as_deref(), fallback)?;
            commands::show::run(config, &events, view, date, expanded, json)
        }
        Commands::Event {
            id,
            viewport,
            anchor,
            json,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let events = load_event_records(cli.events.as_deref())?;
            let viewport = commands::event::parse_size(&viewport)?;
            let anchor = commands::event::parse_rect(&anchor)?;
            commands::event::run(config, &events, &id, viewport, anchor, json)
        }
        Commands::Open { path, menu } => {
            let config = load_config(cli.config.as_deref())?;
            let events = load_event_records(cli.events.as_deref())?;
            let date = default_date(cli.events.as_deref());
            commands::open::run(config, &events, &path, menu, date)
        }
        Commands::Config { init } => commands::config::run(cli.config.as_deref(), init),
    }
}

fn load_config(path: Option<&Path>) -> Result<CalviewConfig> {
    let config = match path {
        Some(path) => CalviewConfig::load_from(path),
        None => CalviewConfig::load(),
    }
    .context("Failed to load config")?;

    tracing::debug!(
        visible_cap = config.visible_cap,
        modal_margin = config.modal_margin,
        "config loaded"
    );
    Ok(config)
}

fn load_event_records(path: Option<&Path>) -> Result<Vec<EventRecord>> {
    let events = match path {
        Some(path) => load_events(path)
            .with_context(|| format!("Failed to load events from {}", path.display()))?,
        None => {
            tracing::debug!("no events file, using sample events");
            sample::sample_events()
        }
    };

    tracing::debug!(count = events.len(), "events loaded");
    Ok(events)
}

/// Today, or the sample month when showing the built-in events.
fn default_date(events_path: Option<&Path>) -> NaiveDate {
    // The sample events are in the past; open on them rather than today
    match events_path {
        Some(_) => chrono::Local::now().date_naive(),
        None => sample::sample_date(),
    }
}

fn parse_date(date: Option<&str>, fallback: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(fallback),
    }
}
