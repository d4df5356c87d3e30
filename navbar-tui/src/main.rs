//! dojonav: the dojo site's navigation bar in the terminal.
//!
//! Loads the menu catalog and breakpoint table (built-in or from JSON),
//! reads the session and events files in the background and renders the
//! bar at a viewport width derived from the terminal's column count.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use navbar::{BreakpointSet, Catalog, Navbar};
use navbar_tui::config::{self, Settings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dojonav", about = "Responsive ChessDojo navigation bar for the terminal")]
struct Cli {
    /// Session file (`{"status": ..., "user": ...}`). Missing means signed out.
    #[arg(long)]
    session: Option<PathBuf>,

    /// Events file used for the upcoming-meeting badge.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Replace the built-in member catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Replace the built-in breakpoint table.
    #[arg(long)]
    breakpoints: Option<PathBuf>,

    /// CSS pixels one terminal column stands for.
    #[arg(long)]
    px_per_column: Option<u32>,

    /// Pin the viewport to this many pixels, ignoring the terminal size.
    #[arg(short, long)]
    width: Option<u32>,

    /// Color theme: "light" or "dark".
    #[arg(long)]
    theme: Option<String>,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            session_path: self.session.unwrap_or(defaults.session_path),
            events_path: self.events.unwrap_or(defaults.events_path),
            catalog_path: self.catalog,
            breakpoints_path: self.breakpoints,
            px_per_column: self
                .px_per_column
                .filter(|px| *px > 0)
                .unwrap_or(defaults.px_per_column),
            fixed_width: self.width,
            theme: self.theme,
        }
    }
}

fn load_navbar(settings: &Settings) -> anyhow::Result<Navbar> {
    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::dojo(),
    };
    let breakpoints = match &settings.breakpoints_path {
        Some(path) => BreakpointSet::load(path)
            .with_context(|| format!("loading breakpoints from {}", path.display()))?,
        None => BreakpointSet::default(),
    };
    Ok(Navbar::new(catalog, Catalog::unauthenticated(), breakpoints))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Cli::parse().into_settings();

    // Set up tracing with file output; the terminal belongs to the UI
    let log_dir = config::get_log_dir();
    std::fs::create_dir_all(&log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&log_dir, "dojonav");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(?settings, "dojonav starting up");

    let navbar = load_navbar(&settings)?;
    navbar_tui::ui::run_app(settings, navbar).await?;

    tracing::info!("dojonav shutting down");
    Ok(())
}
