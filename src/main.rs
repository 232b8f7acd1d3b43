//! Client Review TUI - terminal wizard for a financial advisor's client review
//!
//! Collects a client profile across nine steps, persists every change, embeds
//! illustration files and exports a one-page summary PDF.

mod app;
mod attachments;
mod config;
mod error;
mod export;
mod platform;
mod state;
mod store;
mod ui;

use anyhow::Result;
use app::App;
use attachments::FsReader;
use config::WizardConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use store::{FileBackend, ProfileStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "wizard.log";

#[tokio::main]
async fn main() -> Result<()> {
    let config = WizardConfig::load();
    let data_dir = config
        .as_ref()
        .ok()
        .and_then(WizardConfig::resolved_data_dir);
    init_logging(data_dir.as_deref());

    let config = config.unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable config: {err}");
        WizardConfig::default()
    });
    let data_dir = config.resolved_data_dir();

    let store = match &data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "using profile store");
            ProfileStore::new(FileBackend::new(dir))
        }
        None => {
            tracing::warn!("no data directory available, changes will not be kept");
            ProfileStore::in_memory()
        }
    };
    let mut app = App::new(store, Arc::new(FsReader), config.resolved_export_dir());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("wizard exited with error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to `<data_dir>/wizard.log`; the alternate screen hides stderr
fn init_logging(data_dir: Option<&Path>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "client_review_tui=info".into());
    let log_file = data_dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("wizard closed");
            return Ok(());
        }
    }
}
