//! shoplist - Main entry point
//!
//! Resolves settings, sets up file logging, opens the stored list and runs
//! the terminal UI.

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use shoplist::cli::Cli;
use shoplist::{
    App, FileStore, KeyValueStore, ListController, ListStore, MemoryStore, Settings,
    TerminalSession,
};

/// Initialize file logging; the terminal belongs to the UI.
fn init_logger(settings: &Settings) -> Result<()> {
    let path = settings.log_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    // RUST_LOG overrides the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Defaults, then the settings file, then command line overrides
fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let base = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    let settings = cli.apply(base);
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn open_list(settings: &Settings) -> ListController {
    let backend: Box<dyn KeyValueStore> = if settings.ephemeral {
        info!("Using in-memory storage; the list will not be saved");
        Box::new(MemoryStore::new())
    } else {
        info!("Using storage directory {:?}", settings.data_dir);
        Box::new(FileStore::new(&settings.data_dir))
    };
    ListController::new(ListStore::open(backend, settings.storage_key.clone()))
}

/// Run the TUI; the session restores the terminal however the app exits
fn run_tui(controller: ListController) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let _session = TerminalSession::enter()?;

    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("Failed to create terminal")?;
    let mut app = App::new(controller);
    app.run(&mut terminal).context("Application error")
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let settings = resolve_settings(&cli)?;

    init_logger(&settings)?;
    info!("shoplist {} starting up", env!("CARGO_PKG_VERSION"));
    debug!("Resolved settings: {:?}", settings);

    let controller = open_list(&settings);
    run_tui(controller)?;

    info!("shoplist exiting");
    Ok(())
}
