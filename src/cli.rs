use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;

/// shoplist - a single-screen shopping list for the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "shoplist")]
#[command(about = "Keep a shopping list in your terminal")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the list is stored in (overrides the settings file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Write logs to this file instead of <data-dir>/shoplist.log
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keep the list in memory only; nothing is read or written
    #[arg(long)]
    pub memory: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply command line overrides on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(file) = &self.log_file {
            settings.log_file = Some(file.clone());
        }
        if self.memory {
            settings.ephemeral = true;
        }
        settings
    }
}
