//! Command-line interface for the tictactoe binary.

use crate::move_list::SortOrder;
use crate::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a clickable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with rewindable history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show the move list latest-first
    #[arg(long)]
    pub descending: bool,

    /// Hide the (row, column) suffix in the move list
    #[arg(long)]
    pub no_coordinates: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(log_file) = &self.log_file {
            settings = settings.with_log_file(log_file.clone());
        }
        if self.descending {
            settings = settings.with_sort_order(SortOrder::Descending);
        }
        if self.no_coordinates {
            settings = settings.with_show_coordinates(false);
        }
        settings
    }
}
