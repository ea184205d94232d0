//! Terminal front end for rewindable tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: the session state; turns key and mouse events into
//!   [`tictactoe_core::GameState`] transitions
//! - **UI**: stateless ratatui rendering plus a [`ScreenLayout`] shared
//!   with mouse hit-testing
//! - **Settings**: optional TOML file and CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod move_list;
mod settings;

pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use input::move_cursor;
pub use move_list::{MoveEntry, SortOrder, move_entries, move_label};
pub use settings::{ConfigError, Settings};
pub use ui::{Hit, ScreenLayout};
