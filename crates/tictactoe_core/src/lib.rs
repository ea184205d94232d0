//! Pure tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: [`detect`] finds the winner and winning line, [`is_draw`]
//!   checks for a full board without one
//! - **Indexing**: [`to_row_col`] maps a cell index to its 1-based row/column
//! - **History**: [`Snapshot`]s of every board reached, in play order
//! - **State**: [`GameState`] owns the history and the current step and
//!   exposes the `play`/`jump_to`/`reset` transitions
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.status_text(), "Next player: X");
//!
//! game.jump_to(1).unwrap();
//! assert_eq!(game.status_text(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use error::GameError;
pub use game::{GameState, GameStatus, PlayOutcome};
pub use history::{History, Snapshot};
pub use position::{Position, RowCol, to_row_col};
pub use rules::{LINES, WinResult, detect, is_draw, is_full};
pub use types::{Board, Player, Square};
