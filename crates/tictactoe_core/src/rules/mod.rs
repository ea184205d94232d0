//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board.
//! Rules are separated from board storage so the game state and the
//! renderer can both ask the same questions of any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, detect};
