//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::detect;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// Checks if the board is a draw: full with no three in a row.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && detect(board).winner().is_none()
}
