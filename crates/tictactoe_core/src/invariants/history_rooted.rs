//! Root invariant: history starts from the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no move.
pub struct HistoryRootedAtEmptyBoard;

impl Invariant<GameState> for HistoryRootedAtEmptyBoard {
    fn holds(game: &GameState) -> bool {
        match game.history().get(0) {
            Some(first) => first.board() == &Board::new() && first.last_move().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}
