//! Step-diff invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// The changed square is the snapshot's `last_move`, it was empty before,
/// and it now holds the mark of the player whose turn it was (X on even
/// steps, O on odd ones).
pub struct SingleMarkPerStep;

impl Invariant<GameState> for SingleMarkPerStep {
    fn holds(game: &GameState) -> bool {
        game.history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let Some(pos) = after.last_move() else {
                    return false;
                };

                let changed = before
                    .board()
                    .squares()
                    .iter()
                    .zip(after.board().squares())
                    .filter(|(a, b)| a != b)
                    .count();

                changed == 1
                    && before.board().is_empty(pos)
                    && after.board().get(pos).player() == Some(Player::for_step(step))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, at last_move, for the player to move"
    }
}
