//! Step invariant: the current step names a recorded snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_step < history.len()`.
pub struct CurrentStepInRange;

impl Invariant<GameState> for CurrentStepInRange {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded snapshot"
    }
}
