//! Game state machine with a rewindable history.
//!
//! [`GameState`] owns the full list of snapshots and a pointer to the one
//! currently shown. Three transitions mutate it:
//!
//! - [`GameState::play`] places the turn's mark, discarding any snapshots
//!   after the current step first
//! - [`GameState::jump_to`] moves the pointer without touching history
//! - [`GameState::reset`] starts over from an empty board
//!
//! Everything else (winner, draw, turn, status line) is derived from the
//! current snapshot on demand.

use super::error::GameError;
use super::history::{History, Snapshot};
use super::invariants::{
    CurrentStepInRange, HistoryRootedAtEmptyBoard, InvariantSet, SingleMarkPerStep,
};
use super::rules::{self, WinResult};
use super::{Board, Player, Position};
use tracing::{debug, instrument};

/// What a call to [`GameState::play`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The mark was placed and a new snapshot appended.
    Placed {
        /// Mark that was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// Ignored: the current snapshot already has a winner.
    IgnoredGameOver,
    /// Ignored: the target square is occupied.
    IgnoredOccupied,
}

impl PlayOutcome {
    /// True if the play changed the game state.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}

/// Status of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// A player has three in a row.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Board full, no winner.
    #[display("Draw!")]
    Draw,
    /// Game continues with the given player to move.
    #[display("Next player: {}", _0)]
    InProgress(Player),
}

/// Complete game state: history of snapshots plus the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    current_step: usize,
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Plays the current turn's mark at `pos`.
    ///
    /// Silently ignored (no state change) if the current snapshot already
    /// has a winner or the square is occupied. Otherwise any snapshots
    /// after the current step are discarded, the new snapshot is appended,
    /// and the current step advances to it.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play(&mut self, pos: Position) -> PlayOutcome {
        let board = *self.board();

        if rules::detect(&board).winner().is_some() {
            debug!(%board, "Ignoring play after game over");
            return PlayOutcome::IgnoredGameOver;
        }

        if !board.is_empty(pos) {
            debug!(%board, "Ignoring play on occupied square");
            return PlayOutcome::IgnoredOccupied;
        }

        let player = self.turn();
        let next = board.with_mark(pos, player);
        let discarded = self.history.len() - 1 - self.current_step;
        self.current_step = self
            .history
            .branch(self.current_step, Snapshot::new(next, pos));

        debug!(
            ?player,
            discarded,
            new_step = self.current_step,
            board = %next,
            "Placed mark"
        );
        self.debug_check_invariants();

        PlayOutcome::Placed {
            player,
            position: pos,
        }
    }

    /// Moves the current step to `step` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] and leaves the state unchanged
    /// if `step` is not a recorded snapshot.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if step >= len {
            return Err(GameError::StepOutOfRange { step, len });
        }

        self.current_step = step;
        debug!(step, "Jumped");
        self.debug_check_invariants();
        Ok(())
    }

    /// Discards all history and returns to the empty board.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn reset(&mut self) {
        self.history = History::new();
        self.current_step = 0;
        debug!("Reset game");
        self.debug_check_invariants();
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the current step index.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        // current_step < history.len() is maintained by every transition
        &self.history.snapshots()[self.current_step]
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Winner and winning line for the current board.
    pub fn win_result(&self) -> WinResult {
        rules::detect(self.board())
    }

    /// True when the current board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// The player to move at the current step.
    pub fn turn(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// True if playing at `pos` would place a mark.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.board().is_empty(pos) && self.win_result().winner().is_none()
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.win_result().winner() {
            GameStatus::Won(winner)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.turn())
        }
    }

    /// Status line shown to players.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            <(HistoryRootedAtEmptyBoard, SingleMarkPerStep, CurrentStepInRange) as InvariantSet<
                GameState,
            >>::check_all(self),
            Ok(())
        );
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: History, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
