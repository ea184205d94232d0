//! Move list entries and their display order.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tictactoe_core::{GameState, Snapshot};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Only affects rendering; history and the current step are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the short label shown on the sort control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Toggles between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// History step shown at display `row`, for a list of `len` entries.
    pub fn step_at(self, row: usize, len: usize) -> Option<usize> {
        if row >= len {
            return None;
        }
        Some(match self {
            Self::Ascending => row,
            Self::Descending => len - 1 - row,
        })
    }

    /// Display row of history `step`, for a list of `len` entries.
    ///
    /// `step` must be less than `len`.
    pub fn row_of(self, step: usize, len: usize) -> usize {
        match self {
            Self::Ascending => step,
            Self::Descending => len - 1 - step,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this is the step currently on the board.
    current: bool,
}

/// Label for the move-list entry of `snapshot` at `step`.
///
/// Step 0 is "Go to game start"; later steps are "Go to move #N",
/// followed by the row and column of the move when `show_coordinates`
/// is set.
pub fn move_label(step: usize, snapshot: &Snapshot, show_coordinates: bool) -> String {
    if step == 0 {
        return "Go to game start".to_string();
    }

    match snapshot.last_move() {
        Some(pos) if show_coordinates => format!("Go to move #{step} ({})", pos.row_col()),
        _ => format!("Go to move #{step}"),
    }
}

/// Builds the move list in display order.
#[instrument(skip(game), fields(len = game.history().len()))]
pub fn move_entries(game: &GameState, order: SortOrder, show_coordinates: bool) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(step, snapshot)| MoveEntry {
            step,
            label: move_label(step, snapshot, show_coordinates),
            current: step == game.current_step(),
        })
        .collect();

    if order == SortOrder::Descending {
        entries.reverse();
    }
    entries
}
