//! Board snapshots and the rewindable move history.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One historical board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The snapshot every game starts from: an empty board, no move.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Creates a snapshot reached by playing `last_move`.
    pub fn new(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position played to reach this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Ordered, never-empty sequence of snapshots.
///
/// `snapshots[0]` is always [`Snapshot::initial`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Returns all snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over snapshots in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Discards every snapshot after `step` and appends `snapshot`.
    ///
    /// Returns the step index of the appended snapshot.
    pub(crate) fn branch(&mut self, step: usize, snapshot: Snapshot) -> usize {
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
