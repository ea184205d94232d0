//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in tie-break order.
///
/// When an (illegal) board completes more than one line, the first
/// entry in this table wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinResult {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl WinResult {
    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the winning line; empty when there is no winner.
    pub fn line(&self) -> &[Position] {
        match &self.line {
            Some(line) => line,
            None => &[],
        }
    }

    /// Checks whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().contains(&pos)
    }
}

/// Checks the board for a winner.
///
/// Returns the first line (in [`LINES`] order) whose three squares hold
/// the same mark, together with that mark. Returns an empty result
/// otherwise.
#[instrument]
pub fn detect(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    WinResult::default()
}
