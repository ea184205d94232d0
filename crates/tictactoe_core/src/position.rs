//! Board positions and the linear-index to row/column mapping.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// 1-based row and column of a cell, as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("r{row}, c{col}")]
pub struct RowCol {
    /// Row, 1-3 from the top.
    pub row: usize,
    /// Column, 1-3 from the left.
    pub col: usize,
}

/// Converts a linear cell index (0-8) to its 1-based row and column.
///
/// # Errors
///
/// Returns [`GameError::InvalidIndex`] if `index` is greater than 8.
#[instrument]
pub fn to_row_col(index: usize) -> Result<RowCol, GameError> {
    if index >= Position::ALL.len() {
        return Err(GameError::InvalidIndex { index });
    }
    Ok(RowCol {
        row: index / 3 + 1,
        col: index % 3 + 1,
    })
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidIndex`] if `index` is greater than 8.
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, GameError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex { index })
    }

    /// Creates position from a 1-based keypad digit ('1' is top-left).
    pub fn from_digit(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based row and column of this position.
    pub fn row_col(self) -> RowCol {
        let index = self.to_index();
        RowCol {
            row: index / 3 + 1,
            col: index % 3 + 1,
        }
    }
}
