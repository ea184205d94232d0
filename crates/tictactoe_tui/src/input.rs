//! Cursor movement for keyboard navigation of the board.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge; other keys leave it unchanged.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        _ => return cursor,
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
