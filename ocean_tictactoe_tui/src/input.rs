//! Cursor movement and digit mapping for keyboard navigation.

use crossterm::event::KeyCode;
use ocean_tictactoe::Position;

/// Moves the cursor one cell, clamped to the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to board cells, row-major from the top-left.
pub fn position_for_digit(digit: char) -> Option<Position> {
    let value = digit.to_digit(10)? as usize;
    if value == 0 {
        return None;
    }
    Position::from_index(value - 1)
}
