//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use marubatsu_core::{Coord, SIZE};

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(SIZE - 1), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Coord::new(row, column).unwrap_or(cursor)
}

/// Maps keypad digits 1-9 to cells, top-left first.
pub fn digit_cell(key: KeyCode) -> Option<Coord> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| Coord::from_index(i).ok()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Up), Coord::new(0, 1).unwrap());
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Right), Coord::new(1, 2).unwrap());
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Up), Coord::TOP_LEFT);
        assert_eq!(move_cursor(Coord::TOP_LEFT, KeyCode::Left), Coord::TOP_LEFT);
        assert_eq!(move_cursor(Coord::BOTTOM_RIGHT, KeyCode::Down), Coord::BOTTOM_RIGHT);
        assert_eq!(move_cursor(Coord::CENTER, KeyCode::Enter), Coord::CENTER);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(Coord::TOP_LEFT));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(Coord::BOTTOM_RIGHT));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Char('q')), None);
    }
}
