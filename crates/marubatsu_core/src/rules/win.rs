//! Win detection for maru-batsu.
//!
//! A line is complete when all three of its cells hold the same mark.

use super::super::{Board, Cell, Coord, Player, SIZE};
use tracing::instrument;

fn line_winner(board: &Board, line: [(usize, usize); SIZE]) -> Option<Player> {
    let [first, rest @ ..] = line.map(|(row, column)| board.rows()[row][column]);
    match first {
        Cell::Occupied(player) if rest.iter().all(|&cell| cell == first) => Some(player),
        _ => None,
    }
}

/// Returns the player completing `row`, if any.
pub fn row_winner(board: &Board, row: usize) -> Option<Player> {
    if row >= SIZE {
        return None;
    }
    line_winner(board, [(row, 0), (row, 1), (row, 2)])
}

/// Returns the player completing `column`, if any.
pub fn column_winner(board: &Board, column: usize) -> Option<Player> {
    if column >= SIZE {
        return None;
    }
    line_winner(board, [(0, column), (1, column), (2, column)])
}

/// Returns the player completing the top-left to bottom-right diagonal.
pub fn main_diagonal_winner(board: &Board) -> Option<Player> {
    line_winner(board, [(0, 0), (1, 1), (2, 2)])
}

/// Returns the player completing the bottom-left to top-right diagonal.
pub fn anti_diagonal_winner(board: &Board) -> Option<Player> {
    line_winner(board, [(2, 0), (1, 1), (0, 2)])
}

/// Checks for a winner after a mark was placed at `last`.
///
/// Lines are checked in a fixed order, stopping at the first complete one:
/// the row of `last`, its column, the main diagonal, then the anti-diagonal.
/// A diagonal is only checked when `last` lies on it; no other line can have
/// been completed by this mark. The center lies on both.
#[instrument(skip(board), fields(last = %last))]
pub fn winner_through(board: &Board, last: Coord) -> Option<Player> {
    row_winner(board, last.row())
        .or_else(|| column_winner(board, last.column()))
        .or_else(|| {
            last.on_main_diagonal()
                .then(|| main_diagonal_winner(board))
                .flatten()
        })
        .or_else(|| {
            last.on_anti_diagonal()
                .then(|| anti_diagonal_winner(board))
                .flatten()
        })
}
