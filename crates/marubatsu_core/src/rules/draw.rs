//! Draw detection for maru-batsu.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// A full board with no winner is a draw. The engine tracks remaining cells
/// itself; this scan is for callers holding only a board.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}
