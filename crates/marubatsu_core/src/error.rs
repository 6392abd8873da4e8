//! Engine error types.

use super::coord::Coord;

/// Errors raised for caller contract violations.
///
/// A move into an occupied cell, or after the game has ended, is not an
/// error: `GameEngine::place` simply returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Row or column outside `0..3`.
    #[display("Coordinate ({row}, {column}) is outside the 3x3 board")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// Row-major index outside `0..9`.
    #[display("Cell index {_0} is outside the board (must be 0-8)")]
    InvalidIndex(usize),

    /// A replayed move was rejected by the engine.
    #[display("Move {index} at {coord} was rejected")]
    MoveRejected {
        /// Coordinate of the rejected move.
        coord: Coord,
        /// Position of the move in the replayed sequence.
        index: usize,
    },
}

impl std::error::Error for EngineError {}
