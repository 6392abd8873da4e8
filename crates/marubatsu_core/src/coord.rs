//! Bounded board coordinates.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

const LABELS: [&str; CELL_COUNT] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

/// A (row, column) position on the board, both in `0..3`.
///
/// A `Coord` can only be built in range, so indexing the board with one
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    column: usize,
}

impl Coord {
    /// Top-left corner.
    pub const TOP_LEFT: Coord = Coord::at(0, 0);
    /// Top-right corner.
    pub const TOP_RIGHT: Coord = Coord::at(0, 2);
    /// Center cell.
    pub const CENTER: Coord = Coord::at(1, 1);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Coord = Coord::at(2, 0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Coord = Coord::at(2, 2);

    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; CELL_COUNT] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a coordinate, rejecting anything outside the board.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, EngineError> {
        if row >= SIZE || column >= SIZE {
            return Err(EngineError::InvalidCoordinate { row, column });
        }
        Ok(Self::at(row, column))
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidIndex(index))
    }

    /// Parses a keypad number (1-9) or a label such as `"center"`.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(|i| Self::from_index(i).ok());
        }

        Self::ALL
            .iter()
            .copied()
            .find(|coord| coord.label().eq_ignore_ascii_case(s))
    }

    /// Row, from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, from the left.
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.column
    }

    /// Human-readable label, e.g. `"Top-left"`.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Lies on the bottom-left to top-right diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.column == SIZE - 1
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = EngineError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, column)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.column)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
