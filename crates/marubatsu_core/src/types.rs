//! Core domain types for maru-batsu.

use super::coord::{Coord, SIZE};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Maru, drawn as a circle (goes first).
    Maru,
    /// Batsu, drawn as a cross (goes second).
    Batsu,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Maru => Player::Batsu,
            Player::Batsu => Player::Maru,
        }
    }

    /// Default single-character glyph for this player's mark.
    pub fn glyph(self) -> &'static str {
        match self {
            Player::Maru => "O",
            Player::Batsu => "X",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A cell on the maru-batsu board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 maru-batsu board.
///
/// Only the engine writes to a board; everything else sees it through `&Board`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.column()]
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.column()] = cell;
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns the cells row by row.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Counts the empty cells by scanning the grid.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Formats the board as a human-readable grid, drawing marks with `glyph`.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn render_with<'g>(&self, glyph: impl Fn(Player) -> &'g str) -> String {
        let rows: Vec<String> = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| match cell {
                        Cell::Empty => (row * SIZE + column + 1).to_string(),
                        Cell::Occupied(player) => glyph(*player).to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }
}
