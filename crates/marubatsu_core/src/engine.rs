//! Game engine for maru-batsu.
//!
//! The engine owns the board, the player to move, the outcome and a counter
//! of empty cells. It is mutated only through [`GameEngine::place`] (or its
//! raw-coordinate form [`GameEngine::attempt_move`]); a finished game is
//! never reset, a new game is a new engine.

use super::coord::{CELL_COUNT, Coord};
use super::error::EngineError;
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::Outcome;
use super::rules;
use super::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Maru-batsu game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) outcome: Outcome,
    pub(crate) remaining_cells: usize,
    pub(crate) history: Vec<Coord>,
}

impl GameEngine {
    /// Creates a new game: empty board, Maru to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Maru,
            outcome: Outcome::Ongoing,
            remaining_cells: CELL_COUNT,
            history: Vec::new(),
        }
    }

    /// Replays a sequence of moves on a new game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MoveRejected`] for the first move the engine
    /// refuses.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Coord]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for (index, &coord) in moves.iter().enumerate() {
            if !engine.place(coord) {
                return Err(EngineError::MoveRejected { coord, index });
            }
        }
        Ok(engine)
    }

    /// Places the current player's mark at `coord`.
    ///
    /// Returns `false` without touching any state when the game is over or
    /// the cell is taken. Both cases call for the same reaction from a host
    /// (ignore the input), so they are not told apart.
    #[instrument(skip(self), fields(coord = %coord, player = %self.current_player))]
    pub fn place(&mut self, coord: Coord) -> bool {
        if self.outcome.is_terminal() {
            debug!(outcome = %self.outcome, "Move rejected: game is over");
            return false;
        }
        if !self.board.is_empty(coord) {
            debug!("Move rejected: cell is occupied");
            return false;
        }

        let mover = self.current_player;
        self.board.set(coord, Cell::Occupied(mover));
        self.remaining_cells -= 1;
        self.history.push(coord);
        self.current_player = mover.opponent();
        self.outcome = self.evaluate(coord);

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        }
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after move"
        );
        true
    }

    /// Places a mark at raw `(row, column)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] when either coordinate is
    /// outside the board; nothing is mutated in that case.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, row: usize, column: usize) -> Result<bool, EngineError> {
        let coord = Coord::new(row, column)?;
        Ok(self.place(coord))
    }

    // The winner is the player who just moved, i.e. the mark at `last`.
    fn evaluate(&self, last: Coord) -> Outcome {
        if let Some(winner) = rules::winner_through(&self.board, last) {
            Outcome::Won(winner)
        } else if self.remaining_cells == 0 {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board.get(coord)
    }

    /// Returns the cell at raw `(row, column)` coordinates.
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, EngineError> {
        Ok(self.cell(Coord::new(row, column)?))
    }

    /// Returns the player to move.
    ///
    /// Still flips on the final move, so after a win this names the loser.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of empty cells left.
    pub fn remaining_cells(&self) -> usize {
        self.remaining_cells
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Coordinates that would currently be accepted.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.board.is_empty(coord))
            .collect()
    }

    /// Takes a serializable view of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self
                .board
                .rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.player().map(|p| p.glyph().to_string()))
                        .collect()
                })
                .collect(),
            current_player: self.current_player,
            outcome: self.outcome,
            remaining_cells: self.remaining_cells,
            history: self.history.iter().map(|coord| coord.index()).collect(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain, serializable view of a [`GameEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Rows of glyphs, `None` for empty cells.
    pub board: Vec<Vec<Option<String>>>,
    /// Player to move.
    pub current_player: Player,
    /// Game outcome.
    pub outcome: Outcome,
    /// Number of empty cells.
    pub remaining_cells: usize,
    /// Accepted moves as row-major indices.
    pub history: Vec<usize>,
}
