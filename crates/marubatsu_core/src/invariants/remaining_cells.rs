//! Remaining-cells invariant: the counter matches the board.

use super::Invariant;
use crate::GameEngine;

/// Invariant: the engine's empty-cell counter equals the number of empty
/// cells on the board.
pub struct RemainingCellsInvariant;

impl Invariant<GameEngine> for RemainingCellsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.remaining_cells() == engine.board().empty_count()
    }

    fn description() -> &'static str {
        "Remaining-cell counter matches empty cells on the board"
    }
}
