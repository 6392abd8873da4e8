//! History consistency invariant: the move list explains the board.

use super::Invariant;
use crate::{Coord, GameEngine};

/// Invariant: every occupied cell appears exactly once in the history, and
/// nothing else does.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let occupied = Coord::ALL
            .iter()
            .filter(|&&coord| !engine.cell(coord).is_empty())
            .count();

        let mut seen = [false; crate::CELL_COUNT];
        let distinct = history
            .iter()
            .all(|coord| !std::mem::replace(&mut seen[coord.index()], true));

        distinct
            && occupied == history.len()
            && history.iter().all(|&coord| !engine.cell(coord).is_empty())
    }

    fn description() -> &'static str {
        "Move history matches the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replayed_game_holds() {
        let moves = [4, 0, 8].map(|i| Coord::ALL[i]);
        let engine = GameEngine::replay(&moves).unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_lost_history_violates() {
        let mut engine = GameEngine::new();
        engine.place(Coord::CENTER);
        engine.history.clear();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
