//! Alternating turn invariant: players alternate Maru, Batsu, Maru, ...

use super::Invariant;
use crate::{Cell, GameEngine, Player};

/// Invariant: players alternate turns.
///
/// The n-th accepted move holds Maru's mark when n is even and Batsu's when
/// it is odd, and the player to move follows the same parity.
pub struct AlternatingTurnInvariant;

fn expected(moves: usize) -> Player {
    if moves % 2 == 0 {
        Player::Maru
    } else {
        Player::Batsu
    }
}

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let marks_alternate = history
            .iter()
            .enumerate()
            .all(|(n, &coord)| engine.cell(coord) == Cell::Occupied(expected(n)));

        marks_alternate && engine.current_player() == expected(history.len())
    }

    fn description() -> &'static str {
        "Players alternate turns (Maru, Batsu, Maru, ...)"
    }
}
