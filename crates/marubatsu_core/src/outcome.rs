//! Game outcome.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Classification of a game, in progress or finished.
///
/// Every state other than `Ongoing` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is still being played.
    #[default]
    Ongoing,
    /// Player completed a line.
    Won(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once the game can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
