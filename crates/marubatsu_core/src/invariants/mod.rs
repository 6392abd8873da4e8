//! First-class invariants for the maru-batsu engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds and they can be tested
//! independently.

pub mod alternating_turn;
pub mod history_consistent;
pub mod remaining_cells;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use remaining_cells::RemainingCellsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    RemainingCellsInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, GameEngine, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [0, 4, 2].map(|i| Coord::ALL[i]);
        let engine = GameEngine::replay(&moves).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new();
        engine.place(Coord::CENTER);

        // Sneak an extra mark in behind the engine's back.
        engine.board.set(Coord::TOP_LEFT, Cell::Occupied(Player::Batsu));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == RemainingCellsInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (RemainingCellsInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameEngine::new()).is_ok());
    }
}
