//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are checked after each move in debug builds and can
//! be tested independently.

use crate::GameState;

mod alternating_turn;
mod cursor_in_bounds;
mod monotonic_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        tracing::warn!(invariant = I::description(), "Invariant violated");
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

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    CursorInBoundsInvariant,
    MonotonicHistoryInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game =
            GameState::replay(&[Position::TopLeft, Position::Center, Position::TopRight]).unwrap();
        game.select_move(1).unwrap();
        game.apply_move(Position::BottomRight).unwrap();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::replay(&[Position::Center]).unwrap();
        // O placed where X should have moved, and the cursor points past the end.
        game.history[1] = Board::new().with_mark(Position::Center, Player::O);
        game.current_move = 5;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicHistoryInvariant, AlternatingTurnInvariant);
        let game = GameState::replay(&[Position::Center]).unwrap();
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
