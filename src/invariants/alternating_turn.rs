//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, turn};

/// Invariant: The mark added by move `n` belongs to `turn(n - 1)`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        (1..game.history_len()).all(|n| match game.move_at(n) {
            Some(mov) => mov.player == turn(n - 1),
            None => false,
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
