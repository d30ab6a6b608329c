//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: Squares are never overwritten or cleared.
///
/// Every snapshot after the first differs from its predecessor in exactly
/// one square, which goes from empty to occupied.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.windows(2).all(|pair| {
            let mut added = 0;
            for pos in Position::ALL {
                match (pair[0].get(pos), pair[1].get(pos)) {
                    (before, after) if before == after => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
