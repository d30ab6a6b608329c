//! Cursor invariant: the selected move indexes a recorded snapshot.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: History starts from the empty board and the selected move
/// points into it.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.first() == Some(&Board::new()) && game.current_move < game.history.len()
    }

    fn description() -> &'static str {
        "History starts empty and the selected move is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut game = GameState::new();
        game.history.clear();
        game.current_move = 0;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut game = GameState::new();
        game.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
