//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in evaluation order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed triple and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The player holding all three squares.
    pub winner: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl WinLine {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first completed triple on the board.
///
/// Triples are checked in [`LINES`] order, so a board with more than one
/// completed line reports the earliest.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(winner) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinLine { winner, line })
            }
            _ => None,
        }
    })
}
