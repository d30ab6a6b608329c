//! Moves and the errors raised when they are rejected.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A move rejected by the selected board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The selected board already has a winner or no empty squares.
    #[display("Game is already over")]
    GameOver,
}

/// A history index past the last recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move #{} is out of range (history has {} entries)", requested, len)]
pub struct OutOfRange {
    /// The move number that was asked for.
    pub requested: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// Any error raised while driving a game from external input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A move was rejected.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// A history index was out of range.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),

    /// Input that names no board position.
    #[display("Unknown position: {:?}", _0)]
    #[from(ignore)]
    UnknownPosition(#[error(not(source))] String),
}
