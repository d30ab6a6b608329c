//! Tic-tac-toe with move history and time-travel replay.
//!
//! # Architecture
//!
//! - **GameState**: the list of board snapshots and the selected move
//! - **Rules**: pure win and draw evaluation of a single snapshot
//! - **Invariants**: properties every reachable history satisfies
//! - **Replay**: headless playback of a move list
//!
//! The terminal front end lives in the binary and only talks to the types
//! exported here.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Player, Position, Status};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::MiddleLeft,
//!             Position::Center, Position::BottomLeft] {
//!     game.apply_move(pos).unwrap();
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Time travel back to the start and branch.
//! game.select_move(0).unwrap();
//! game.apply_move(Position::Center).unwrap();
//! assert_eq!(game.history_len(), 2);
//! assert_eq!(game.status(), Status::InProgress(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
mod replay;
pub mod rules;
mod types;

pub use action::{GameError, IllegalMove, Move, OutOfRange};
pub use game::{GameState, Status};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicHistoryInvariant,
};
pub use position::Position;
pub use replay::{ReplayReport, parse_positions, replay};
pub use rules::{LINES, WinLine, evaluate, is_full};
pub use types::{Board, Player, Square, turn};
