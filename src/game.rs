//! Game state with a branching history of board snapshots.
//!
//! The state is fully captured by the list of snapshots and the index of the
//! selected one. Selecting an older snapshot is "time travel": nothing is
//! discarded until a move is made from there, at which point every snapshot
//! after the selected one is replaced by the new board.

use super::action::{IllegalMove, Move, OutOfRange};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{self, WinLine};
use super::{Board, Player, Position, Square, turn};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the selected board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Winner(WinLine),
    /// Every square is taken and nobody completed a line.
    Draw,
    /// The game continues with this player to move.
    InProgress(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(win) => Some(win.winner),
            _ => None,
        }
    }

    /// Returns true if no more moves can be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(win) => write!(f, "Winner: {}", win.winner),
            Status::Draw => write!(f, "Draw"),
            Status::InProgress(next) => write!(f, "Next player: {}", next),
        }
    }
}

/// Board history plus the selected move.
///
/// Invariants:
/// - `history` is never empty and starts with an empty board
/// - each snapshot adds exactly one mark, placed by [`turn`] of its predecessor
/// - `current_move < history.len()`
///
/// Deserialization rejects any state that breaks these invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Places the mark of the player to move on the selected board.
    ///
    /// Any snapshots after the selected one are dropped before the new board
    /// is appended, and the new board becomes the selected one.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] if the selected board is won or full
    /// - [`IllegalMove::SquareOccupied`] if `pos` is taken
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), IllegalMove> {
        let player = match self.status() {
            Status::InProgress(player) => player,
            status => {
                warn!(%status, "Move rejected, game is over");
                return Err(IllegalMove::GameOver);
            }
        };

        let board = self.current_board();
        if !board.is_empty(pos) {
            warn!(position = %pos, "Move rejected, square occupied");
            return Err(IllegalMove::SquareOccupied(pos));
        }

        let next = board.with_mark(pos, player);
        let discarded = self.history.len() - 1 - self.current_move;
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            %player,
            position = %pos,
            discarded,
            history_len = self.history.len(),
            "Move applied"
        );

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after move"
        );

        Ok(())
    }

    /// Selects a snapshot without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `move_number >= history_len()`.
    #[instrument(skip(self))]
    pub fn select_move(&mut self, move_number: usize) -> Result<(), OutOfRange> {
        if move_number >= self.history.len() {
            warn!(len = self.history.len(), "Selection out of range");
            return Err(OutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!("Move selected");
        Ok(())
    }

    /// Returns the status of the selected board.
    ///
    /// A completed line wins even on a full board.
    pub fn status(&self) -> Status {
        status_of(self.current_board(), self.current_move)
    }

    /// Returns the status of the latest snapshot, whatever is selected.
    pub fn latest_status(&self) -> Status {
        let last = self.history.len() - 1;
        status_of(&self.history[last], last)
    }

    /// Returns the snapshot after `move_number` moves.
    pub fn board_at(&self, move_number: usize) -> Option<&Board> {
        self.history.get(move_number)
    }

    /// Returns the selected snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the index of the selected snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the number of snapshots, including the initial empty board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns every snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the move that produced snapshot `move_number`.
    ///
    /// Snapshot 0 has no move; neither does an index past the end.
    pub fn move_at(&self, move_number: usize) -> Option<Move> {
        let before = self.history.get(move_number.checked_sub(1)?)?;
        let after = self.history.get(move_number)?;
        Position::ALL.iter().find_map(|&pos| match (before.get(pos), after.get(pos)) {
            (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
            _ => None,
        })
    }

    /// Returns every recorded move, including those after the selected one.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.history.len()).filter_map(|n| self.move_at(n)).collect()
    }

    /// Returns the empty squares on the selected board, or none once the
    /// game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Returns to the initial empty board, discarding all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(history_len = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, IllegalMove> {
        let mut game = Self::new();
        for &pos in positions {
            game.apply_move(pos)?;
        }
        Ok(game)
    }
}

fn status_of(board: &Board, move_number: usize) -> Status {
    if let Some(win) = rules::evaluate(board) {
        Status::Winner(win)
    } else if rules::is_full(board) {
        Status::Draw
    } else {
        Status::InProgress(turn(move_number))
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    current_move: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = String;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current_move: raw.current_move,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected deserialized game state");
            format!("Invalid game history: {}", descriptions)
        })?;
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
