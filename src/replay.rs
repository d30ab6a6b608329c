//! Headless replay of a recorded move list.

use super::action::{GameError, Move};
use super::game::{GameState, Status};
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Every snapshot of a replayed game and where it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Moves in play order.
    pub moves: Vec<Move>,
    /// Snapshots, starting from the empty board.
    pub boards: Vec<Board>,
    /// Status of the final snapshot.
    pub status: Status,
}

impl ReplayReport {
    /// Builds a report from a game's full history.
    pub fn from_game(game: &GameState) -> Self {
        Self {
            moves: game.moves(),
            boards: game.history().to_vec(),
            status: game.latest_status(),
        }
    }
}

/// Parses positions given as indices (0-8) or labels.
///
/// # Errors
///
/// Returns [`GameError::UnknownPosition`] for the first unparseable input.
pub fn parse_positions<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Position>, GameError> {
    inputs
        .iter()
        .map(|s| {
            let s = s.as_ref();
            Position::from_label_or_number(s).ok_or_else(|| GameError::UnknownPosition(s.to_string()))
        })
        .collect()
}

/// Replays `positions` from an empty board and reports every snapshot.
///
/// # Errors
///
/// Returns [`GameError::IllegalMove`] at the first rejected move.
#[instrument]
pub fn replay(positions: &[Position]) -> Result<ReplayReport, GameError> {
    let game = GameState::replay(positions)?;
    let report = ReplayReport::from_game(&game);
    info!(moves = report.moves.len(), status = %report.status, "Replay finished");
    Ok(report)
}
