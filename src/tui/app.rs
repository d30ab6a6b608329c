//! Application state and logic.

use super::input::{Action, move_cursor};
use crate::settings::Settings;
use tictactoe_history::{GameState, Position, Status};
use tracing::{debug, instrument};

/// Display order of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Toggles between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort descending",
            Self::Descending => "Sort ascending",
        }
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Move number this row selects.
    pub move_number: usize,
    /// Text shown for the row.
    pub label: String,
    /// True for the selected move.
    pub is_current: bool,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    order: HistoryOrder,
    show_hints: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: Settings) -> Self {
        let order = if *settings.descending_history() {
            HistoryOrder::Descending
        } else {
            HistoryOrder::Ascending
        };
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            order,
            show_hints: *settings.show_hints(),
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the history order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Returns true if empty squares show their number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the status line.
    pub fn status_line(&self) -> String {
        let status = self.game.status();
        match &self.message {
            Some(message) => format!("{}  ({})", status, message),
            None => status.to_string(),
        }
    }

    /// Builds the history list in display order.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        let current = self.game.current_move();
        let mut entries: Vec<HistoryEntry> = (0..self.game.history_len())
            .map(|move_number| {
                let label = if move_number == current {
                    format!("You are at move #{}", move_number)
                } else if move_number > 0 {
                    format!("Go to move #{}", move_number)
                } else {
                    "Go to game start".to_string()
                };
                HistoryEntry {
                    move_number,
                    label,
                    is_current: move_number == current,
                }
            })
            .collect();

        if self.order == HistoryOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Returns true if `pos` is part of the winning line on the selected board.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        matches!(self.game.status(), Status::Winner(win) if win.contains(pos))
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        self.message = None;
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::StepBack => {
                if let Some(previous) = self.game.current_move().checked_sub(1) {
                    self.select(previous);
                }
            }
            Action::StepForward => self.select(self.game.current_move() + 1),
            Action::JumpToStart => self.select(0),
            Action::JumpToLatest => self.select(self.game.history_len() - 1),
            Action::ToggleOrder => self.order = self.order.toggle(),
            Action::Restart => {
                self.game.reset();
                self.cursor = Position::Center;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, pos: Position) {
        if let Err(e) = self.game.apply_move(pos) {
            debug!(error = %e, "Move ignored");
            self.message = Some(e.to_string());
        }
    }

    fn select(&mut self, move_number: usize) {
        // Stepping past either end is a no-op.
        if self.game.select_move(move_number).is_err() {
            debug!(move_number, "Selection ignored");
        }
    }
}
