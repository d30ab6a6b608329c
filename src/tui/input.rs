//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Place a mark at the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific square.
    Place(Position),
    /// Select the previous history entry.
    StepBack,
    /// Select the next history entry.
    StepForward,
    /// Select the empty board.
    JumpToStart,
    /// Select the latest board.
    JumpToLatest,
    /// Flip the history list order.
    ToggleOrder,
    /// Start over.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::Place)
        }
        KeyCode::Char('u') | KeyCode::Backspace => Some(Action::StepBack),
        KeyCode::Char('n') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::End => Some(Action::JumpToLatest),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
