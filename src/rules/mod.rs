//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so any snapshot, not only the
//! selected one, can be evaluated.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, evaluate};
