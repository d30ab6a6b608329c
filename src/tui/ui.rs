//! Rendering for the terminal UI.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_history::{Board, Player, Position, Square};

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
        ])
        .split(f.area());

    let status = Paragraph::new(app.status_line())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, outer[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(outer[1]);

    let board_block = Block::default().borders(Borders::ALL).title("Board");
    let board_area = board_block.inner(body[0]);
    f.render_widget(board_block, body[0]);
    render_board(f, board_area, app);

    render_history(f, body[1], app);

    let help = Paragraph::new(
        "arrows/1-9 move • enter place • u/n step • home/end jump • s sort • r restart • q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, outer[2]);
}

fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .history_entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(entry.label)).style(style)
        })
        .collect();

    let title = format!("History [s: {}]", app.order().toggle_label());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

/// Renders the tic-tac-toe board.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.game().current_board();
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, app, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, app, 2);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_square(f, cols[col * 2], board, app, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, app: &App, pos: Position) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty if app.show_hints() => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if app.is_winning_square(pos) {
        style = style.bg(Color::Yellow);
    }
    if app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in its 3-line cell.
    let text = format!("\n{}", text);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
