//! Terminal UI: a synchronous draw/read-key loop around [`App`].

mod app;
mod input;
mod ui;

pub use app::App;

use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(settings));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match input::action_for(key.code) {
                Some(action) => app.handle(action),
                None => debug!(key = ?key.code, "Unmapped key"),
            }
        }
    }
    Ok(())
}
