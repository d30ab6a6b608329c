//! Tic-tac-toe with move history - terminal front end.

#![warn(missing_docs)]

mod cli;
mod settings;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use settings::Settings;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tictactoe_history::{ReplayReport, Status, parse_positions, replay};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Logs go to a file when one is given so the TUI screen stays clean.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Run the terminal UI
#[instrument(skip_all, fields(config_path = %config.display()))]
fn run_play(config: PathBuf, descending: bool) -> Result<()> {
    let mut settings = Settings::load_or_default(&config)?;
    if descending {
        settings = settings.with_descending_history(true);
    }
    info!(?settings, "Settings resolved");
    tui::run_tui(settings)
}

/// Replay a move list and print the result
#[instrument(skip(moves))]
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let positions = parse_positions(moves)?;
    let report = replay(&positions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn format_report(report: &ReplayReport) -> String {
    let mut out = String::new();
    for (n, board) in report.boards.iter().enumerate() {
        let heading = match n.checked_sub(1).and_then(|i| report.moves.get(i)) {
            Some(mov) => format!("Move #{}: {}", n, mov),
            None => "Game start".to_string(),
        };
        out.push_str(&format!("{}\n{}\n\n", heading, board.display()));
    }
    out.push_str(&report.status.to_string());
    if let Status::Winner(win) = report.status {
        let line: Vec<_> = win.line.iter().map(|p| p.label()).collect();
        out.push_str(&format!(" ({})", line.join(", ")));
    }
    out.push('\n');
    out
}
