//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file (defaults are used if it does not exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// List history newest first
        #[arg(long)]
        descending: bool,
    },

    /// Replay a move list and print every board
    Replay {
        /// Positions as indices 0-8 or labels such as `center`, comma separated
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the replay as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictactoe.toml"),
            descending: false,
        }
    }
}
