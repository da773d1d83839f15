//! Command-line interface for rewind_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play, time-travel and branch from any earlier move
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with full move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Apply a list of moves to a new game and print the resulting view
    Replay {
        /// Square indices (0-8) in play order, comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to view after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
