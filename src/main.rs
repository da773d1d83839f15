//! Rewind Tic-Tac-Toe - terminal front end
//!
//! Play interactively or replay a list of moves.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::{AppConfig, Cli, Command, Console};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    initialize_tracing(&config);

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(config, moves, jump, descending, json),
    }
}

/// Logs go to stderr so stdout carries only game output.
fn initialize_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let console = Console::new(config);
    let mut session = console.new_session();

    let stdin = io::stdin();
    let stdout = io::stdout();
    console.run(&mut session, stdin.lock(), stdout.lock())?;

    info!(moves = session.history().len() - 1, "Game closed");
    Ok(())
}

/// Apply moves to a fresh game and print the resulting view
#[instrument(skip(config))]
fn run_replay(
    config: AppConfig,
    moves: Vec<usize>,
    jump: Option<usize>,
    descending: bool,
    json: bool,
) -> Result<()> {
    let console = Console::new(config);
    let mut session = console.new_session();
    if descending && session.is_ascending() {
        session.toggle_move_order();
    }

    for (n, index) in moves.iter().enumerate() {
        session
            .attempt_move(*index)
            .with_context(|| format!("Move {} (square {}) rejected", n + 1, index))?;
    }
    if let Some(step) = jump {
        session
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &session.view())?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", console.render(&session))?;
    }
    Ok(())
}
