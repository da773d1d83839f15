//! Rewind Tic-Tac-Toe library - a tic-tac-toe engine with time-travel
//!
//! The core is a [`GameSession`]: an append-only history of board snapshots,
//! the step currently viewed, and a move-list order preference. Presentation
//! layers call [`GameSession::attempt_move`], [`GameSession::jump_to`] and
//! [`GameSession::toggle_move_order`] in response to input and render
//! [`GameSession::view`].
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a 9-square snapshot (win detection,
//!   legal-move check, row/column annotation)
//! - **Session**: history, time-travel and branch-on-move
//! - **View**: status line and move list, oriented per the order preference
//! - **Console**: a thin terminal front end used by the binary
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Player, Status};
//!
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.attempt_move(index).unwrap();
//! }
//! assert_eq!(session.status(), Status::Winner(Player::X));
//!
//! // Time-travel back and branch.
//! session.jump_to(2).unwrap();
//! session.attempt_move(8).unwrap();
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod games;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Terminal front end
pub use console::{Console, ConsoleCommand, ParseError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellLocation, GameError, GameSession, History, HistoryEntry, LINES, Line,
    MoveListEntry, MoveRejection, Player, Position, SessionView, Square, Status, WinResult,
    cell_to_row_column, detect_winner, is_full, is_legal_move,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::contracts::{Contract, JumpContract, LegalMove, MoveContract};
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, SessionInvariants,
};
