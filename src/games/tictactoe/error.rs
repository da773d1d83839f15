//! Rejected-operation errors for a game session.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

/// Error returned by session operations that leave the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move cannot be played on the viewed board.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveRejection),

    /// The jump target is not a recorded step.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    #[from(ignore)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Number of recorded history entries.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    #[from(ignore)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl std::error::Error for MoveRejection {}
