//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a winning line.
pub type Line = [Position; 3];

/// The eight winning lines in scan order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of scanning a board for three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete.
    #[default]
    NoWinner,
    /// `mark` owns every square of `line`.
    Winner {
        /// The winning mark.
        mark: Player,
        /// The completed line, as listed in [`LINES`].
        line: Line,
    },
}

impl WinResult {
    /// Returns the winning mark, if any.
    pub fn mark(&self) -> Option<Player> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { mark, .. } => Some(*mark),
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner { line, .. } => Some(*line),
        }
    }

    /// Returns the winning line as board indices, if any.
    pub fn indices(&self) -> Option<[usize; 3]> {
        self.line().map(|line| line.map(Position::to_index))
    }

    /// Returns true when a line is complete.
    pub fn is_win(&self) -> bool {
        matches!(self, WinResult::Winner { .. })
    }
}

/// Scans [`LINES`] in order and reports the first line held by one player.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> WinResult {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return WinResult::Winner { mark, line };
        }
    }

    WinResult::NoWinner
}
