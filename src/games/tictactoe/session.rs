//! Game session: the authoritative state machine with time-travel.
//!
//! A session owns the recorded history, the step currently viewed and the
//! move-list ordering preference. Whose turn it is comes from the parity of
//! the viewed step, so jumping back in time also rewinds the turn. A move
//! made while viewing an earlier step starts a new branch from there and
//! drops the abandoned future.

use super::contracts::{Contract, JumpContract, MoveContract};
use super::error::GameError;
use super::history::{History, HistoryEntry};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{Line, WinResult, detect_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One in-memory game with its full history.
///
/// Deserializing checks every session invariant, so a decoded session is as
/// well-formed as one built through moves and jumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    pub(super) history: History,
    pub(super) current_step: usize,
    pub(super) ascending: bool,
}

/// Unchecked wire form of a [`GameSession`].
#[derive(Deserialize)]
struct SessionRecord {
    history: HistoryRecord,
    current_step: usize,
    ascending: bool,
}

#[derive(Deserialize)]
struct HistoryRecord {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = GameError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            history: History {
                entries: record.history.entries,
            },
            current_step: record.current_step,
            ascending: record.ascending,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected decoded session");
            GameError::InvariantViolation(descriptions)
        })?;
        Ok(session)
    }
}

impl GameSession {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        info!(ascending, "Starting new game");
        Self {
            history: History::new(),
            current_step: 0,
            ascending,
        }
    }

    /// Replaces this session with a fresh game, keeping the order preference.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_order(self.ascending);
    }

    /// Recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// History entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        // current_step is kept within the recorded history.
        &self.history.entries()[self.current_step]
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player who moves next from the viewed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Win detection on the viewed board.
    pub fn winner(&self) -> WinResult {
        detect_winner(self.current_board())
    }

    /// Winning line on the viewed board, for highlighting.
    pub fn winning_line(&self) -> Option<Line> {
        self.winner().line()
    }

    /// True when the viewed board already has a winner.
    pub fn is_finished(&self) -> bool {
        self.winner().is_win()
    }

    /// Places the next player's mark at `index` on the viewed board.
    ///
    /// On success the history is cut back to the viewed step, the new
    /// snapshot is appended and becomes the current step. Returns the
    /// position that was marked.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the index is out of bounds, the
    /// square is occupied, or the viewed board already has a winner. Debug
    /// builds return [`GameError::InvariantViolation`] if the result breaks a
    /// session invariant. The session is left unchanged in every case.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn attempt_move(&mut self, index: usize) -> Result<Position, GameError> {
        let pos = MoveContract::pre(self, &index).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let entry = self.current_entry().successor(pos, player);
        self.current_step = self.history.branch_from(self.current_step, entry);
        debug!(%pos, %player, step = self.current_step, "Move accepted");

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(pos)
    }

    /// Views the recorded snapshot at `step`.
    ///
    /// History is never modified by a jump.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is not a recorded entry.
    /// The session is left unchanged.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let step = JumpContract::pre(self, &step).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current_step = step;
        debug!(step, next = %self.next_player(), "Jumped");

        #[cfg(debug_assertions)]
        if let Err(e) = JumpContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(())
    }

    /// Flips the move-list order. Does not touch history or the current step.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move order toggled");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
