//! History consistency invariant: the log starts empty, stays in range,
//! and never continues past a won board.

use super::super::rules::detect_winner;
use super::super::{GameSession, HistoryEntry};
use super::Invariant;

/// Invariant: the history is well-formed relative to the current step.
///
/// - entry 0 is the empty initial entry
/// - `current_step` indexes a recorded entry
/// - no entry follows a board that already has a winner
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let entries = session.history().entries();

        let starts_empty = entries.first() == Some(&HistoryEntry::initial());
        let step_in_range = session.current_step() < entries.len();
        let no_move_after_win = entries
            .iter()
            .take(entries.len().saturating_sub(1))
            .all(|entry| !detect_winner(entry.board()).is_win());

        starts_empty && step_in_range && no_move_after_win
    }

    fn description() -> &'static str {
        "History starts empty, current step is recorded, no move follows a win"
    }
}
