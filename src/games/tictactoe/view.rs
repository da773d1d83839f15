//! Derived, presentation-ready views of a session.

use super::rules::{CellLocation, WinResult, cell_to_row_column};
use super::{Board, GameSession, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status line for the viewed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game continues; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// The viewed board is won by this player.
    #[display("Winner: {}", _0)]
    Winner(Player),
}

/// One row of the move list.
///
/// `step` is the history position this row stands for and the target of its
/// jump, whatever order the list is displayed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// Square filled by this step's move.
    pub location: CellLocation,
    /// True for the step currently viewed.
    pub highlighted: bool,
}

impl MoveListEntry {
    /// Label for the entry at `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Board at the viewed step.
    pub board: Board,
    /// Status line.
    pub status: String,
    /// Winning indices to highlight, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Step currently viewed.
    pub current_step: usize,
    /// Move list, already in display order.
    pub moves: Vec<MoveListEntry>,
}

impl GameSession {
    /// Status for the viewed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            WinResult::Winner { mark, .. } => Status::Winner(mark),
            WinResult::NoWinner => Status::NextPlayer(self.next_player()),
        }
    }

    /// Move list oriented by the current order preference.
    ///
    /// Reversal changes only the order of rows; each row keeps its own step,
    /// label and annotation.
    #[instrument(skip(self), fields(len = self.history().len(), ascending = self.is_ascending()))]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut moves: Vec<_> = self
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListEntry::new(
                    step,
                    MoveListEntry::label_for(step),
                    cell_to_row_column(*entry.last_moved()),
                    step == self.current_step(),
                )
            })
            .collect();

        if !self.is_ascending() {
            moves.reverse();
        }
        moves
    }

    /// Snapshot of the whole derived view.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: *self.current_board(),
            status: self.status().to_string(),
            winning_line: self.winner().indices(),
            current_step: self.current_step(),
            moves: self.move_list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(moves: &[MoveListEntry]) -> Vec<&str> {
        moves.iter().map(|m| m.label.as_str()).collect()
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::NextPlayer(Player::X).to_string(), "Next player: X");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Winner(Player::O).to_string(), "Winner: O");
    }

    #[test]
    fn test_initial_move_list() {
        let moves = GameSession::new().move_list();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].label, "Go to game start");
        assert_eq!(moves[0].location, CellLocation::Unplaced);
        assert!(moves[0].highlighted);
    }

    #[test]
    fn test_descending_keeps_steps() {
        let mut session = GameSession::new();
        for index in [0, 5, 7] {
            session.attempt_move(index).expect("legal move");
        }
        session.toggle_move_order();

        let moves = session.move_list();
        assert_eq!(
            labels(&moves),
            [
                "Go to move #3",
                "Go to move #2",
                "Go to move #1",
                "Go to game start"
            ]
        );
        assert_eq!(moves[1].step, 2);
        assert_eq!(moves[1].location, CellLocation::At { row: 2, column: 3 });
        assert!(moves[0].highlighted);
    }

    #[test]
    fn test_highlight_follows_current_step() {
        let mut session = GameSession::new();
        for index in [0, 5, 7] {
            session.attempt_move(index).expect("legal move");
        }
        session.jump_to(1).expect("recorded step");

        let highlighted: Vec<_> = session
            .move_list()
            .into_iter()
            .filter(|m| m.highlighted)
            .map(|m| m.step)
            .collect();
        assert_eq!(highlighted, [1]);
    }

    #[test]
    fn test_view_reports_winning_line() {
        let mut session = GameSession::new();
        for index in [0, 4, 1, 5, 2] {
            session.attempt_move(index).expect("legal move");
        }
        let view = session.view();
        assert_eq!(view.status, "Winner: X");
        assert_eq!(view.winning_line, Some([0, 1, 2]));
        assert_eq!(view.current_step, 5);
        assert_eq!(view.moves.len(), 6);
    }
}
