//! Monotonic board invariant: every entry fills exactly one empty square.

use super::super::{GameSession, Square};
use super::Invariant;

/// Invariant: each history entry extends its predecessor by one mark.
///
/// `history[n].board` differs from `history[n-1].board` only at
/// `history[n].last_moved`, and that square was empty before.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = *after.last_moved() else {
                return false;
            };

            let changed: Vec<_> = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(index, _)| index)
                .collect();

            changed == [pos.to_index()]
                && before.board().get(pos) == Square::Empty
                && after.board().get(pos) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one previously empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new();
        for index in [0, 4, 8, 2] {
            session.attempt_move(index).expect("legal move");
        }
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_extra_square_violates() {
        let mut session = GameSession::new();
        session.attempt_move(4).expect("legal move");

        session.history.entries[1]
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_missing_last_moved_violates() {
        let mut session = GameSession::new();
        session.attempt_move(4).expect("legal move");

        session.history.entries[1].last_moved = None;

        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
