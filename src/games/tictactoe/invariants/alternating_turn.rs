//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameSession, Player, Square};
use super::Invariant;

/// Invariant: the mark placed by entry `n` belongs to `Player::for_step(n - 1)`.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match *entry.last_moved() {
                Some(pos) => entry.board().get(pos) == Square::Occupied(Player::for_step(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 2, 6, 8] {
            session.attempt_move(index).expect("legal move");
        }
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::new();
        session.attempt_move(0).expect("legal move");
        session.attempt_move(4).expect("legal move");

        // Rewrite O's mark as X.
        session.history.entries[2]
            .board
            .set(Position::Center, Square::Occupied(Player::X));

        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
