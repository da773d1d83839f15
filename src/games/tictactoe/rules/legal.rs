//! Legal-move check for tic-tac-toe.

use super::super::{Board, Position};
use tracing::instrument;

/// True iff `index` names a board square (0-8) and that square is empty.
///
/// Does not consider whether the game is already won; callers combine this
/// with [`detect_winner`](super::detect_winner).
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, index: usize) -> bool {
    Position::from_index(index).is_some_and(|pos| board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    #[test]
    fn test_empty_square_is_legal() {
        assert!(is_legal_move(&Board::new(), 0));
        assert!(is_legal_move(&Board::new(), 8));
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_legal_move(&board, 4));
        assert!(is_legal_move(&board, 3));
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        assert!(!is_legal_move(&Board::new(), 9));
        assert!(!is_legal_move(&Board::new(), usize::MAX));
    }
}
