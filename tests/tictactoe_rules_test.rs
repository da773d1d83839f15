//! Tests for the pure rules: win detection, legal moves, row/column annotation.

use proptest::prelude::*;
use rewind_tictactoe::{
    Board, CellLocation, LINES, Player, Position, Square, WinResult, cell_to_row_column,
    detect_winner, is_legal_move,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn mark() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn line_is_complete(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let marks: Vec<_> = line.iter().map(|pos| board.get(*pos).player()).collect();
    match marks.as_slice() {
        [Some(a), Some(b), Some(c)] if a == b && b == c => Some(*a),
        _ => None,
    }
}

proptest! {
    #[test]
    fn winner_is_first_complete_line_in_table_order(board in any_board()) {
        let expected = LINES
            .iter()
            .find_map(|line| line_is_complete(&board, line).map(|mark| (mark, *line)));

        match detect_winner(&board) {
            WinResult::NoWinner => prop_assert_eq!(expected, None),
            WinResult::Winner { mark, line } => prop_assert_eq!(expected, Some((mark, line))),
        }
    }

    #[test]
    fn every_line_is_detected_for_either_mark(
        line_index in 0usize..8,
        mark in mark(),
        others in proptest::collection::vec(any::<bool>(), 9),
    ) {
        let line = LINES[line_index];
        let squares = std::array::from_fn(|index| {
            let pos = Position::ALL[index];
            if line.contains(&pos) {
                Square::Occupied(mark)
            } else if others[index] {
                Square::Occupied(mark.opponent())
            } else {
                Square::Empty
            }
        });
        let board = Board::from_squares(squares);
        prop_assume!(LINES.iter().all(|l| line_is_complete(&board, l) != Some(mark.opponent())));

        prop_assert_eq!(detect_winner(&board), WinResult::Winner { mark, line });
    }

    #[test]
    fn occupied_and_out_of_range_moves_are_illegal(board in any_board(), index in 0usize..32) {
        let legal = is_legal_move(&board, index);
        match Position::from_index(index) {
            Some(pos) => prop_assert_eq!(legal, board.get(pos) == Square::Empty),
            None => prop_assert!(!legal),
        }
    }
}

#[test]
fn test_no_three_in_a_row_has_no_winner() {
    // X O X / X O O / O X X
    let marks = [
        Player::X,
        Player::O,
        Player::X,
        Player::X,
        Player::O,
        Player::O,
        Player::O,
        Player::X,
        Player::X,
    ];
    let board = Board::from_squares(marks.map(Square::Occupied));
    assert_eq!(detect_winner(&board), WinResult::NoWinner);
}

#[test]
fn test_shared_center_reports_row_before_diagonal() {
    let board = [3, 4, 5, 0, 8]
        .into_iter()
        .filter_map(Position::from_index)
        .fold(Board::new(), |b, pos| b.with_mark(pos, Player::O));

    assert_eq!(
        detect_winner(&board),
        WinResult::Winner {
            mark: Player::O,
            line: [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        }
    );
}

#[test]
fn test_column_scanned_before_diagonal() {
    // Column 0 and the main diagonal both complete through index 0.
    let board = [0, 3, 6, 4, 8]
        .into_iter()
        .filter_map(Position::from_index)
        .fold(Board::new(), |b, pos| b.with_mark(pos, Player::X));

    assert_eq!(detect_winner(&board).indices(), Some([0, 3, 6]));
}

#[test]
fn test_row_column_annotation() {
    assert_eq!(
        cell_to_row_column(Position::from_index(5)),
        CellLocation::At { row: 2, column: 3 }
    );
    assert_eq!(
        cell_to_row_column(Position::from_index(0)),
        CellLocation::At { row: 1, column: 1 }
    );
    assert_eq!(
        cell_to_row_column(Position::from_index(7)),
        CellLocation::At { row: 3, column: 2 }
    );
    assert_eq!(cell_to_row_column(None), CellLocation::Unplaced);
}
