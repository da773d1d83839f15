//! Contract-based validation for session operations.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::{GameError, MoveRejection};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::{detect_winner, is_legal_move};
use super::{GameSession, Position, WinResult};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

fn invariants_hold(session: &GameSession) -> Result<(), GameError> {
    SessionInvariants::check_all(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the viewed board has no winner yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveRejection::GameOver`] when the viewed board is won.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveRejection> {
        match detect_winner(session.current_board()) {
            WinResult::NoWinner => Ok(()),
            WinResult::Winner { mark, .. } => Err(MoveRejection::GameOver(mark)),
        }
    }
}

/// Precondition: the index names an empty square of the viewed board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Resolves `index` to a position that may be marked.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<Position, MoveRejection> {
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
        if is_legal_move(session.current_board(), index) {
            Ok(pos)
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is not over and the
/// square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<Position, MoveRejection> {
        GameNotOver::check(session)?;
        SquareIsEmpty::check(index, session)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `attempt_move`.
///
/// Preconditions:
/// - The viewed board has no winner
/// - The index names an empty square
///
/// Postconditions:
/// - History holds exactly `before.current_step + 2` entries
/// - The new entry is the current step
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    type Checked = Position;

    fn pre(session: &GameSession, index: &usize) -> Result<Position, GameError> {
        Ok(LegalMove::check(*index, session)?)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), GameError> {
        let expected_len = before.current_step() + 2;
        if after.history().len() != expected_len {
            return Err(GameError::InvariantViolation(format!(
                "History length {} after move, expected {}",
                after.history().len(),
                expected_len
            )));
        }
        if after.current_step() != expected_len - 1 {
            return Err(GameError::InvariantViolation(
                "Current step does not point at the new entry".to_string(),
            ));
        }
        invariants_hold(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `jump_to`.
///
/// Preconditions:
/// - The step is a recorded history entry
///
/// Postconditions:
/// - History is untouched
/// - All session invariants hold
pub struct JumpContract;

impl Contract<GameSession, usize> for JumpContract {
    type Checked = usize;

    fn pre(session: &GameSession, step: &usize) -> Result<usize, GameError> {
        let len = session.history().len();
        if *step < len {
            Ok(*step)
        } else {
            Err(GameError::InvalidStep { step: *step, len })
        }
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), GameError> {
        if before.history() != after.history() {
            return Err(GameError::InvariantViolation(
                "Jump modified the recorded history".to_string(),
            ));
        }
        invariants_hold(after)
    }
}
