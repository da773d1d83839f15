//! Tic-tac-toe with recorded history and time-travel.

pub mod contracts;
pub mod error;
pub mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use error::{GameError, MoveRejection};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{
    CellLocation, LINES, Line, WinResult, cell_to_row_column, detect_winner, is_full,
    is_legal_move,
};
pub use session::GameSession;
pub use types::{Board, Player, Square};
pub use view::{MoveListEntry, SessionView, Status};
