//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules are separated from board
//! storage and history so the session and the contract checks share them.

pub mod draw;
pub mod legal;
pub mod location;
pub mod win;

pub use draw::is_full;
pub use legal::is_legal_move;
pub use location::{CellLocation, cell_to_row_column};
pub use win::{LINES, Line, WinResult, detect_winner};
