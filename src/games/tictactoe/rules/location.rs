//! Row/column annotation of history entries.

use super::super::Position;
use serde::{Deserialize, Serialize};

/// Display location of the cell changed by a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellLocation {
    /// The initial entry, which changed no cell.
    Unplaced,
    /// A 1-based row and column.
    At {
        /// Row, 1 to 3 from the top.
        row: u8,
        /// Column, 1 to 3 from the left.
        column: u8,
    },
}

impl CellLocation {
    /// Row, or `None` for the initial entry.
    pub fn row(&self) -> Option<u8> {
        match self {
            CellLocation::Unplaced => None,
            CellLocation::At { row, .. } => Some(*row),
        }
    }

    /// Column, or `None` for the initial entry.
    pub fn column(&self) -> Option<u8> {
        match self {
            CellLocation::Unplaced => None,
            CellLocation::At { column, .. } => Some(*column),
        }
    }
}

impl std::fmt::Display for CellLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellLocation::Unplaced => write!(f, "Row: none Column: none"),
            CellLocation::At { row, column } => write!(f, "Row: {} Column: {}", row, column),
        }
    }
}

/// Maps the last-moved cell of an entry to its 1-based row and column.
pub fn cell_to_row_column(last_moved: Option<Position>) -> CellLocation {
    match last_moved {
        None => CellLocation::Unplaced,
        Some(pos) => CellLocation::At {
            row: pos.row(),
            column: pos.column(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_five_is_row_two_column_three() {
        let loc = cell_to_row_column(Position::from_index(5));
        assert_eq!(loc, CellLocation::At { row: 2, column: 3 });
        assert_eq!(loc.to_string(), "Row: 2 Column: 3");
    }

    #[test]
    fn test_initial_entry_has_no_location() {
        let loc = cell_to_row_column(None);
        assert_eq!(loc.row(), None);
        assert_eq!(loc.column(), None);
        assert_eq!(loc.to_string(), "Row: none Column: none");
    }
}
