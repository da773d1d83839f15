//! Append-only log of board snapshots.
//!
//! Each entry records the full board after a move together with the square
//! that move filled. Entries are never edited; a new move made while viewing
//! an earlier step drops the entries after it and appends a fresh one.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A recorded snapshot plus the square that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    pub(super) board: Board,
    /// Square filled by the move; `None` for the initial entry.
    pub(super) last_moved: Option<Position>,
}

impl HistoryEntry {
    /// The all-empty starting entry.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_moved: None,
        }
    }

    /// Entry produced by `player` marking `pos` on top of `self`.
    ///
    /// The caller is responsible for `pos` being empty.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_moved: Some(pos),
        }
    }
}

/// Ordered history of entries, indexed by step number from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    pub(super) entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries; always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Last recorded entry.
    pub fn latest(&self) -> &HistoryEntry {
        // The initial entry is never removed.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in step order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards every entry after `step`, then appends `entry`.
    ///
    /// Returns the step number of the appended entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch_from(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let keep = step.saturating_add(1).min(self.entries.len());
        let discarded = self.entries.len() - keep;
        if discarded > 0 {
            debug!(discarded, "Dropping abandoned branch");
        }
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
