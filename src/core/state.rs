//! Snapshots and the undo history.
//!
//! ## Snapshot
//!
//! An immutable copy of the live position:
//! - Board
//! - Side to move
//! - Move record
//!
//! A snapshot is a full value copy, not a diff. The move record is an
//! `im::Vector`, so copying it is O(1) while staying independent.
//!
//! ## History
//!
//! A stack of snapshots that always holds at least the initial one. The top
//! mirrors the game's live state; undo pops it and restores from the new top.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Move;
use super::board::Board;
use super::cell::Cell;
use super::error::GameError;

/// Saved copy of the live position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board at the time of the snapshot.
    pub board: Board,

    /// Side to move.
    pub current_player: Cell,

    /// Move record up to this point.
    pub moves: Vector<Move>,
}

impl Snapshot {
    /// Create a snapshot from its parts.
    #[must_use]
    pub fn new(board: Board, current_player: Cell, moves: Vector<Move>) -> Self {
        Self {
            board,
            current_player,
            moves,
        }
    }
}

/// Undo stack. Never empty.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Create a history holding only the initial snapshot.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    /// Number of snapshots, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never discarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot mirroring the live state.
    #[must_use]
    pub fn top(&self) -> &Snapshot {
        // Invariant: at least one snapshot.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Snapshot directly beneath the top, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&Snapshot> {
        self.snapshots.iter().rev().nth(1)
    }

    /// Record a new snapshot on top.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Discard the top snapshot and return the one now on top.
    ///
    /// Fails with `NothingToUndo` when only the initial snapshot remains.
    pub fn undo(&mut self) -> Result<&Snapshot, GameError> {
        if self.snapshots.len() < 2 {
            return Err(GameError::NothingToUndo);
        }
        self.snapshots.pop();
        Ok(self.top())
    }

    /// Replace the whole history with a single snapshot (used after loading).
    pub fn reset(&mut self, snapshot: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push(snapshot);
    }
}
