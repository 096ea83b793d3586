//! Saved-game record and its codecs.
//!
//! The record is the contract with external storage: the engine produces and
//! consumes it, but never touches files itself. Two encodings are provided:
//! JSON (human-readable, the interchange format) and bincode (compact).
//!
//! Undo history is not part of the record. Loading a record starts a fresh
//! history at the loaded position.

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, GameError, Move, Snapshot, Variant, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Persisted form of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// Variant tag, checked against the game the record is loaded into.
    pub variant: Variant,

    /// Board side length.
    pub size: usize,

    /// Row-major grid of cell codes (0 empty, 1 black, 2 white).
    pub board: Vec<Vec<u8>>,

    /// Cell code of the side to move.
    pub current_player: u8,

    /// Move record in play order.
    pub moves: Vec<Move>,

    /// Opaque caller data (player names, mode, ...). Not interpreted.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl SavedGame {
    /// Validate the record and convert it to a snapshot.
    ///
    /// Checks the size range, the grid shape and codes, the side to move and
    /// that every recorded placement lies on the board.
    pub fn to_snapshot(&self) -> Result<Snapshot, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(GameError::InvalidSize(self.size));
        }

        let board = Board::from_codes(&self.board)?;
        if board.size() != self.size {
            return Err(GameError::InvalidRecord(format!(
                "board has {} rows, expected {}",
                board.size(),
                self.size
            )));
        }

        let current_player = match Cell::from_code(self.current_player) {
            Some(cell) if cell.is_stone() => cell,
            _ => {
                return Err(GameError::InvalidRecord(format!(
                    "invalid player code {}",
                    self.current_player
                )))
            }
        };

        if let Some(bad) = self
            .moves
            .iter()
            .filter_map(|m| m.coord())
            .find(|coord| !coord.within(self.size))
        {
            return Err(GameError::InvalidRecord(format!("recorded move {} is off the board", bad)));
        }

        let moves: Vector<Move> = self.moves.iter().copied().collect();
        Ok(Snapshot::new(board, current_player, moves))
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
