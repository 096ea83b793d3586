//! Error taxonomy for every fallible engine operation.
//!
//! Every error is recoverable: a rejected operation leaves the game exactly
//! as it was. The `Display` text is the human-readable reason shown to the
//! player or forwarded to a network peer.

use thiserror::Error;

use super::cell::Coord;
use super::config::Variant;

/// Why an engine operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinate outside the board.
    #[error("{coord} is outside the {size}x{size} board")]
    OutOfRange { coord: Coord, size: usize },

    /// Target cell already holds a stone.
    #[error("{0} is already occupied")]
    OccupiedCell(Coord),

    /// Rule-specific illegality (suicide, no flip, pass with moves left).
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// Go ko: the move would recreate the previous position.
    #[error("{0} would repeat the previous position (ko)")]
    PositionalRepeat(Coord),

    /// Only the initial snapshot remains.
    #[error("nothing to undo")]
    NothingToUndo,

    /// The game has already ended.
    #[error("the game is over")]
    GameOver,

    /// Factory or relay received an unrecognised variant identifier.
    #[error("unknown game variant '{0}'")]
    UnknownVariant(String),

    /// A saved record belongs to another variant.
    #[error("saved game is {found}, expected {expected}")]
    VariantMismatch { expected: Variant, found: Variant },

    /// Board size outside the supported range.
    #[error("board size {0} is not supported (expected 8 to 19)")]
    InvalidSize(usize),

    /// The variant has no pass move.
    #[error("{0} does not allow passing")]
    PassNotAllowed(Variant),

    /// A saved record or relay message is structurally broken.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::InvalidRecord(err.to_string())
    }
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        GameError::InvalidRecord(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfRange {
            coord: Coord::new(15, 2),
            size: 15,
        };
        assert_eq!(err.to_string(), "(15, 2) is outside the 15x15 board");

        let err = GameError::VariantMismatch {
            expected: Variant::Go,
            found: Variant::Gomoku,
        };
        assert_eq!(err.to_string(), "saved game is gomoku, expected go");
    }

    #[test]
    fn test_json_error_converts() {
        let err: GameError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, GameError::InvalidRecord(_)));
    }
}
