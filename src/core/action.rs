//! Move representation.
//!
//! A move is either a stone placed at a coordinate or a pass. Passing is only
//! meaningful in Go and Reversi; Gomoku never records one.
//!
//! The move record of a game is an ordered `im::Vector<Move>`: append-only
//! during play, truncated only by undo (which restores an older snapshot).

use serde::{Deserialize, Serialize};

use super::cell::Coord;

/// A single entry in the move record.
///
/// ## Example
///
/// ```
/// use rust_boardgames::core::{Coord, Move};
///
/// let place = Move::Place(Coord::new(7, 7));
/// assert_eq!(place.coord(), Some(Coord::new(7, 7)));
/// assert!(!place.is_pass());
///
/// assert!(Move::Pass.is_pass());
/// assert_eq!(Move::Pass.coord(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// A stone placed at the coordinate.
    Place(Coord),
    /// The player passed.
    Pass,
}

impl Move {
    /// Create a placement move.
    #[must_use]
    pub const fn place(row: usize, col: usize) -> Self {
        Move::Place(Coord::new(row, col))
    }

    /// The placed coordinate, if any.
    #[must_use]
    pub const fn coord(self) -> Option<Coord> {
        match self {
            Move::Place(coord) => Some(coord),
            Move::Pass => None,
        }
    }

    /// Check if this is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

impl From<Coord> for Move {
    fn from(coord: Coord) -> Self {
        Move::Place(coord)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place(coord) => write!(f, "{}", coord),
            Move::Pass => write!(f, "PASS"),
        }
    }
}

/// Check if the last two entries of a move record are both passes.
#[must_use]
pub fn ends_with_double_pass(moves: &im::Vector<Move>) -> bool {
    moves.len() >= 2 && moves.iter().rev().take(2).all(|m| m.is_pass())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_constructor() {
        assert_eq!(Move::place(3, 4), Move::Place(Coord::new(3, 4)));
        assert_eq!(Move::from(Coord::new(1, 2)), Move::place(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::place(7, 8).to_string(), "(7, 8)");
        assert_eq!(Move::Pass.to_string(), "PASS");
    }

    #[test]
    fn test_double_pass_detection() {
        let mut moves = im::Vector::new();
        assert!(!ends_with_double_pass(&moves));

        moves.push_back(Move::Pass);
        assert!(!ends_with_double_pass(&moves));

        moves.push_back(Move::place(0, 0));
        moves.push_back(Move::Pass);
        assert!(!ends_with_double_pass(&moves));

        moves.push_back(Move::Pass);
        assert!(ends_with_double_pass(&moves));
    }

    #[test]
    fn test_move_serialization() {
        let moves = vec![Move::place(2, 3), Move::Pass];
        let json = serde_json::to_string(&moves).unwrap();
        let deserialized: Vec<Move> = serde_json::from_str(&json).unwrap();

        assert_eq!(moves, deserialized);
    }
}
