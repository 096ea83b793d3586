//! Cell values and board coordinates.
//!
//! ## Cell
//!
//! The three states a board point can hold. The meaning is fixed across all
//! variants: `Black` always moves first.
//!
//! ## Coord
//!
//! A (row, column) pair. Coordinates are only meaningful relative to a board
//! size; use [`Coord::offset`] to step in a direction without leaving the board.

use serde::{Deserialize, Serialize};

/// State of a single board point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Black stone (first to move).
    Black,
    /// White stone.
    White,
}

impl Cell {
    /// The two stone colors, in turn order.
    pub const STONES: [Cell; 2] = [Cell::Black, Cell::White];

    /// Numeric code used by the persisted board grid.
    ///
    /// ```
    /// use rust_boardgames::core::Cell;
    ///
    /// assert_eq!(Cell::Empty.code(), 0);
    /// assert_eq!(Cell::Black.code(), 1);
    /// assert_eq!(Cell::White.code(), 2);
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }

    /// Decode a persisted cell code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            2 => Some(Cell::White),
            _ => None,
        }
    }

    /// The opposing color. `Empty` has no opponent and maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Check if this cell holds a stone.
    #[must_use]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "Empty"),
            Cell::Black => write!(f, "Black"),
            Cell::White => write!(f, "White"),
        }
    }
}

/// A board coordinate (0-based row and column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if this coordinate lies on a board of side `size`.
    #[must_use]
    pub const fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Step by `(dr, dc)`, returning `None` when the result leaves the board.
    ///
    /// ```
    /// use rust_boardgames::core::Coord;
    ///
    /// let c = Coord::new(0, 3);
    /// assert_eq!(c.offset(1, -1, 8), Some(Coord::new(1, 2)));
    /// assert_eq!(c.offset(-1, 0, 8), None);
    /// ```
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self { row, col };
        next.within(size).then_some(next)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
