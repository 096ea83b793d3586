//! Square board of cell values.
//!
//! The board is pure data: a row-major `Vec<Cell>` plus its side length.
//! Every access through [`Board::get`] and [`Board::set`] is bounds-checked;
//! out-of-range coordinates are rejected, never stored.
//!
//! Equality is element-wise, which Go's ko check relies on directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, Coord};
use super::error::GameError;

/// The four orthogonal directions.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The eight compass directions.
#[rustfmt::skip]
pub const COMPASS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of side `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a coordinate is on the board.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.within(self.size)
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.row * self.size + coord.col)
        } else {
            Err(GameError::OutOfRange {
                coord,
                size: self.size,
            })
        }
    }

    /// Read a cell.
    pub fn get(&self, coord: Coord) -> Result<Cell, GameError> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Write a cell.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GameError> {
        let i = self.index(coord)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Read a cell, treating off-board coordinates as absent.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.get(coord).ok()
    }

    /// Check if a cell is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size * size).map(move |i| Coord::new(i / size, i % size))
    }

    /// Iterate over `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    /// Orthogonal neighbors that lie on the board.
    #[must_use]
    pub fn neighbors(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dr, dc)| coord.offset(dr, dc, self.size))
            .collect()
    }

    /// Count cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Row-major grid of cell codes (0 empty, 1 black, 2 white).
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Rebuild a board from a row-major grid of cell codes.
    ///
    /// The grid must be square and contain only valid codes.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, GameError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GameError::InvalidRecord(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    size
                )));
            }
            for &code in row {
                let cell = Cell::from_code(code).ok_or_else(|| {
                    GameError::InvalidRecord(format!("unknown cell code {} in row {}", code, r))
                })?;
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.size(), 9);
        assert_eq!(board.count(Cell::Empty), 81);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::new(8);
        board.set(Coord::new(3, 4), Cell::Black).unwrap();

        assert_eq!(board.get(Coord::new(3, 4)), Ok(Cell::Black));
        assert_eq!(board.get(Coord::new(4, 3)), Ok(Cell::Empty));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = Board::new(8);
        let outside = Coord::new(8, 0);

        assert_eq!(
            board.get(outside),
            Err(GameError::OutOfRange { coord: outside, size: 8 })
        );
        assert!(board.set(outside, Cell::White).is_err());
        assert_eq!(board, Board::new(8));
    }

    #[test]
    fn test_neighbors_at_corner_and_center() {
        let board = Board::new(8);
        assert_eq!(board.neighbors(Coord::new(0, 0)).len(), 2);
        assert_eq!(board.neighbors(Coord::new(0, 4)).len(), 3);
        assert_eq!(board.neighbors(Coord::new(4, 4)).len(), 4);
    }

    #[test]
    fn test_equality_is_elementwise() {
        let mut a = Board::new(8);
        let mut b = Board::new(8);
        a.set(Coord::new(1, 1), Cell::White).unwrap();
        assert_ne!(a, b);
        b.set(Coord::new(1, 1), Cell::White).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_codes_round_trip() {
        let mut board = Board::new(8);
        board.set(Coord::new(0, 7), Cell::Black).unwrap();
        board.set(Coord::new(7, 0), Cell::White).unwrap();

        let codes = board.to_codes();
        assert_eq!(codes.len(), 8);
        assert_eq!(codes[0][7], 1);
        assert_eq!(codes[7][0], 2);
        assert_eq!(Board::from_codes(&codes), Ok(board));
    }

    #[test]
    fn test_from_codes_rejects_ragged_grid() {
        let rows = vec![vec![0u8; 8], vec![0u8; 7]];
        assert!(matches!(Board::from_codes(&rows), Err(GameError::InvalidRecord(_))));
    }

    #[test]
    fn test_from_codes_rejects_bad_code() {
        let mut rows = vec![vec![0u8; 8]; 8];
        rows[2][2] = 9;
        assert!(matches!(Board::from_codes(&rows), Err(GameError::InvalidRecord(_))));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(8);
        board.set(Coord::new(0, 0), Cell::Black).unwrap();
        board.set(Coord::new(0, 1), Cell::White).unwrap();
        let text = board.to_string();
        assert!(text.starts_with("XO......\n"));
    }
}
