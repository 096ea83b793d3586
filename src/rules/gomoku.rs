//! Gomoku (five in a row).
//!
//! Any empty cell is a legal placement; there are no captures and no passing.
//! After every placement the whole board is scanned: for each stone and each
//! of the directions →, ↓, ↘, ↙ the run of same-colored stones starting at
//! that stone is counted, stopping at five. A count of five wins.
//!
//! Overlines (six or more) also win: the scan starts at the first stone of
//! the line and sees five before it would see the sixth.
//!
//! A full board without a five is a draw.

use im::Vector;
use tracing::debug;

use super::engine::{GameResult, Placement, RulesEngine};
use crate::core::{Board, Cell, Coord, GameError, Move, Variant};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Scan directions: right, down, down-right, down-left.
pub const LINE_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Gomoku rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct GomokuRules;

impl GomokuRules {
    /// Length of the same-colored run starting at `start` in direction
    /// `(dr, dc)`, capped at `WIN_LENGTH`.
    #[must_use]
    pub fn run_length(board: &Board, start: Coord, dr: isize, dc: isize) -> usize {
        let Some(color) = board.cell(start).filter(|c| c.is_stone()) else {
            return 0;
        };

        let mut count = 1;
        let mut cursor = start;
        while count < WIN_LENGTH {
            match cursor.offset(dr, dc, board.size()) {
                Some(next) if board.cell(next) == Some(color) => {
                    count += 1;
                    cursor = next;
                }
                _ => break,
            }
        }
        count
    }

    /// Color of the first five-in-a-row found in row-major scan order.
    #[must_use]
    pub fn find_five(board: &Board) -> Option<Cell> {
        board
            .iter()
            .filter(|(_, cell)| cell.is_stone())
            .find(|&(coord, _)| {
                LINE_DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| Self::run_length(board, coord, dr, dc) == WIN_LENGTH)
            })
            .map(|(_, cell)| cell)
    }
}

impl RulesEngine for GomokuRules {
    fn variant(&self) -> Variant {
        Variant::Gomoku
    }

    fn place(
        &self,
        board: &mut Board,
        coord: Coord,
        mover: Cell,
        _previous: Option<&Board>,
    ) -> Result<Placement, GameError> {
        board.set(coord, mover)?;
        Ok(Placement::default())
    }

    fn check_terminal(&self, board: &Board) -> Option<GameResult> {
        if let Some(winner) = Self::find_five(board) {
            debug!(%winner, "five in a row");
            return Some(GameResult::Winner(winner));
        }
        board.is_full().then_some(GameResult::Draw)
    }

    fn check_pass(&self, _board: &Board, _passer: Cell) -> Result<(), GameError> {
        Err(GameError::PassNotAllowed(Variant::Gomoku))
    }

    fn after_pass(&self, _board: &Board, _moves: &Vector<Move>, _next: Cell) -> Option<GameResult> {
        None
    }

    fn score(&self, board: &Board) -> GameResult {
        Self::find_five(board).map_or(GameResult::Draw, GameResult::Winner)
    }

    fn is_legal(&self, board: &Board, coord: Coord, _mover: Cell, _previous: Option<&Board>) -> bool {
        board.is_empty_at(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, cell) in stones {
            board.set(Coord::new(r, c), cell).unwrap();
        }
        board
    }

    #[test]
    fn test_run_length_caps_at_five() {
        let stones: Vec<_> = (0..7).map(|c| (3, c, Cell::Black)).collect();
        let board = board_with(15, &stones);
        assert_eq!(GomokuRules::run_length(&board, Coord::new(3, 0), 0, 1), 5);
        assert_eq!(GomokuRules::run_length(&board, Coord::new(3, 4), 0, 1), 3);
        assert_eq!(GomokuRules::run_length(&board, Coord::new(0, 0), 0, 1), 0);
    }

    #[test]
    fn test_four_is_not_terminal() {
        let stones: Vec<_> = (0..4).map(|c| (7, 7 + c, Cell::Black)).collect();
        let board = board_with(15, &stones);
        assert_eq!(GomokuRules.check_terminal(&board), None);
    }

    #[test]
    fn test_five_in_each_direction() {
        for &(dr, dc) in &LINE_DIRECTIONS {
            let stones: Vec<_> = (0..5)
                .map(|i| {
                    let r = (7 + dr * i) as usize;
                    let c = (7 + dc * i) as usize;
                    (r, c, Cell::White)
                })
                .collect();
            let board = board_with(15, &stones);
            assert_eq!(
                GomokuRules.check_terminal(&board),
                Some(GameResult::Winner(Cell::White)),
                "direction ({}, {})",
                dr,
                dc
            );
        }
    }

    #[test]
    fn test_overline_wins() {
        let stones: Vec<_> = (0..6).map(|r| (r, 2, Cell::Black)).collect();
        let board = board_with(15, &stones);
        assert_eq!(GomokuRules::find_five(&board), Some(Cell::Black));
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        // Columns alternate in pairs, rows shift by two every other row,
        // so no line reaches five.
        let mut board = Board::new(8);
        for r in 0..8 {
            for c in 0..8 {
                let shifted = c + 2 * (r % 2);
                let cell = if (shifted / 2) % 2 == 0 { Cell::Black } else { Cell::White };
                board.set(Coord::new(r, c), cell).unwrap();
            }
        }
        assert_eq!(GomokuRules::find_five(&board), None);
        assert_eq!(GomokuRules.check_terminal(&board), Some(GameResult::Draw));
    }

    #[test]
    fn test_pass_not_allowed() {
        let board = Board::new(15);
        assert_eq!(
            GomokuRules.check_pass(&board, Cell::Black),
            Err(GameError::PassNotAllowed(Variant::Gomoku))
        );
    }
}
