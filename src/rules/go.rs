//! Go with simplified rules.
//!
//! ## Placement
//!
//! 1. The target must be empty (checked by the caller).
//! 2. The stone is placed on a scratch board.
//! 3. Every adjacent opposing group left without liberties is captured.
//! 4. If nothing was captured and the new stone's own group has no
//!    liberties, the move is suicide and is rejected.
//! 5. Ko: if the resulting board equals the position before the opponent's
//!    last move, the move is rejected. Only this one position is compared;
//!    longer repetition cycles are not detected.
//!
//! Go never ends on a placement. It ends on two consecutive passes (or a
//! resignation), and is then scored by counting stones on the board only:
//! no territory and no dead-stone removal. Black must lead by more than
//! [`GO_COMPENSATION`] stones to win, so White takes ties.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::engine::{GameResult, Placement, RulesEngine};
use crate::core::action::ends_with_double_pass;
use crate::core::{Board, Cell, Coord, GameError, Move, Variant};

/// Stones of margin Black needs over White (7.5 points of komi, halved).
pub const GO_COMPENSATION: f64 = 3.75;

/// A maximal set of same-colored, orthogonally connected stones.
#[derive(Clone, Debug, Default)]
pub struct Group {
    /// Stones in the group, in discovery order.
    pub stones: Vec<Coord>,
    /// Distinct empty cells adjacent to the group.
    pub liberties: FxHashSet<Coord>,
}

impl Group {
    /// Flood-fill the group containing `seed`.
    ///
    /// Returns an empty group when `seed` holds no stone.
    #[must_use]
    pub fn at(board: &Board, seed: Coord) -> Self {
        let mut group = Group::default();
        let Some(color) = board.cell(seed).filter(|c| c.is_stone()) else {
            return group;
        };

        let mut visited = FxHashSet::default();
        let mut stack = vec![seed];
        visited.insert(seed);

        while let Some(coord) = stack.pop() {
            group.stones.push(coord);
            for neighbor in board.neighbors(coord) {
                match board.cell(neighbor) {
                    Some(Cell::Empty) => {
                        group.liberties.insert(neighbor);
                    }
                    Some(cell) if cell == color && visited.insert(neighbor) => {
                        stack.push(neighbor);
                    }
                    _ => {}
                }
            }
        }

        group
    }

    /// Number of distinct liberties.
    #[must_use]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// Number of stones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Check if the group has no stones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Go rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoRules;

impl GoRules {
    /// Remove every opposing group adjacent to `coord` that has no liberties.
    ///
    /// Returns the number of stones removed.
    fn capture_around(board: &mut Board, coord: Coord, opponent: Cell) -> Result<usize, GameError> {
        let mut captured = 0;
        for neighbor in board.neighbors(coord) {
            // A group touching the stone twice is gone after the first pass.
            if board.cell(neighbor) != Some(opponent) {
                continue;
            }
            let group = Group::at(board, neighbor);
            if group.liberty_count() == 0 {
                for &stone in &group.stones {
                    board.set(stone, Cell::Empty)?;
                }
                captured += group.len();
            }
        }
        Ok(captured)
    }

    /// Area score as (black stones, white stones).
    #[must_use]
    pub fn area(board: &Board) -> (usize, usize) {
        (board.count(Cell::Black), board.count(Cell::White))
    }
}

impl RulesEngine for GoRules {
    fn variant(&self) -> Variant {
        Variant::Go
    }

    fn place(
        &self,
        board: &mut Board,
        coord: Coord,
        mover: Cell,
        previous: Option<&Board>,
    ) -> Result<Placement, GameError> {
        board.set(coord, mover)?;

        let captured = Self::capture_around(board, coord, mover.opponent())?;

        if captured == 0 && Group::at(board, coord).liberty_count() == 0 {
            return Err(GameError::IllegalMove(format!("{} at {} is suicide", mover, coord)));
        }

        if previous.is_some_and(|prev| *prev == *board) {
            return Err(GameError::PositionalRepeat(coord));
        }

        if captured > 0 {
            debug!(%coord, captured, "captured stones");
        }
        Ok(Placement {
            captured,
            flipped: 0,
        })
    }

    fn check_terminal(&self, _board: &Board) -> Option<GameResult> {
        None
    }

    fn check_pass(&self, _board: &Board, _passer: Cell) -> Result<(), GameError> {
        Ok(())
    }

    fn after_pass(&self, board: &Board, moves: &Vector<Move>, _next: Cell) -> Option<GameResult> {
        ends_with_double_pass(moves).then(|| self.score(board))
    }

    fn score(&self, board: &Board) -> GameResult {
        let (black, white) = Self::area(board);
        if black as f64 - GO_COMPENSATION > white as f64 {
            GameResult::Winner(Cell::Black)
        } else {
            GameResult::Winner(Cell::White)
        }
    }
}
