//! Reversi (Othello).
//!
//! The four center cells start filled in the standard diagonal pattern.
//! A placement is legal when at least one of the eight compass directions
//! holds a run of opposing stones closed off by one of the mover's own
//! stones; every such run is flipped.
//!
//! After each placement, if the opponent has no legal cell the turn passes
//! straight back to the mover (recorded as a pass). If the mover has no
//! legal cell either, the game ends and is scored by stone count; equal
//! counts are a draw.

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use super::engine::{GameResult, Placement, RulesEngine, TurnHook};
use crate::core::board::COMPASS;
use crate::core::{Board, Cell, Coord, GameError, Move, Variant};

/// Stones flipped by one placement.
pub type Flips = SmallVec<[Coord; 16]>;

/// Reversi rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReversiRules;

impl ReversiRules {
    /// Stones that placing `mover` at `coord` would flip.
    ///
    /// Empty when the cell is occupied or no run is closed off.
    #[must_use]
    pub fn flips(board: &Board, coord: Coord, mover: Cell) -> Flips {
        let mut flips = Flips::new();
        if !board.is_empty_at(coord) {
            return flips;
        }
        let opponent = mover.opponent();

        for &(dr, dc) in &COMPASS {
            let mut run: SmallVec<[Coord; 8]> = SmallVec::new();
            let mut cursor = coord.offset(dr, dc, board.size());

            while let Some(current) = cursor {
                match board.cell(current) {
                    Some(cell) if cell == opponent => run.push(current),
                    Some(cell) if cell == mover => {
                        flips.extend(run.drain(..));
                        break;
                    }
                    _ => break,
                }
                cursor = current.offset(dr, dc, board.size());
            }
        }

        flips
    }

    /// Check if `player` has any legal placement.
    #[must_use]
    pub fn has_moves(board: &Board, player: Cell) -> bool {
        board
            .coords()
            .any(|coord| !Self::flips(board, coord, player).is_empty())
    }
}

impl RulesEngine for ReversiRules {
    fn variant(&self) -> Variant {
        Variant::Reversi
    }

    fn setup(&self, board: &mut Board) {
        if board.size() < 2 {
            return;
        }
        let hi = board.size() / 2;
        let lo = hi - 1;
        let start = [
            (Coord::new(lo, lo), Cell::White),
            (Coord::new(lo, hi), Cell::Black),
            (Coord::new(hi, lo), Cell::Black),
            (Coord::new(hi, hi), Cell::White),
        ];
        for (coord, cell) in start {
            let placed = board.set(coord, cell);
            debug_assert!(placed.is_ok(), "center cell {} off a {}x{} board", coord, board.size(), board.size());
        }
    }

    fn place(
        &self,
        board: &mut Board,
        coord: Coord,
        mover: Cell,
        _previous: Option<&Board>,
    ) -> Result<Placement, GameError> {
        let flips = Self::flips(board, coord, mover);
        if flips.is_empty() {
            return Err(GameError::IllegalMove(format!("{} at {} flips nothing", mover, coord)));
        }

        board.set(coord, mover)?;
        for &stone in &flips {
            board.set(stone, mover)?;
        }

        debug!(%coord, flipped = flips.len(), "flipped stones");
        Ok(Placement {
            captured: 0,
            flipped: flips.len(),
        })
    }

    fn check_terminal(&self, _board: &Board) -> Option<GameResult> {
        None
    }

    fn after_move(&self, board: &Board, next: Cell) -> TurnHook {
        if Self::has_moves(board, next) {
            TurnHook::Continue
        } else if Self::has_moves(board, next.opponent()) {
            TurnHook::AutoPass
        } else {
            TurnHook::Finished(self.score(board))
        }
    }

    fn check_pass(&self, board: &Board, passer: Cell) -> Result<(), GameError> {
        if Self::has_moves(board, passer) {
            Err(GameError::IllegalMove(format!("{} has a legal move and cannot pass", passer)))
        } else {
            Ok(())
        }
    }

    fn after_pass(&self, board: &Board, _moves: &Vector<Move>, next: Cell) -> Option<GameResult> {
        (!Self::has_moves(board, next)).then(|| self.score(board))
    }

    fn score(&self, board: &Board) -> GameResult {
        let black = board.count(Cell::Black);
        let white = board.count(Cell::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::Winner(Cell::Black),
            std::cmp::Ordering::Less => GameResult::Winner(Cell::White),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    fn is_legal(&self, board: &Board, coord: Coord, mover: Cell, _previous: Option<&Board>) -> bool {
        !Self::flips(board, coord, mover).is_empty()
    }
}
