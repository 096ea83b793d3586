//! Gomoku line-threat heuristic.
//!
//! Each candidate cell is scored as if the mover and, separately, the
//! opponent placed there. Per axis the would-be run and its blocked ends are
//! looked up in a threat table, so a cell that blocks an opponent four scores
//! almost as high as one that makes a four.

use crate::core::{Board, Cell, Coord, GameRng, COMPASS};
use crate::game::Game;
use crate::rules::{LINE_DIRECTIONS, WIN_LENGTH};

use super::config::PolicyConfig;
use super::policy::{pick_best, OpponentPolicy};

/// Threat value of a run of `len` stones with `blocked` closed ends.
fn threat(len: usize, blocked: usize) -> f64 {
    if len >= WIN_LENGTH {
        return 1_000_000.0;
    }
    match (len, blocked) {
        (_, 2) => 0.0,
        (4, 0) => 50_000.0,
        (4, _) => 5_000.0,
        (3, 0) => 2_000.0,
        (3, _) => 200.0,
        (2, 0) => 100.0,
        (2, _) => 10.0,
        (_, 0) => 10.0,
        _ => 1.0,
    }
}

/// Reference Gomoku policy.
#[derive(Clone, Debug)]
pub struct GomokuHeuristic {
    config: PolicyConfig,
    rng: GameRng,
}

impl GomokuHeuristic {
    /// Create the policy from a configuration.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Sum of threat values over the four axes if `player` stood at `coord`.
    pub fn line_score(board: &Board, coord: Coord, player: Cell) -> f64 {
        LINE_DIRECTIONS
            .iter()
            .map(|&(dr, dc)| {
                let (ahead, ahead_open) = Self::extend(board, coord, dr, dc, player);
                let (behind, behind_open) = Self::extend(board, coord, -dr, -dc, player);
                let blocked = usize::from(!ahead_open) + usize::from(!behind_open);
                threat(1 + ahead + behind, blocked)
            })
            .sum()
    }

    /// Count `player` stones walking away from `coord`; report whether the
    /// cell after the run is empty.
    fn extend(board: &Board, coord: Coord, dr: isize, dc: isize, player: Cell) -> (usize, bool) {
        let mut count = 0;
        let mut cursor = coord.offset(dr, dc, board.size());
        while let Some(next) = cursor {
            match board.cell(next) {
                Some(cell) if cell == player => {
                    count += 1;
                    cursor = next.offset(dr, dc, board.size());
                }
                Some(Cell::Empty) => return (count, true),
                _ => return (count, false),
            }
        }
        (count, false)
    }

    /// Empty cells touching a stone, or the center on an empty board.
    pub fn candidates(board: &Board) -> Vec<Coord> {
        if board.count(Cell::Empty) == board.size() * board.size() {
            let mid = board.size() / 2;
            return vec![Coord::new(mid, mid)];
        }
        board
            .coords()
            .filter(|&coord| board.is_empty_at(coord))
            .filter(|&coord| {
                COMPASS.iter().any(|&(dr, dc)| {
                    coord
                        .offset(dr, dc, board.size())
                        .and_then(|n| board.cell(n))
                        .is_some_and(Cell::is_stone)
                })
            })
            .collect()
    }

    fn centrality(&self, board: &Board, coord: Coord) -> f64 {
        let mid = (board.size() as f64 - 1.0) / 2.0;
        let distance = (coord.row as f64 - mid).abs() + (coord.col as f64 - mid).abs();
        self.config.centrality_weight * (board.size() as f64 - distance).max(0.0)
    }

    /// Score of placing the side to move at `coord`.
    pub fn evaluate(&self, board: &Board, coord: Coord, mover: Cell) -> f64 {
        Self::line_score(board, coord, mover)
            + self.config.defense_weight * Self::line_score(board, coord, mover.opponent())
            + self.centrality(board, coord)
    }
}

impl OpponentPolicy for GomokuHeuristic {
    fn select_move(&mut self, game: &Game) -> Option<Coord> {
        if game.is_over() {
            return None;
        }
        let board = game.board();
        let mover = game.current_player();
        let scored: Vec<(Coord, f64)> = Self::candidates(board)
            .into_iter()
            .map(|coord| (coord, self.evaluate(board, coord, mover)))
            .collect();
        pick_best(&scored, &mut self.rng)
    }
}
