//! Reversi positional heuristic.

use crate::core::{Coord, GameRng};
use crate::game::Game;
use crate::rules::ReversiRules;

use super::config::PolicyConfig;
use super::policy::{pick_best, OpponentPolicy};

/// Square weights for the 8x8 board: corners are worth most, the cells that
/// give the opponent a corner are worth least.
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [5, -2, 1, 0, 0, 1, -2, 5],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Reference Reversi policy: positional weight plus flip count.
#[derive(Clone, Debug)]
pub struct ReversiHeuristic {
    config: PolicyConfig,
    rng: GameRng,
}

impl ReversiHeuristic {
    /// Create the policy from a configuration.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Positional weight of a cell; zero off the 8x8 table.
    #[must_use]
    pub fn weight(coord: Coord) -> f64 {
        POSITION_WEIGHTS
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .map_or(0.0, |&w| f64::from(w))
    }
}

impl OpponentPolicy for ReversiHeuristic {
    fn select_move(&mut self, game: &Game) -> Option<Coord> {
        let board = game.board();
        let mover = game.current_player();
        let scored: Vec<(Coord, f64)> = game
            .legal_moves()
            .into_iter()
            .map(|coord| {
                let flips = ReversiRules::flips(board, coord, mover).len();
                (coord, Self::weight(coord) + self.config.flip_weight * flips as f64)
            })
            .collect();
        pick_best(&scored, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameFactory;

    #[test]
    fn test_weights_symmetric() {
        for r in 0..8 {
            for c in 0..8 {
                assert_eq!(POSITION_WEIGHTS[r][c], POSITION_WEIGHTS[c][r]);
                assert_eq!(POSITION_WEIGHTS[r][c], POSITION_WEIGHTS[7 - r][7 - c]);
            }
        }
        assert_eq!(ReversiHeuristic::weight(Coord::new(0, 0)), 100.0);
        assert_eq!(ReversiHeuristic::weight(Coord::new(9, 9)), 0.0);
    }

    #[test]
    fn test_opening_move_is_legal() {
        let game = GameFactory::create("reversi", 8).unwrap();
        let mut policy = ReversiHeuristic::new(PolicyConfig::default());
        let pick = policy.select_move(&game).unwrap();
        assert!(game.legal_moves().contains(&pick));
    }

    #[test]
    fn test_prefers_corner() {
        // Black to move: (0,0) captures along the diagonal, (2,3) and
        // others flip a single stone elsewhere.
        let mut codes = vec![vec![0u8; 8]; 8];
        codes[1][1] = 2;
        codes[2][2] = 1;
        codes[3][3] = 1;
        codes[3][4] = 2;
        codes[4][3] = 2;
        codes[4][4] = 1;
        let record = crate::persist::SavedGame {
            variant: crate::core::Variant::Reversi,
            size: 8,
            board: codes,
            current_player: 1,
            moves: Vec::new(),
            metadata: Default::default(),
        };
        let game = GameFactory::restore(&record).unwrap();
        assert!(game.is_legal(Coord::new(0, 0)));

        let mut policy = ReversiHeuristic::new(PolicyConfig::default());
        assert_eq!(policy.select_move(&game), Some(Coord::new(0, 0)));
    }
}
