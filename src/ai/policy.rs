//! Opponent policy interface, the uniform random policy and the turn driver.
//!
//! A policy looks at a read-only `Game` and proposes a placement. It never
//! mutates the game; [`play_turn`] applies the proposal through the façade
//! so every policy move is validated like a human one.

use tracing::{debug, instrument};

use crate::core::{Coord, GameError, GameRng, Variant};
use crate::game::{Game, MoveOutcome};

use super::config::PolicyConfig;
use super::gomoku::GomokuHeuristic;
use super::reversi::ReversiHeuristic;

/// Chooses a placement for the side to move.
pub trait OpponentPolicy: Send + Sync {
    /// Propose a placement for `game.current_player()`.
    ///
    /// Returns `None` if no legal placement exists.
    fn select_move(&mut self, game: &Game) -> Option<Coord>;
}

/// Uniform random policy.
///
/// Selects uniformly from `Game::legal_moves`. Used for Go, where no
/// reference heuristic exists.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a policy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl OpponentPolicy for RandomPolicy {
    fn select_move(&mut self, game: &Game) -> Option<Coord> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range_usize(0..moves.len());
        Some(moves[idx])
    }
}

/// Build the reference policy for a variant.
pub fn policy_for(variant: Variant, config: PolicyConfig) -> Box<dyn OpponentPolicy> {
    match variant {
        Variant::Gomoku => Box::new(GomokuHeuristic::new(config)),
        Variant::Go => Box::new(RandomPolicy::new(config.seed)),
        Variant::Reversi => Box::new(ReversiHeuristic::new(config)),
    }
}

/// Let `policy` play one turn for the side to move.
///
/// A proposed placement goes through `attempt_move`. When the policy has no
/// placement the side passes; in a variant without passing this is reported
/// as `IllegalMove`.
#[instrument(skip_all, fields(variant = %game.variant(), player = %game.current_player()))]
pub fn play_turn(game: &mut Game, policy: &mut dyn OpponentPolicy) -> Result<MoveOutcome, GameError> {
    if game.is_over() {
        return Err(GameError::GameOver);
    }

    match policy.select_move(game) {
        Some(coord) => {
            debug!(%coord, "policy placed");
            game.attempt_move(coord.row, coord.col)
        }
        None => {
            debug!("policy has no placement");
            let player = game.current_player();
            game.pass_turn().map_err(|err| match err {
                GameError::PassNotAllowed(_) => {
                    GameError::IllegalMove(format!("{} has no legal placement", player))
                }
                other => other,
            })
        }
    }
}

/// Pick the highest-scoring candidate, breaking ties with `rng`.
pub(crate) fn pick_best(scored: &[(Coord, f64)], rng: &mut GameRng) -> Option<Coord> {
    let best = scored
        .iter()
        .map(|&(_, score)| score)
        .fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<Coord> = scored
        .iter()
        .filter(|&&(_, score)| (score - best).abs() < 1e-9)
        .map(|&(coord, _)| coord)
        .collect();
    rng.choose(&tied).copied()
}
