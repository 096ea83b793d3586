//! Opponent policy integration tests.
//!
//! Policies playing complete games against each other through `play_turn`.

use rust_boardgames::ai::{play_turn, policy_for, OpponentPolicy, PolicyConfig, RandomPolicy};
use rust_boardgames::core::{Cell, Coord, GameError, Variant};
use rust_boardgames::game::{Game, GameFactory};

/// Alternate two policies until the game ends or `limit` turns pass.
fn self_play<'a>(game: &mut Game, black: &'a mut dyn OpponentPolicy, white: &'a mut dyn OpponentPolicy, limit: usize) {
    for _ in 0..limit {
        if game.is_over() {
            return;
        }
        let policy = if game.current_player() == Cell::Black {
            &mut *black
        } else {
            &mut *white
        };
        play_turn(game, policy).unwrap();
    }
}

#[test]
fn test_reversi_self_play_finishes() {
    let mut game = GameFactory::create("reversi", 8).unwrap();
    let mut black = policy_for(Variant::Reversi, PolicyConfig::default().with_seed(1));
    let mut white = policy_for(Variant::Reversi, PolicyConfig::default().with_seed(2));

    self_play(&mut game, black.as_mut(), white.as_mut(), 200);

    assert!(game.is_over());
    let (b, w) = game.stone_counts();
    match game.winner() {
        Some(Cell::Black) => assert!(b > w),
        Some(Cell::White) => assert!(w > b),
        _ => assert_eq!(b, w),
    }
}

#[test]
fn test_gomoku_self_play_finishes() {
    let mut game = GameFactory::create("gomoku", 15).unwrap();
    let mut black = policy_for(Variant::Gomoku, PolicyConfig::default().with_seed(3));
    let mut white = policy_for(Variant::Gomoku, PolicyConfig::default().with_seed(4));

    self_play(&mut game, black.as_mut(), white.as_mut(), 15 * 15);

    assert!(game.is_over());
}

#[test]
fn test_gomoku_heuristic_beats_random() {
    let mut game = GameFactory::create("gomoku", 15).unwrap();
    let mut heuristic = policy_for(Variant::Gomoku, PolicyConfig::default());
    let mut random = RandomPolicy::new(9);

    self_play(&mut game, heuristic.as_mut(), &mut random, 15 * 15);

    assert_eq!(game.winner(), Some(Cell::Black));
}

#[test]
fn test_go_random_play_stays_legal() {
    let mut game = GameFactory::create("go", 9).unwrap();
    let mut black = policy_for(Variant::Go, PolicyConfig::default().with_seed(5));
    let mut white = policy_for(Variant::Go, PolicyConfig::default().with_seed(6));

    self_play(&mut game, black.as_mut(), white.as_mut(), 60);

    assert_eq!(game.moves().len(), game.history_len() - 1);
}

#[test]
fn test_policy_is_deterministic() {
    let game = GameFactory::create("reversi", 8).unwrap();
    let config = PolicyConfig::default().with_seed(11);

    let first = policy_for(Variant::Reversi, config.clone()).select_move(&game);
    let second = policy_for(Variant::Reversi, config).select_move(&game);
    assert_eq!(first, second);
}

/// Policy that never finds a placement.
struct Stuck;

impl OpponentPolicy for Stuck {
    fn select_move(&mut self, _game: &Game) -> Option<Coord> {
        None
    }
}

#[test]
fn test_no_placement_passes_in_go() {
    let mut game = GameFactory::create("go", 9).unwrap();
    let outcome = play_turn(&mut game, &mut Stuck).unwrap();

    assert_eq!(outcome.message, "Black passed");
    assert_eq!(game.current_player(), Cell::White);
}

#[test]
fn test_no_placement_in_gomoku_is_illegal() {
    let mut game = GameFactory::create("gomoku", 15).unwrap();
    let err = play_turn(&mut game, &mut Stuck).unwrap_err();

    assert!(matches!(err, GameError::IllegalMove(_)));
    assert_eq!(game.history_len(), 1);
}
