use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_boardgames::ai::{policy_for, OpponentPolicy, PolicyConfig};
use rust_boardgames::core::{Board, Cell, Coord, Variant};
use rust_boardgames::game::GameFactory;
use rust_boardgames::rules::{GoRules, RulesEngine};

fn bench_go_legal_moves(c: &mut Criterion) {
    let mut game = GameFactory::create("go", 19).unwrap();
    for i in 0..40 {
        let _ = game.attempt_move((i * 7) % 19, (i * 11) % 19);
    }

    c.bench_function("go_legal_moves_19x19", |b| {
        b.iter(|| black_box(game.legal_moves()))
    });
}

fn bench_go_capture(c: &mut Criterion) {
    // White chain along row 1 with Black on both sides; (1,18) closes it.
    let mut board = Board::new(19);
    for col in 0..18 {
        let _ = board.set(Coord::new(1, col), Cell::White);
        let _ = board.set(Coord::new(0, col), Cell::Black);
        let _ = board.set(Coord::new(2, col), Cell::Black);
    }
    let _ = board.set(Coord::new(0, 18), Cell::Black);
    let _ = board.set(Coord::new(2, 18), Cell::Black);

    c.bench_function("go_capture_chain", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            black_box(GoRules.place(&mut scratch, Coord::new(1, 18), Cell::Black, None))
        })
    });
}

fn bench_reversi_legal_moves(c: &mut Criterion) {
    let game = GameFactory::create("reversi", 8).unwrap();

    c.bench_function("reversi_legal_moves", |b| {
        b.iter(|| black_box(game.legal_moves()))
    });
}

fn bench_gomoku_policy(c: &mut Criterion) {
    let mut game = GameFactory::create("gomoku", 15).unwrap();
    for &(r, col) in &[(7, 7), (7, 8), (8, 7), (6, 6), (8, 8), (9, 9)] {
        let _ = game.attempt_move(r, col);
    }
    let mut policy = policy_for(Variant::Gomoku, PolicyConfig::default());

    c.bench_function("gomoku_select_move", |b| {
        b.iter(|| black_box(policy.select_move(&game)))
    });
}

criterion_group!(
    benches,
    bench_go_legal_moves,
    bench_go_capture,
    bench_reversi_legal_moves,
    bench_gomoku_policy
);
criterion_main!(benches);
