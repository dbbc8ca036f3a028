//! Benchmarks for move generation, evaluation, and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gridchess::board::{evaluate, find_best_move, GameState};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = GameState::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.valid_moves())));

    let mut middlegame = GameState::from_fen(MIDDLEGAME).unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.valid_moves()))
    });

    // Many moves available
    let mut kiwipete = GameState::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.valid_moves())));

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let state = GameState::from_fen(fen).unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &state, |b, state| {
            b.iter(|| black_box(evaluate(state)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = GameState::new();
                let moves = state.valid_moves();
                find_best_move(&mut state, &moves, depth)
            })
        });
    }

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut state = GameState::from_fen(
                    "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
                )
                .unwrap();
                let moves = state.valid_moves();
                find_best_move(&mut state, &moves, depth)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_eval, bench_search);
criterion_main!(benches);
