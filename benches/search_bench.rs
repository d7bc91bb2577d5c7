//! Benchmarks for evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gomoku::search::{Searcher, TranspositionCache};
use gomoku::{Board, EvalStrategy, Evaluator, Stone};

/// Opening skirmish in the middle of a 15x15 board
fn midgame() -> Board {
    Board::from_rows(&[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "......O........",
        ".....XXO.......",
        "......XO.X.....",
        ".....OX.X......",
        "........O......",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ])
    .expect("valid board")
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let board = midgame();

    for strategy in [EvalStrategy::Easy, EvalStrategy::Medium, EvalStrategy::Hard] {
        let eval = Evaluator::new(Stone::White, strategy);
        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter(|| black_box(eval.score(black_box(&board))))
        });
    }

    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("candidate_moves", |b| {
        b.iter(|| black_box(board.candidate_moves()))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    let board = midgame();

    for depth in 1..=3u8 {
        group.bench_with_input(BenchmarkId::new("medium", depth), &depth, |b, &depth| {
            b.iter(|| {
                let eval = Evaluator::new(Stone::White, EvalStrategy::Medium);
                let mut searcher = Searcher::new(eval, TranspositionCache::new(16));
                searcher.search(&board, depth)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_candidates, bench_search);
criterion_main!(benches);
