//! Decision engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_ttt::core::{Board, GameRng, Player, Position};
use rust_ttt::search::{DecisionEngine, DecisionTree, SearchConfig};

fn bench_choose_empty_board(c: &mut Criterion) {
    let board = Board::new();
    let mut engine = DecisionEngine::new(SearchConfig::default()).unwrap();

    c.bench_function("choose_ai_move/empty", |b| {
        b.iter(|| engine.choose_ai_move(black_box(&board)).unwrap())
    });
}

fn bench_build_tree(c: &mut Criterion) {
    let mut board = Board::new();
    board.apply_move(1, 1, Player::Human).unwrap();
    let mut rng = GameRng::new(42);

    let mut group = c.benchmark_group("build_tree");
    for branching in [2usize, 3] {
        group.bench_function(format!("branching_{}", branching), |b| {
            b.iter(|| {
                let mut tree = DecisionTree::for_candidate(&board, Position::new(0, 0)).unwrap();
                tree.build(&mut rng, branching).unwrap();
                black_box(tree.score())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_choose_empty_board, bench_build_tree);
criterion_main!(benches);
