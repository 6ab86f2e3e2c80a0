use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridbot::search::Searcher;
use gridbot::{GameConfig, Grid};

fn bench_search(c: &mut Criterion) {
    let empty_3x3 = Grid::new(3, 3);
    c.bench_function("best_move_3x3_empty_depth4", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(GameConfig::new(3, 3, 3, 4));
            let r = s.best_move(black_box(&empty_3x3));
            black_box(r.nodes)
        })
    });

    let mid_4x4: Grid = "X.O./.XO./..../....".parse().expect("valid board");
    c.bench_function("best_move_4x4_midgame_depth3", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(GameConfig::new(4, 4, 4, 3));
            let r = s.best_move(black_box(&mid_4x4));
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
