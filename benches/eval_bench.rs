use criterion::{criterion_group, criterion_main, Criterion, black_box};
use noughts::board::{Grid, Mark};
use noughts::search::eval::{heuristic, EvalWeights};

fn bench_eval(c: &mut Criterion) {
    let g = Grid::parse("X.O.X...O").unwrap();
    let w = EvalWeights::default();
    c.bench_function("heuristic_mid_game", |ben| {
        ben.iter(|| {
            let v = heuristic(black_box(&g), Mark::O, Mark::X, &w);
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
