use criterion::{criterion_group, criterion_main, Criterion, black_box};
use noughts::board::{Mark, Position};
use noughts::search::{Difficulty, SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let name = format!("select_move_empty_depth_{}", d.depth());
        c.bench_function(&name, |ben| {
            let mut pos = Position::startpos();
            let mut s = Searcher::new(SearchParams::new(Mark::O, d.depth()).unwrap()).unwrap();
            ben.iter(|| {
                let r = s.select_move(black_box(&mut pos)).unwrap();
                black_box(r.nodes)
            })
        });
    }
    c.bench_function("select_move_mid_game_depth_9", |ben| {
        let mut pos = Position::from_cells("X.O.X...O").unwrap();
        let mut s = Searcher::new(SearchParams::new(Mark::X, 9).unwrap()).unwrap();
        ben.iter(|| black_box(s.select_move(&mut pos).unwrap()))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
