use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use noughts::board::{Mark, Position};
use noughts::search::{SearchParams, Searcher, MAX_DEPTH, MIN_DEPTH};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "noughts-bench", version, about = "Measure move latency and node counts of the minimax engine")]
struct Args {
    /// Board as nine cells (X, O, '.'), or 'suite' for the built-in positions
    #[arg(long, default_value = "suite")]
    cells: String,

    /// Depths to run, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [2u32, 4, 9])]
    depths: Vec<u32>,

    /// Repetitions per position and depth
    #[arg(long, default_value_t = 10)]
    reps: u32,

    /// Random-opening games played at full depth after the fixed positions (0 disables)
    #[arg(long, default_value_t = 10)]
    games: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const SUITE: &[(&str, &str)] = &[
    ("empty board", "........."),
    ("one move each", "X...O...."),
    ("mid game", "X.O.X...O"),
    ("win in one", "OO.XX...."),
    ("three moves each", "X.O.X.O.X"),
    ("four moves each", "XOX.OXO.."),
];

fn bench_position(name: &str, cells: &str, depths: &[u32], reps: u32) -> anyhow::Result<()> {
    let mut pos = Position::from_cells(cells)?;
    if pos.is_terminal() {
        println!("{name}: game already over, skipping");
        return Ok(());
    }
    let engine = pos.side_to_move();
    println!("{name} ({} to move, {} empty):", engine, pos.legal_moves().len());
    for &d in depths {
        let mut s = Searcher::new(SearchParams::new(engine, d)?)?;
        let mut total = Duration::ZERO;
        let mut last = None;
        for _ in 0..reps.max(1) {
            let t0 = Instant::now();
            last = Some(s.select_move(&mut pos)?);
            total += t0.elapsed();
        }
        if let Some(r) = last {
            let avg = total.as_secs_f64() / reps.max(1) as f64;
            println!("  depth {d}: cell {} score {} nodes {} avg {:.3}ms", r.cell + 1, r.score, r.nodes, avg * 1000.0);
        }
    }
    Ok(())
}

// Random opponent moves with the engine answering at full depth; reports per-move latency.
fn bench_games(games: usize, seed: u64) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut s = Searcher::new(SearchParams::new(Mark::O, MAX_DEPTH)?)?;
    let mut times: Vec<Duration> = Vec::new();
    let pb = ProgressBar::new(games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games").unwrap_or_else(|_| ProgressStyle::default_bar()));
    for _ in 0..games {
        let mut pos = Position::startpos();
        while !pos.is_terminal() {
            let legal = pos.legal_moves();
            pos.place(legal[rng.gen_range(0..legal.len())]);
            if pos.is_terminal() { break; }
            let t0 = Instant::now();
            let r = s.select_move(&mut pos)?;
            times.push(t0.elapsed());
            pos.place(r.cell);
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    if times.is_empty() { return Ok(()); }
    let total: Duration = times.iter().sum();
    let min = times.iter().min().copied().unwrap_or_default();
    let max = times.iter().max().copied().unwrap_or_default();
    println!("{games} games, {} engine moves at depth {MAX_DEPTH}:", times.len());
    println!("  avg {:.3}ms min {:.3}ms max {:.3}ms total {:.3}s",
        total.as_secs_f64() * 1000.0 / times.len() as f64, min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0, total.as_secs_f64());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if let Some(bad) = args.depths.iter().find(|&&d| !(MIN_DEPTH..=MAX_DEPTH).contains(&d)) {
        anyhow::bail!("depth {bad} out of range {MIN_DEPTH}..={MAX_DEPTH}");
    }
    if args.cells == "suite" {
        for (name, cells) in SUITE { bench_position(name, cells, &args.depths, args.reps)?; }
    } else {
        bench_position("custom", &args.cells, &args.depths, args.reps)?;
    }
    if args.games > 0 { bench_games(args.games, args.seed)?; }
    Ok(())
}
