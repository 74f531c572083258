use clap::Parser;
use noughts::board::Mark;
use noughts::selfplay::{generate_games, summarize, write_games, Opponent, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noughts-selfplay", about = "Play the engine against a scripted opponent and write JSONL records")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 9)]
    depth: u32,
    /// Engine plays X (moves first) instead of O
    #[arg(long, default_value_t = false)]
    engine_first: bool,
    #[arg(long, value_enum, default_value = "random")]
    opponent: Opponent,
    #[arg(long, default_value_t = 2)]
    opponent_depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        engine: if a.engine_first { Mark::X } else { Mark::O },
        depth: a.depth,
        opponent: a.opponent,
        opponent_depth: a.opponent_depth,
        seed: a.seed,
        threads: a.threads,
    };
    eprintln!("Generating {} games (engine={}, depth={}, opponent={:?}, threads={})", a.games, params.engine, a.depth, a.opponent, a.threads);
    let games = generate_games(&params)?;
    let t = summarize(&games);
    eprintln!("engine wins {} / opponent wins {} / ties {}", t.engine_wins, t.opponent_wins, t.ties);
    write_games(&a.out, &games)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
