use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use noughts::board::{Mark, Outcome, Position, CELLS};
use noughts::protocol::Engine;
use noughts::search::{Difficulty, SearchParams, Searcher};
use noughts::tutor::explain_move;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(s: Side) -> Mark { match s { Side::X => Mark::X, Side::O => Mark::O } }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against a minimax engine", long_about = None)]
struct Args {
    /// Your mark; X moves first. Prompted when omitted
    #[arg(long, value_enum)]
    mark: Option<Side>,

    /// Engine strength
    #[arg(long, value_enum, default_value = "hard")]
    difficulty: Difficulty,

    /// Explicit search depth (1-9), overrides --difficulty
    #[arg(long)]
    depth: Option<u32>,

    /// Explain each engine move. Prompted when omitted
    #[arg(long)]
    tutor: Option<bool>,

    /// Speak the line protocol on stdin/stdout instead of the console game
    #[arg(long)]
    protocol: bool,
}

fn prompt<R: BufRead>(input: &mut R, msg: &str) -> Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 { anyhow::bail!("input closed"); }
    Ok(line.trim().to_string())
}

fn ask_mark<R: BufRead>(input: &mut R) -> Result<Mark> {
    loop {
        match prompt(input, "Do you want to be X or O? (X goes first): ")?.to_uppercase().as_str() {
            "X" => return Ok(Mark::X),
            "O" => return Ok(Mark::O),
            _ => {}
        }
    }
}

fn ask_tutor<R: BufRead>(input: &mut R) -> Result<bool> {
    loop {
        match prompt(input, "Enable tutor explanations? (Y/N): ")?.to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => {}
        }
    }
}

fn get_human_move<R: BufRead>(input: &mut R, pos: &Position) -> Result<usize> {
    loop {
        let raw = prompt(input, "Choose your move (1-9): ")?;
        match raw.parse::<usize>() {
            Ok(n) if (1..=CELLS).contains(&n) && pos.grid().is_empty_at(n - 1) => return Ok(n - 1),
            Ok(_) => println!("That spot is not available. Try again."),
            Err(_) => println!("Please enter a number from 1 to 9."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if args.protocol {
        let mut engine = Engine::new();
        let mut out = io::stdout();
        engine.run_loop(input, &mut out)?;
        return Ok(());
    }

    println!("=== Tic-tac-toe: minimax with alpha-beta pruning ===");
    let human = match args.mark { Some(s) => Mark::from(s), None => ask_mark(&mut input)? };
    let tutor = match args.tutor { Some(t) => t, None => ask_tutor(&mut input)? };
    let engine_mark = human.opponent();
    let depth = args.depth.unwrap_or_else(|| args.difficulty.depth());
    let params = SearchParams::new(engine_mark, depth).context("invalid engine configuration")?;
    let mut searcher = Searcher::new(params)?;
    info!("engine plays {} at depth {}", engine_mark, depth);

    let mut pos = Position::startpos();
    println!("\n{pos}");
    while !pos.is_terminal() {
        if pos.side_to_move() == human {
            println!("Your turn.");
            let mv = get_human_move(&mut input, &pos)?;
            pos.place(mv);
        } else {
            println!("Engine is thinking...");
            let before = *pos.grid();
            let t0 = Instant::now();
            let res = searcher.select_move(&mut pos)?;
            info!("searched {} nodes in {:.3}ms", res.nodes, t0.elapsed().as_secs_f64() * 1000.0);
            anyhow::ensure!(pos.place(res.cell), "engine chose an occupied cell {}", res.cell + 1);
            println!("\n{pos}");
            if tutor {
                println!("Tutor: {}", explain_move(&before, res.cell, engine_mark, human));
                println!("  (internal score for this move: {})\n", res.score);
            }
            continue;
        }
        println!("\n{pos}");
    }

    match pos.winner() {
        Outcome::Win(m) if m == human => println!("Game over: you win!"),
        Outcome::Win(_) => println!("Game over: the engine wins!"),
        _ => println!("Game over: it's a tie!"),
    }
    Ok(())
}
