use crate::board::{Mark, Outcome, Position};
use crate::search::{SearchParams, Searcher};
use anyhow::{Context, Result};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Opponent {
    /// Uniform over legal moves, seeded per game.
    Random,
    /// Lowest free cell.
    FirstAvailable,
    /// Another searcher at `opponent_depth`.
    Engine,
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub engine: Mark,
    pub depth: u32,
    pub opponent: Opponent,
    pub opponent_depth: u32,
    pub seed: u64,
    pub threads: usize,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 100, engine: Mark::O, depth: 9, opponent: Opponent::Random, opponent_depth: 2, seed: 42, threads: 1 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub winner: Option<Mark>,
    pub engine: Mark,
    pub depth: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub engine_wins: usize,
    pub opponent_wins: usize,
    pub ties: usize,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    let engine = SearchParams::new(params.engine, params.depth)?;
    let opponent = SearchParams::new(params.engine.opponent(), params.opponent_depth)?;
    let play = |gi: usize| play_game(gi, params, engine, opponent);
    let games = if params.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads).build()?;
        pool.install(|| (0..params.games).into_par_iter().map(play).collect::<Result<Vec<_>>>())?
    } else {
        (0..params.games).map(play).collect::<Result<Vec<_>>>()?
    };
    let t = summarize(&games);
    info!("{} games: engine {} / opponent {} / ties {}", games.len(), t.engine_wins, t.opponent_wins, t.ties);
    Ok(games)
}

fn play_game(gi: usize, params: &SelfPlayParams, engine: SearchParams, opponent: SearchParams) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (gi as u64).rotate_left(17));
    let mut engine_s = Searcher::new(engine)?;
    let mut opp_s = Searcher::new(opponent)?;
    let mut pos = Position::startpos();
    let mut moves = Vec::with_capacity(9);
    while !pos.is_terminal() {
        let mv = if pos.side_to_move() == params.engine {
            engine_s.select_move(&mut pos)?.cell
        } else {
            let legal = pos.legal_moves();
            match params.opponent {
                Opponent::Random => legal[rng.gen_range(0..legal.len())],
                Opponent::FirstAvailable => legal[0],
                Opponent::Engine => opp_s.select_move(&mut pos)?.cell,
            }
        };
        anyhow::ensure!(pos.place(mv), "selected illegal move {mv} in game {gi}");
        moves.push(mv);
    }
    let winner = match pos.winner() { Outcome::Win(m) => Some(m), _ => None };
    Ok(GameRecord { moves, winner, engine: params.engine, depth: params.depth })
}

pub fn summarize(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for g in games {
        match g.winner {
            Some(m) if m == g.engine => t.engine_wins += 1,
            Some(_) => t.opponent_wins += 1,
            None => t.ties += 1,
        }
    }
    t
}

/// One JSON object per line.
pub fn write_games<P: AsRef<Path>>(path: P, games: &[GameRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() { if !dir.as_os_str().is_empty() { create_dir_all(dir)?; } }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("create {}", path.display()))?);
    for g in games { writeln!(w, "{}", serde_json::to_string(g)?)?; }
    w.flush()?;
    Ok(())
}

pub fn read_games<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let rdr = BufReader::new(File::open(path).with_context(|| format!("open {}", path.display()))?);
    let mut out = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), i + 1))?);
    }
    Ok(out)
}
