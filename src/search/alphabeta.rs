use crate::board::{Mark, Outcome, Position};
use crate::search::eval::{heuristic, EvalWeights, DRAW_SCORE, INF, WIN_SCORE};
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_DEPTH: u32 = 1;
pub const MAX_DEPTH: u32 = 9;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be between 1 and 9, got {0}")]
    InvalidDepth(u32),

    #[error("engine and opponent must use different marks")]
    SameMarks,

    #[error("no legal move available")]
    NoLegalMoves,

    #[error("game is already over")]
    GameOver,
}

/// Named search depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> u32 {
        match self { Difficulty::Easy => 2, Difficulty::Medium => 4, Difficulty::Hard => 9 }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self { Difficulty::Easy => "easy", Difficulty::Medium => "medium", Difficulty::Hard => "hard" };
        write!(f, "{s} (depth {})", self.depth())
    }
}

impl FromStr for Difficulty {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub engine: Mark,
    pub opponent: Mark,
    pub depth: u32,
    pub weights: EvalWeights,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { engine: Mark::O, opponent: Mark::X, depth: MAX_DEPTH, weights: EvalWeights::default() }
    }
}

impl SearchParams {
    pub fn new(engine: Mark, depth: u32) -> Result<Self, SearchError> {
        let p = Self { engine, opponent: engine.opponent(), depth, ..Self::default() };
        p.validate()?;
        Ok(p)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) { return Err(SearchError::InvalidDepth(self.depth)); }
        if self.engine == self.opponent { return Err(SearchError::SameMarks); }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: usize,
    pub score: i32,
    /// Minimax calls made by this search.
    pub nodes: u64,
}

/// Depth-bounded minimax with alpha-beta pruning over a borrowed [`Position`].
///
/// The searcher writes marks into the position and clears them on the way back up,
/// so the position is identical before and after [`Searcher::select_move`]. The live
/// side-to-move is never consulted or changed; the engine plays `params.engine`.
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self { params: SearchParams::default(), nodes: 0 } }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Result<Self, SearchError> {
        params.validate()?;
        Ok(Self { params, nodes: 0 })
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn max_depth(&self) -> u32 { self.params.depth }

    pub fn set_max_depth(&mut self, depth: u32) -> Result<(), SearchError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) { return Err(SearchError::InvalidDepth(depth)); }
        self.params.depth = depth;
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) { self.params.depth = difficulty.depth(); }

    /// Picks the best cell for the engine. Ties go to the lowest index.
    pub fn select_move(&mut self, pos: &mut Position) -> Result<SearchResult, SearchError> {
        self.nodes = 0;
        if let Outcome::Win(_) = pos.winner() { return Err(SearchError::GameOver); }
        let moves = pos.legal_moves();
        if moves.is_empty() { return Err(SearchError::NoLegalMoves); }

        let mut best: Option<(usize, i32)> = None;
        for m in moves {
            pos.put(m, self.params.engine);
            let score = self.minimax(pos, 1, false, -INF, INF);
            pos.undo_place(m);
            trace!("root move {} scored {}", m, score);
            if best.map_or(true, |(_, bs)| score > bs) { best = Some((m, score)); }
        }

        let (cell, score) = best.ok_or(SearchError::NoLegalMoves)?;
        debug!("depth {} engine {}: cell {} score {} nodes {}", self.params.depth, self.params.engine, cell, score, self.nodes);
        Ok(SearchResult { cell, score, nodes: self.nodes })
    }

    fn minimax(&mut self, pos: &mut Position, depth: u32, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        let d = depth as i32;
        match pos.winner() {
            Outcome::Win(m) if m == self.params.engine => return WIN_SCORE - d,
            Outcome::Win(_) => return d - WIN_SCORE,
            Outcome::Tie => return DRAW_SCORE,
            Outcome::InProgress => {}
        }
        if depth >= self.params.depth {
            return heuristic(pos.grid(), self.params.engine, self.params.opponent, &self.params.weights);
        }

        let mark = if maximizing { self.params.engine } else { self.params.opponent };
        let mut best = if maximizing { -INF } else { INF };
        for m in pos.legal_moves() {
            pos.put(m, mark);
            let score = self.minimax(pos, depth + 1, !maximizing, alpha, beta);
            pos.undo_place(m);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha { break; }
        }
        best
    }
}
