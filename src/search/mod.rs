pub mod alphabeta;
pub mod eval;

pub use alphabeta::{Difficulty, SearchError, SearchParams, SearchResult, Searcher, MAX_DEPTH, MIN_DEPTH};
pub use eval::{heuristic, EvalWeights};
