pub mod grid;
pub mod position;

pub use grid::{Cell, Grid, Mark, Outcome, CELLS, CENTER, CORNERS, LINES};
pub use position::Position;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have {expected} cells, got {got}")]
    BadLength { expected: usize, got: usize },

    #[error("invalid cell character {character:?} at index {index}")]
    BadCell { character: char, index: usize },

    #[error("invalid piece counts X={x} O={o} (X moves first, marks alternate)")]
    BadCounts { x: usize, o: usize },

    #[error("illegal move at index {index}")]
    IllegalMove { index: usize },
}
