//! Post-hoc rationale for an engine move, for display next to the board.

use std::fmt;
use crate::board::{Cell, Grid, Mark, CENTER, CORNERS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    Win,
    Block,
    Center,
    Corner,
    Edge,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rationale {
    pub reason: Reason,
    pub cell: usize,
    pub engine: Mark,
}

fn completes_line(before: &Grid, cell: usize, mark: Mark) -> bool {
    if !before.is_empty_at(cell) { return false; }
    let mut after = *before;
    after.set(cell, Cell::Filled(mark));
    after.has_line(mark)
}

/// Classifies `cell` as played by `engine` on `before`. Checked in order: win, block,
/// center, corner, edge.
pub fn explain_move(before: &Grid, cell: usize, engine: Mark, opponent: Mark) -> Rationale {
    let reason = if completes_line(before, cell, engine) {
        Reason::Win
    } else if completes_line(before, cell, opponent) {
        Reason::Block
    } else if cell == CENTER {
        Reason::Center
    } else if CORNERS.contains(&cell) {
        Reason::Corner
    } else {
        Reason::Edge
    };
    Rationale { reason, cell, engine }
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.cell + 1;
        match self.reason {
            Reason::Win => write!(f, "I placed {} at position {pos} to complete three in a row and win.", self.engine),
            Reason::Block => write!(f, "I took position {pos} to block your three in a row."),
            Reason::Center => write!(f, "I took the center (position {pos}); it sits on four winning lines."),
            Reason::Corner => write!(f, "I took the corner at position {pos}; corners sit on three winning lines."),
            Reason::Edge => write!(f, "I placed {} at position {pos} to keep pressure on and set up later lines.", self.engine),
        }
    }
}
