use std::fmt;
use crate::board::grid::{Cell, Grid, Mark, Outcome, CELLS};
use crate::board::BoardError;

/// Live game state: the grid plus whose turn it is. X always moves first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    grid: Grid,
    side_to_move: Mark,
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl Position {
    pub fn startpos() -> Self {
        Self { grid: Grid::new(), side_to_move: Mark::X }
    }

    /// Builds a position from nine cell characters. Piece counts must follow strict
    /// alternation; the side to move is derived from them.
    pub fn from_cells(cells: &str) -> Result<Self, BoardError> {
        let grid = Grid::parse(cells)?;
        Self::from_grid(grid)
    }

    pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
        let (x, o) = (grid.count(Mark::X), grid.count(Mark::O));
        let side_to_move = match x.checked_sub(o) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => return Err(BoardError::BadCounts { x, o }),
        };
        Ok(Self { grid, side_to_move })
    }

    /// Replays 0-based cell indices from the empty board.
    pub fn from_moves(moves: &[usize]) -> Result<Self, BoardError> {
        let mut pos = Self::startpos();
        for &m in moves {
            if pos.is_terminal() || !pos.place(m) { return Err(BoardError::IllegalMove { index: m }); }
        }
        Ok(pos)
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn side_to_move(&self) -> Mark { self.side_to_move }

    pub fn reset(&mut self) { *self = Self::startpos(); }

    pub fn legal_moves(&self) -> Vec<usize> { self.grid.legal_moves() }

    /// Writes the side to move's mark and flips the turn. Returns false, leaving the
    /// position untouched, if `index` is out of range or occupied.
    pub fn place(&mut self, index: usize) -> bool {
        if !self.grid.is_empty_at(index) { return false; }
        self.grid.set(index, Cell::Filled(self.side_to_move));
        self.side_to_move = self.side_to_move.opponent();
        true
    }

    /// Exploratory write used by search. Does not touch the side to move.
    pub fn put(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.grid.is_empty_at(index), "put on occupied cell {index}");
        self.grid.set(index, Cell::Filled(mark));
    }

    /// Clears a cell without flipping the side to move.
    pub fn undo_place(&mut self, index: usize) {
        if index < CELLS { self.grid.set(index, Cell::Empty); }
    }

    pub fn winner(&self) -> Outcome { self.grid.winner() }

    pub fn is_terminal(&self) -> bool { self.winner() != Outcome::InProgress }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.grid) }
}
