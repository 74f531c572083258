use std::fmt;
use serde::{Deserialize, Serialize};
use crate::board::BoardError;

pub const CELLS: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

// Rows, columns, diagonals
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self { Mark::X => Mark::O, Mark::O => Mark::X }
    }

    pub fn symbol(self) -> char {
        match self { Mark::X => 'X', Mark::O => 'O' }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.symbol()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool { self == Cell::Empty }

    pub fn symbol(self) -> char {
        match self { Cell::Empty => ' ', Cell::Filled(m) => m.symbol() }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' | '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Filled(Mark::X)),
            'O' | 'o' => Some(Cell::Filled(Mark::O)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Tie,
    InProgress,
}

/// Nine cells in row-major order:
///
/// ```text
///  0 | 1 | 2
///  3 | 4 | 5
///  6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; CELLS],
}

impl Grid {
    pub fn new() -> Self { Self::default() }

    /// Parses nine characters: `X`, `O`, and any of ` ._-` for an empty cell.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELLS {
            return Err(BoardError::BadLength { expected: CELLS, got: chars.len() });
        }
        let mut grid = Grid::new();
        for (i, &c) in chars.iter().enumerate() {
            grid.cells[i] = Cell::from_char(c).ok_or(BoardError::BadCell { character: c, index: i })?;
        }
        Ok(grid)
    }

    pub fn get(&self, index: usize) -> Option<Cell> { self.cells.get(index).copied() }

    pub fn cells(&self) -> &[Cell; CELLS] { &self.cells }

    pub fn is_empty_at(&self, index: usize) -> bool { matches!(self.get(index), Some(Cell::Empty)) }

    // Caller guarantees index < CELLS
    pub(crate) fn set(&mut self, index: usize, cell: Cell) { self.cells[index] = cell; }

    pub fn legal_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_empty()).collect()
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|c| !c.is_empty()) }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Filled(mark)).count()
    }

    pub fn line(&self, line: &[usize; 3]) -> [Cell; 3] {
        [self.cells[line[0]], self.cells[line[1]], self.cells[line[2]]]
    }

    /// True if `mark` holds all three cells of some line.
    pub fn has_line(&self, mark: Mark) -> bool {
        LINES.iter().any(|l| self.line(l).iter().all(|&c| c == Cell::Filled(mark)))
    }

    pub fn winner(&self) -> Outcome {
        for l in LINES.iter() {
            if let [Cell::Filled(a), b, c] = self.line(l) {
                if b == Cell::Filled(a) && c == Cell::Filled(a) { return Outcome::Win(a); }
            }
        }
        if self.is_full() { Outcome::Tie } else { Outcome::InProgress }
    }

    /// Compact nine-character form accepted by [`Grid::parse`], with `.` for empty.
    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| if c.is_empty() { '.' } else { c.symbol() }).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let c = |col: usize| self.cells[row * 3 + col].symbol();
            writeln!(f, " {} | {} | {} ", c(0), c(1), c(2))?;
            if row < 2 { writeln!(f, "---+---+---")?; }
        }
        Ok(())
    }
}
