use crate::board::{Cell, Grid, Mark, CENTER, CORNERS, LINES};

// Terminal scoring helpers. Wins are `WIN_SCORE - depth`, losses `depth - WIN_SCORE`.
pub const WIN_SCORE: i32 = 100;
pub const DRAW_SCORE: i32 = 0;
// Window bound for alpha-beta; strictly outside every reachable score.
pub const INF: i32 = 1_000;

/// Positional weights for the horizon evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    pub center: i32,
    pub corner: i32,
    /// Two own marks and one empty cell in a line.
    pub two_in_line: i32,
    /// One own mark and two empty cells in a line.
    pub one_in_line: i32,
}

impl Default for EvalWeights {
    fn default() -> Self { Self { center: 3, corner: 2, two_in_line: 5, one_in_line: 2 } }
}

impl EvalWeights {
    /// Largest magnitude `heuristic` can return with these weights.
    pub fn bound(&self) -> i32 {
        self.center.abs() + 4 * self.corner.abs() + 8 * self.two_in_line.abs().max(self.one_in_line.abs())
    }
}

fn sign_of(cell: Cell, me: Mark, opp: Mark) -> i32 {
    match cell {
        Cell::Filled(m) if m == me => 1,
        Cell::Filled(m) if m == opp => -1,
        _ => 0,
    }
}

// Per-line score from `me`'s perspective. Mixed lines are dead.
pub fn score_line(line: [Cell; 3], me: Mark, opp: Mark, w: &EvalWeights) -> i32 {
    let mine = line.iter().filter(|&&c| c == Cell::Filled(me)).count();
    let theirs = line.iter().filter(|&&c| c == Cell::Filled(opp)).count();
    let empty = line.iter().filter(|c| c.is_empty()).count();
    if mine > 0 && theirs > 0 { return 0; }
    match (mine, theirs, empty) {
        (2, 0, 1) => w.two_in_line,
        (1, 0, 2) => w.one_in_line,
        (0, 2, 1) => -w.two_in_line,
        (0, 1, 2) => -w.one_in_line,
        _ => 0,
    }
}

/// Static evaluation of a non-terminal grid from `me`'s perspective.
pub fn heuristic(grid: &Grid, me: Mark, opp: Mark, w: &EvalWeights) -> i32 {
    let cells = grid.cells();
    let mut score = w.center * sign_of(cells[CENTER], me, opp);
    for &c in CORNERS.iter() { score += w.corner * sign_of(cells[c], me, opp); }
    for l in LINES.iter() { score += score_line(grid.line(l), me, opp, w); }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> [Cell; 3] {
        let g = Grid::parse(&format!("{s}      ")).unwrap();
        [g.cells()[0], g.cells()[1], g.cells()[2]]
    }

    #[test]
    fn line_compositions() {
        let w = EvalWeights::default();
        let (me, opp) = (Mark::O, Mark::X);
        assert_eq!(score_line(cells("OO "), me, opp, &w), 5);
        assert_eq!(score_line(cells(" O "), me, opp, &w), 2);
        assert_eq!(score_line(cells("X X"), me, opp, &w), -5);
        assert_eq!(score_line(cells("  X"), me, opp, &w), -2);
        assert_eq!(score_line(cells("OX "), me, opp, &w), 0);
        assert_eq!(score_line(cells("OOX"), me, opp, &w), 0);
        assert_eq!(score_line(cells("OOO"), me, opp, &w), 0);
        assert_eq!(score_line(cells("   "), me, opp, &w), 0);
    }

    #[test]
    fn default_bound_is_fifty_one() {
        assert_eq!(EvalWeights::default().bound(), 51);
    }
}
