#![allow(dead_code)]
use noughts::board::{Mark, Position};
use std::collections::HashSet;

// Every position reachable from the empty board by legal play, terminal ones included.
pub fn reachable_positions() -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut stack = vec![Position::startpos()];
    while let Some(pos) = stack.pop() {
        if !seen.insert(pos.grid().to_compact()) { continue; }
        if !pos.is_terminal() {
            for m in pos.legal_moves() {
                let mut child = pos.clone();
                assert!(child.place(m));
                stack.push(child);
            }
        }
        out.push(pos);
    }
    out
}

// Cells where `mark` would complete a line right now.
pub fn winning_cells(pos: &Position, mark: Mark) -> Vec<usize> {
    pos.legal_moves().into_iter().filter(|&m| {
        let mut g = pos.clone();
        g.put(m, mark);
        g.grid().has_line(mark)
    }).collect()
}
