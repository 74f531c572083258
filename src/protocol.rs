use std::io::{self, BufRead, Write};
use log::warn;
use crate::board::{Position, CELLS};
use crate::search::{Difficulty, SearchParams, Searcher};

/// Line-oriented engine driver for external front-ends. Cells are 1-based on the wire.
pub struct Engine {
    pos: Position,
    depth: u32,
}

impl Default for Engine {
    fn default() -> Self { Self::new() }
}

impl Engine {
    pub fn new() -> Self { Self { pos: Position::startpos(), depth: Difficulty::Hard.depth() } }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_position(&mut self, args: &str) -> Result<(), String> {
        // 'position startpos [moves 1 5 9]' or 'position cells XO.......'
        let mut tokens = args.split_whitespace();
        match tokens.next() {
            Some("startpos") => {
                let mut moves = Vec::new();
                if let Some(tok) = tokens.next() {
                    if tok != "moves" { return Err(format!("expected 'moves', got '{tok}'")); }
                    for t in tokens {
                        let n: usize = t.parse().map_err(|_| format!("bad cell '{t}'"))?;
                        if !(1..=CELLS).contains(&n) { return Err(format!("cell out of range: {n}")); }
                        moves.push(n - 1);
                    }
                }
                self.pos = Position::from_moves(&moves).map_err(|e| e.to_string())?;
            }
            Some("cells") => {
                // Empty cells may be spaces, so take the raw remainder
                let raw = args.trim_start().strip_prefix("cells").unwrap_or("");
                let raw = raw.strip_prefix(' ').unwrap_or(raw);
                self.pos = Position::from_cells(raw).map_err(|e| e.to_string())?;
            }
            other => return Err(format!("unknown position form: {}", other.unwrap_or(""))),
        }
        Ok(())
    }

    fn cmd_depth(&mut self, args: &str) -> Result<(), String> {
        let d: u32 = args.trim().parse().map_err(|_| format!("bad depth '{}'", args.trim()))?;
        SearchParams::new(self.pos.side_to_move(), d).map_err(|e| e.to_string())?;
        self.depth = d;
        Ok(())
    }

    fn cmd_go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let engine = self.pos.side_to_move();
        let res = SearchParams::new(engine, self.depth)
            .and_then(Searcher::new)
            .and_then(|mut s| s.select_move(&mut self.pos));
        match res {
            Ok(r) => writeln!(out, "bestmove {} score {} nodes {}", r.cell + 1, r.score, r.nodes),
            Err(_) => writeln!(out, "bestmove none"),
        }
    }

    /// Handles one command line. Returns false on `quit`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        let cmd = line.trim();
        if cmd.is_empty() { return Ok(true); }
        let result = match cmd {
            "isready" => { writeln!(out, "readyok")?; Ok(()) }
            "newgame" => { self.pos.reset(); Ok(()) }
            "show" => { write!(out, "{}", self.pos)?; Ok(()) }
            "go" => { self.cmd_go(out)?; Ok(()) }
            "quit" => return Ok(false),
            _ => {
                if let Some(rest) = line.trim_start().strip_prefix("position ") { self.cmd_position(rest) }
                else if let Some(rest) = cmd.strip_prefix("depth ") { self.cmd_depth(rest) }
                else if let Some(rest) = cmd.strip_prefix("difficulty ") {
                    rest.trim().parse::<Difficulty>().map(|d| self.depth = d.depth())
                } else {
                    warn!("unknown command: {cmd}");
                    Err(format!("unknown command: {cmd}"))
                }
            }
        };
        if let Err(msg) = result { writeln!(out, "error {msg}")?; }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = match line { Ok(s) => s, Err(_) => break };
            if !self.handle(&line, out)? { break; }
        }
        Ok(())
    }
}
