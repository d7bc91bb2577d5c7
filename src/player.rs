//! Players: anything that can be asked for a move
//!
//! The match driver only sees the [`Player`] trait. Two implementations:
//! [`AiPlayer`] wraps a [`SearchEngine`], [`HumanPlayer`] reads coordinates
//! from any buffered reader and writes prompts to any writer.

use std::io::{BufRead, Write};

use log::warn;

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::engine::SearchEngine;

/// A participant in a game.
pub trait Player {
    fn name(&self) -> &str;

    fn stone(&self) -> Stone;

    /// Next move on `board`, or `None` to give up the turn (resign, or no
    /// move left on a full board).
    fn request_move(&mut self, board: &Board) -> Option<Pos>;
}

/// Computer player backed by a search engine.
pub struct AiPlayer {
    name: String,
    engine: SearchEngine,
}

impl AiPlayer {
    pub fn new(name: impl Into<String>, engine: SearchEngine) -> Self {
        Self {
            name: name.into(),
            engine,
        }
    }

    /// Named after its difficulty, e.g. `"medium"`.
    pub fn with_difficulty(stone: Stone, difficulty: Difficulty) -> Self {
        Self::new(difficulty.name(), SearchEngine::new(stone, difficulty))
    }

    pub fn with_config(name: impl Into<String>, stone: Stone, config: EngineConfig) -> Self {
        Self::new(name, SearchEngine::with_config(stone, config))
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.engine.color()
    }

    fn request_move(&mut self, board: &Board) -> Option<Pos> {
        self.engine.choose_move(board)
    }
}

/// Line-oriented human player.
///
/// Accepts `row col` with 1-based coordinates (comma separators allowed).
/// Bad input is reported and the prompt repeats. End of input or `q`
/// gives up the turn.
pub struct HumanPlayer<R, W> {
    name: String,
    stone: Stone,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, stone: Stone, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            stone,
            input,
            output,
        }
    }

    /// Consume the player and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, board: &Board) -> std::io::Result<Option<Pos>> {
        let size = board.size();
        write_board(&mut self.output, board)?;
        loop {
            write!(
                self.output,
                "{} ({}) enter row and column (1-{size}), or q to quit: ",
                self.name, self.stone
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match parse_coords(line, size) {
                Some(pos) if board.is_empty(pos) => return Ok(Some(pos)),
                Some(pos) => {
                    let (row, col) = (pos.row + 1, pos.col + 1);
                    writeln!(self.output, "Cell {row} {col} is taken.")?
                }
                None => writeln!(self.output, "Invalid input '{line}'.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn stone(&self) -> Stone {
        self.stone
    }

    fn request_move(&mut self, board: &Board) -> Option<Pos> {
        match self.prompt(board) {
            Ok(mv) => mv,
            Err(e) => {
                warn!("input error for {}: {e}", self.name);
                None
            }
        }
    }
}

/// Board with 1-based row and column labels, matching the input format
fn write_board<W: Write>(out: &mut W, board: &Board) -> std::io::Result<()> {
    let size = board.size();
    write!(out, "\n   ")?;
    for c in 1..=size {
        write!(out, "{c:3}")?;
    }
    writeln!(out)?;
    for r in 0..size {
        write!(out, "{:3}", r + 1)?;
        for c in 0..size {
            let ch = board
                .get(Pos::new(r as u8, c as u8))
                .map_or('.', Stone::symbol);
            write!(out, "  {ch}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Parse `"row col"` (1-based) into a 0-based position on a `size` board.
fn parse_coords(line: &str, size: usize) -> Option<Pos> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if !(1..=size).contains(&row) || !(1..=size).contains(&col) {
        return None;
    }
    Some(Pos::new((row - 1) as u8, (col - 1) as u8))
}
