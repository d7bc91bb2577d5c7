//! Board structure: grid state, move validation, candidate generation

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{ConfigError, MoveError};
use crate::rules::{self, WinRule};

/// Neighborhood radius for candidate moves (8-neighbors)
const CANDIDATE_RADIUS: i32 = 1;

/// Square Gomoku board.
///
/// Cells only go Empty -> colored through `place_stone`. The search engine
/// restores cells on its private working copy (make/unmake); callers outside
/// the crate get value copies via `clone`/`simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
    size: u8,
}

impl Board {
    /// Empty 15x15 board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            size: DEFAULT_BOARD_SIZE as u8,
        }
    }

    /// Empty board of side `size`
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ConfigError::InvalidBoardSize(size));
        }
        Ok(Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            size: size as u8,
        })
    }

    /// Parse a board from rows of `.`, `X` (black) and `O` (white).
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let mut board = Self::with_size(rows.len())?;
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != rows.len() {
                return Err(ConfigError::MalformedBoard(format!(
                    "row {r} has {} cells, expected {}",
                    cells.len(),
                    rows.len()
                )));
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    '.' => {}
                    'X' | 'x' => board.set(pos, Stone::Black),
                    'O' | 'o' => board.set(pos, Stone::White),
                    other => {
                        return Err(ConfigError::MalformedBoard(format!(
                            "unknown glyph '{other}' at {pos}"
                        )))
                    }
                }
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Total number of cells (size * size)
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    /// Check signed coordinates against the board bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.size() as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size() && (pos.col as usize) < self.size()
    }

    /// Get stone at position (`None` for empty or off-board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if !self.contains(pos) {
            return None;
        }
        let idx = pos.to_index(self.size());
        if self.black.get(idx) {
            Some(Stone::Black)
        } else if self.white.get(idx) {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// True iff `pos` is on the board and holds no stone
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.is_empty_index(pos.to_index(self.size()))
    }

    /// A move is legal iff it is in bounds and the cell is empty
    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        self.is_empty(pos)
    }

    #[inline]
    fn is_empty_index(&self, idx: usize) -> bool {
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone, reporting why the placement was rejected.
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds {
                pos,
                size: self.size(),
            });
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.set(pos, stone);
        Ok(())
    }

    /// Place a stone. Returns false (board unchanged) when the cell is
    /// off-board or occupied.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> bool {
        self.try_place(pos, stone).is_ok()
    }

    #[inline]
    fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size());
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
        }
    }

    /// Remove a stone (unmake during search)
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size());
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Get bitboard for a color
    #[inline]
    pub fn stones(&self, stone: Stone) -> &Bitboard {
        match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
        }
    }

    /// Positions of every stone of one color, row-major
    pub fn stone_positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size();
        self.stones(stone)
            .iter_ones()
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Does the stone at `pos` complete five (or more) in a row for `stone`?
    /// `pos` should be the most recently placed stone.
    #[inline]
    pub fn check_win(&self, pos: Pos, stone: Stone) -> bool {
        rules::is_win_at(self, pos, stone, WinRule::FiveOrMore)
    }

    /// `check_win` under an explicit win rule
    #[inline]
    pub fn check_win_with(&self, pos: Pos, stone: Stone, rule: WinRule) -> bool {
        rules::is_win_at(self, pos, stone, rule)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        (self.black.count() + self.white.count()) as usize
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == self.cell_count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Every empty cell, row-major
    pub fn empty_cells(&self) -> Vec<Pos> {
        let size = self.size();
        (0..self.cell_count())
            .filter(|&idx| self.is_empty_index(idx))
            .map(|idx| Pos::from_index(idx, size))
            .collect()
    }

    /// Empty cells adjacent (8-neighborhood) to at least one stone.
    ///
    /// Deduplicated and sorted by (row, col). Empty on an empty board.
    pub fn candidate_moves(&self) -> Vec<Pos> {
        let size = self.size();
        let mut near = vec![false; self.cell_count()];

        for idx in self.black.iter_ones().chain(self.white.iter_ones()) {
            let pos = Pos::from_index(idx, size);
            for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                    let (r, c) = (i32::from(pos.row) + dr, i32::from(pos.col) + dc);
                    if self.in_bounds(r, c) {
                        near[r as usize * size + c as usize] = true;
                    }
                }
            }
        }

        near.iter()
            .enumerate()
            .filter(|&(idx, &is_near)| is_near && self.is_empty_index(idx))
            .map(|(idx, _)| Pos::from_index(idx, size))
            .collect()
    }

    /// Copy of this board with `stone` placed at `pos`; `self` is untouched.
    pub fn simulate(&self, pos: Pos, stone: Stone) -> Board {
        debug_assert!(self.is_legal(pos), "simulate on illegal move {pos}");
        let mut next = self.clone();
        next.place_stone(pos, stone);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(f, "   ")?;
        for c in 0..size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..size {
            write!(f, "{:2} ", r)?;
            for c in 0..size {
                let ch = self
                    .get(Pos::new(r as u8, c as u8))
                    .map_or('.', Stone::symbol);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
