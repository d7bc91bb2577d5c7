//! Zobrist hashing for position identification
//!
//! Placing or removing a stone is a single XOR, so the search carries the
//! hash down the tree instead of recomputing it at every node.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::search::ZobristTable;
//!
//! let zt = ZobristTable::new();
//! let mut board = Board::new();
//! let hash1 = zt.hash(&board);
//!
//! let pos = Pos::new(7, 7);
//! board.place_stone(pos, Stone::Black);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.update(hash1, pos, Stone::Black), zt.hash(&board));
//! ```

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE, MAX_CELLS};

/// Zobrist key table.
///
/// Keys are laid out on a 19x19 grid regardless of the board size, and the
/// board size is mixed into the full hash so equal stone sets on different
/// boards do not collide.
pub struct ZobristTable {
    /// Keys for each stone color at each cell: [color][row * 19 + col]
    stones: [[u64; MAX_CELLS]; 2],
    /// Key per board side length
    sizes: [u64; MAX_BOARD_SIZE + 1],
}

impl ZobristTable {
    /// Create a table with deterministic pseudo-random keys.
    ///
    /// Uses a fixed-seed LCG so hashes are reproducible across runs.
    #[must_use]
    pub fn new() -> Self {
        // Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Fold high bits down; low LCG bits have short periods
            seed ^ (seed >> 29)
        };

        let mut stones = [[0u64; MAX_CELLS]; 2];
        let [black, white] = &mut stones;
        for (b, w) in black.iter_mut().zip(white.iter_mut()) {
            *b = next_rand();
            *w = next_rand();
        }

        let mut sizes = [0u64; MAX_BOARD_SIZE + 1];
        for key in sizes.iter_mut() {
            *key = next_rand();
        }

        Self { stones, sizes }
    }

    #[inline]
    fn key(&self, pos: Pos, stone: Stone) -> u64 {
        let idx = pos.row as usize * MAX_BOARD_SIZE + pos.col as usize;
        self.stones[stone.index()][idx]
    }

    /// Full hash of a board.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = self.sizes[board.size()];
        for stone in [Stone::Black, Stone::White] {
            for pos in board.stone_positions(stone) {
                h ^= self.key(pos, stone);
            }
        }
        h
    }

    /// Hash after placing or removing `stone` at `pos`.
    ///
    /// XOR is its own inverse, so the same call undoes a placement.
    #[inline]
    #[must_use]
    pub fn update(&self, hash: u64, pos: Pos, stone: Stone) -> u64 {
        hash ^ self.key(pos, stone)
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
