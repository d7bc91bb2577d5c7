//! Error types for configuration and move placement

use thiserror::Error;

use crate::board::{Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Invalid engine or board configuration, reported at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Difficulty name not one of very-easy, easy, medium, hard
    #[error("unknown difficulty '{0}' (expected one of: very-easy, easy, medium, hard)")]
    UnknownDifficulty(String),

    #[error("board size {0} out of range ({MIN_BOARD_SIZE}..={MAX_BOARD_SIZE})")]
    InvalidBoardSize(usize),

    /// Search depth must be at least one ply
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u8),

    /// Text board with ragged rows or unknown glyphs
    #[error("malformed board text: {0}")]
    MalformedBoard(String),
}

/// Rejected stone placement. `Board::place_stone` folds this into `false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {pos} is outside the {size}x{size} board")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),
}
