//! Gomoku engine with minimax search
//!
//! Freestyle five-in-a-row on a square board (5x5 up to 19x19, default
//! 15x15) with a computer opponent at four difficulty tiers:
//!
//! | Tier      | Depth | Evaluator |
//! |-----------|-------|-----------|
//! | very-easy | -     | uniform random move |
//! | easy      | 2     | own runs, minus opponent open threes |
//! | medium    | 3     | runs for both sides plus a defensive window |
//! | hard      | 4     | medium plus four-threat penalties and open-formation bonuses |
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Position evaluation heuristics
//! - [`search`]: Alpha-beta minimax, Zobrist hashing, transposition cache
//! - [`engine`]: Difficulty policy and random fallback around the search
//! - [`player`], [`game`], [`tournament`]: Match and tournament drivers
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Difficulty, Pos, SearchEngine, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = SearchEngine::new(Stone::White, Difficulty::Easy);
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.choose_move(&board) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod tournament;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{Difficulty, EngineConfig};
pub use engine::{MoveResult, SearchEngine, SearchType};
pub use error::{ConfigError, MoveError};
pub use eval::{EvalStrategy, Evaluator};
pub use game::{EndReason, GameDriver, GameOutcome};
pub use player::{AiPlayer, HumanPlayer, Player};
pub use rules::WinRule;
pub use search::{CacheEntry, CacheKey, ReplacementPolicy, TranspositionCache};
pub use tournament::{Entrant, Standing, Tournament, TournamentReport};
