//! Move-choosing engine for one color
//!
//! Wraps a [`Searcher`] with the difficulty policy:
//!
//! 1. **Very easy**: skip search, pick a uniformly random empty cell
//! 2. **Other tiers**: alpha-beta over the candidate moves
//! 3. **Fallback**: when search yields no move (empty board), pick a
//!    random empty cell; `None` only when the board is full
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Difficulty, Pos, SearchEngine, Stone};
//!
//! let mut engine = SearchEngine::new(Stone::White, Difficulty::Easy);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.choose_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::error::ConfigError;
use crate::eval::Evaluator;
use crate::search::{CacheStats, SearchResult, Searcher, TranspositionCache};

/// How the returned move was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Very-easy tier: uniform random empty cell
    Random,
    /// Alpha-beta search result
    AlphaBeta,
    /// Search had no candidate; random empty cell
    Fallback,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score of the move (0 for random choices)
    pub score: i32,
    pub search_type: SearchType,
    /// Plies searched (0 when no search ran)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn random(best_move: Option<Pos>, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move,
            score: 0,
            search_type,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            nodes: result.stats.nodes,
            time_ms,
        }
    }
}

/// AI opponent for one color at a fixed difficulty.
///
/// The transposition cache lives as long as the engine and is reused across
/// `choose_move` calls; create a new engine per game.
pub struct SearchEngine {
    color: Stone,
    config: EngineConfig,
    searcher: Searcher,
    rng: StdRng,
}

impl SearchEngine {
    /// Engine with default settings for `difficulty`.
    #[must_use]
    pub fn new(color: Stone, difficulty: Difficulty) -> Self {
        Self::with_config(color, EngineConfig::new(difficulty))
    }

    #[must_use]
    pub fn with_config(color: Stone, config: EngineConfig) -> Self {
        let evaluator = Evaluator::new(color, config.difficulty.strategy());
        let cache = TranspositionCache::new(config.cache_mb).with_policy(config.replacement);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            color,
            searcher: Searcher::new(evaluator, cache),
            config,
            rng,
        }
    }

    /// Engine from a difficulty name such as `"medium"` or `"very-easy"`.
    pub fn from_name(color: Stone, difficulty: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(color, difficulty.parse()?))
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Search depth in plies
    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache_stats()
    }

    /// Choose a move for this engine's color. `None` means the board is full.
    #[must_use]
    pub fn choose_move(&mut self, board: &Board) -> Option<Pos> {
        self.choose_move_with_stats(board).best_move
    }

    /// Choose a move and report how it was found.
    pub fn choose_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        let result = if self.config.difficulty == Difficulty::VeryEasy {
            let mv = self.random_empty(board);
            MoveResult::random(mv, SearchType::Random, elapsed_ms(start))
        } else {
            let searched = self.searcher.search(board, self.config.depth);
            if searched.best_move.is_some() {
                MoveResult::from_alphabeta(searched, elapsed_ms(start))
            } else {
                let mv = self.random_empty(board);
                trace!(
                    "{} found no candidate on {} stones, random fallback {:?}",
                    self.color,
                    board.stone_count(),
                    mv
                );
                MoveResult {
                    nodes: searched.stats.nodes,
                    ..MoveResult::random(mv, SearchType::Fallback, elapsed_ms(start))
                }
            }
        };

        debug!(
            "{} ({}) plays {:?}: score={} nodes={} time={}ms via {:?}",
            self.color,
            self.config.difficulty,
            result.best_move,
            result.score,
            result.nodes,
            result.time_ms,
            result.search_type
        );
        result
    }

    fn random_empty(&mut self, board: &Board) -> Option<Pos> {
        board.empty_cells().choose(&mut self.rng).copied()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
