//! Search module for Gomoku AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition cache for memoizing search results
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use tt::{Bound, CacheEntry, CacheKey, CacheStats, ReplacementPolicy, TranspositionCache};
pub use zobrist::ZobristTable;
