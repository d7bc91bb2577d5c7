//! Minimax search with alpha-beta pruning and a transposition cache
//!
//! The searcher keeps one working copy of the board per call and plays
//! candidate moves on it with make/unmake, carrying the Zobrist hash down
//! the tree. Scores are always from the searcher's own color: the maximizing
//! side is `color`, the minimizing side its opponent.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::eval::{EvalStrategy, Evaluator};
//! use gomoku::search::{Searcher, TranspositionCache};
//!
//! let evaluator = Evaluator::new(Stone::White, EvalStrategy::Medium);
//! let mut searcher = Searcher::new(evaluator, TranspositionCache::new(1));
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = searcher.search(&board, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::{Evaluator, PatternScore};

use super::{Bound, CacheEntry, CacheKey, CacheStats, TranspositionCache, ZobristTable};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Search counters for one `search` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Interior and leaf nodes visited (root excluded)
    pub nodes: u64,
    /// Cache lookups whose score was reused
    pub cache_hits: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Best root move and its minimax score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the board offers no candidate
    pub best_move: Option<Pos>,
    pub score: i32,
    pub depth: u8,
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher for one color.
pub struct Searcher {
    color: Stone,
    opponent: Stone,
    evaluator: Evaluator,
    zobrist: ZobristTable,
    tt: TranspositionCache,
    stats: SearchStats,
}

impl Searcher {
    /// The searcher plays the evaluator's color.
    #[must_use]
    pub fn new(evaluator: Evaluator, tt: TranspositionCache) -> Self {
        Self {
            color: evaluator.color(),
            opponent: evaluator.opponent(),
            evaluator,
            zobrist: ZobristTable::new(),
            tt,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Counters from the most recent search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn clear_cache(&mut self) {
        self.tt.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.tt.stats()
    }

    /// Search `depth` plies (at least one) and return the best root move.
    ///
    /// Root moves are tried in candidate order; a later move replaces the
    /// current best only with a strictly higher score.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        let depth = depth.max(1);
        self.stats = SearchStats::default();

        let mut work = board.clone();
        let hash = self.zobrist.hash(&work);

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mv in work.candidate_moves() {
            work.place_stone(mv, self.color);
            let child_hash = self.zobrist.update(hash, mv, self.color);
            let score = self.minimax(&mut work, depth - 1, false, alpha, INF, mv, child_hash);
            work.remove_stone(mv);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            stats: self.stats,
        }
    }

    /// Recursive minimax with alpha-beta (fail-soft).
    ///
    /// `last` is the move that produced this node, played by the side that
    /// is *not* to move here.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        last: Pos,
        hash: u64,
    ) -> i32 {
        self.stats.nodes += 1;

        // Terminal: the previous move completed five
        let last_mover = if maximizing {
            self.opponent
        } else {
            self.color
        };
        if board.check_win(last, last_mover) {
            let score = PatternScore::WIN + i32::from(depth);
            return if last_mover == self.color {
                score
            } else {
                -score
            };
        }

        let key = CacheKey::new(hash, depth, maximizing);
        if let Some(entry) = self.tt.lookup(&key) {
            if entry.usable(alpha, beta) {
                self.stats.cache_hits += 1;
                return entry.score;
            }
        }

        let moves = if depth == 0 || board.is_full() {
            Vec::new()
        } else {
            board.candidate_moves()
        };
        if moves.is_empty() {
            let score = self.evaluator.score(board);
            self.tt.save(key, CacheEntry::exact(score, None));
            return score;
        }

        let (alpha0, beta0) = (alpha, beta);
        let mover = if maximizing {
            self.color
        } else {
            self.opponent
        };
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in moves {
            board.place_stone(mv, mover);
            let child_hash = self.zobrist.update(hash, mv, mover);
            let score = self.minimax(board, depth - 1, !maximizing, alpha, beta, mv, child_hash);
            board.remove_stone(mv);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let bound = if best <= alpha0 {
            Bound::Upper
        } else if best >= beta0 {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.save(
            key,
            CacheEntry {
                score: best,
                best_move,
                bound,
            },
        );

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalStrategy;

    fn searcher(color: Stone, strategy: EvalStrategy) -> Searcher {
        Searcher::new(
            Evaluator::new(color, strategy),
            TranspositionCache::with_slots(1 << 16),
        )
    }

    /// Plain minimax: no pruning, no cache.
    fn exhaustive(
        board: &mut Board,
        eval: &Evaluator,
        depth: u8,
        maximizing: bool,
        last: Pos,
    ) -> i32 {
        let color = eval.color();
        let last_mover = if maximizing { color.opponent() } else { color };
        if board.check_win(last, last_mover) {
            let score = PatternScore::WIN + i32::from(depth);
            return if last_mover == color { score } else { -score };
        }
        let moves = if depth == 0 || board.is_full() {
            Vec::new()
        } else {
            board.candidate_moves()
        };
        if moves.is_empty() {
            return eval.score(board);
        }
        let mover = if maximizing { color } else { color.opponent() };
        let scores = moves.into_iter().map(|mv| {
            board.place_stone(mv, mover);
            let s = exhaustive(board, eval, depth - 1, !maximizing, mv);
            board.remove_stone(mv);
            s
        });
        if maximizing {
            scores.max().unwrap()
        } else {
            scores.min().unwrap()
        }
    }

    fn exhaustive_root(board: &Board, eval: &Evaluator, depth: u8) -> (Option<Pos>, i32) {
        let mut work = board.clone();
        let mut best = (None, -INF);
        for mv in work.candidate_moves() {
            work.place_stone(mv, eval.color());
            let s = exhaustive(&mut work, eval, depth - 1, false, mv);
            work.remove_stone(mv);
            if s > best.1 {
                best = (Some(mv), s);
            }
        }
        best
    }

    #[test]
    fn test_search_empty_board_has_no_candidate() {
        let mut s = searcher(Stone::Black, EvalStrategy::Medium);
        let result = s.search(&Board::new(), 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut s = searcher(Stone::Black, EvalStrategy::Easy);
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        board.place_stone(Pos::new(8, 0), Stone::White);
        board.place_stone(Pos::new(8, 1), Stone::White);

        let result = s.search(&board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
        assert_eq!(result.score, PatternScore::WIN + 1);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut s = searcher(Stone::Black, EvalStrategy::Medium);
        let mut board = Board::new();
        for c in 0..4 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(10, 10), Stone::Black);
        board.place_stone(Pos::new(11, 12), Stone::Black);

        let result = s.search(&board, 2);
        assert_eq!(result.best_move, Some(Pos::new(7, 4)));
        assert!(result.score > -PatternScore::WIN);
    }

    #[test]
    fn test_search_losing_score() {
        // White has two open ends on a four; Black cannot cover both
        let mut s = searcher(Stone::Black, EvalStrategy::Medium);
        let mut board = Board::new();
        for c in 4..8 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        board.place_stone(Pos::new(0, 0), Stone::Black);

        let result = s.search(&board, 2);
        assert_eq!(result.score, -PatternScore::WIN);
    }

    #[test]
    fn test_pruned_matches_exhaustive() {
        let boards = [
            ["X . . . .", ". O . . .", ". . . . .", ". . . . .", ". . . . ."],
            [". . . . .", ". X O . .", ". . X . .", ". . . . .", ". . . . ."],
            ["X X X . O", ". . . . O", ". . . . O", ". . . . .", ". . . . ."],
            ["X O X O X", "O X O X O", ". . . . .", ". . . . .", ". . . . ."],
        ];
        for rows in &boards {
            let board = Board::from_rows(rows).unwrap();
            for strategy in [EvalStrategy::Easy, EvalStrategy::Medium, EvalStrategy::Hard] {
                for color in [Stone::Black, Stone::White] {
                    for depth in 1..=3 {
                        let mut s = searcher(color, strategy);
                        let pruned = s.search(&board, depth);
                        let eval = Evaluator::new(color, strategy);
                        let (mv, score) = exhaustive_root(&board, &eval, depth);
                        assert_eq!(
                            (pruned.best_move, pruned.score),
                            (mv, score),
                            "{strategy:?} {color} depth {depth}\n{board}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);
        board.place_stone(Pos::new(8, 8), Stone::Black);

        let first = searcher(Stone::White, EvalStrategy::Hard).search(&board, 2);
        let second = searcher(Stone::White, EvalStrategy::Hard).search(&board, 2);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_cache_reused_across_searches() {
        let mut s = searcher(Stone::White, EvalStrategy::Medium);
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let first = s.search(&board, 2);
        assert!(first.stats.nodes > 0);
        assert!(s.cache_stats().used > 0);

        let second = s.search(&board, 2);
        assert!(second.stats.cache_hits > 0);
        assert!(second.stats.nodes < first.stats.nodes);
        assert_eq!(first.best_move, second.best_move);

        s.clear_cache();
        assert_eq!(s.cache_stats().used, 0);
    }

    #[test]
    fn test_search_prunes() {
        let mut s = searcher(Stone::Black, EvalStrategy::Medium);
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::White);

        let result = s.search(&board, 3);
        assert!(result.stats.cutoffs > 0);
        assert_eq!(result.depth, 3);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut s = searcher(Stone::Black, EvalStrategy::Hard);
        let board = Board::from_rows(&[
            ". . . . . .",
            ". X O . . .",
            ". . X . . .",
            ". . O . . .",
            ". . . . . .",
            ". . . . . .",
        ])
        .unwrap();
        let before = board.clone();
        let result = s.search(&board, 3);
        assert_eq!(board, before);
        assert!(result.best_move.is_some_and(|p| board.is_legal(p)));
    }
}
