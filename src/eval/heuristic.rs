//! Heuristic evaluation function for Gomoku board positions
//!
//! Every strategy is built on one primitive, the forward run score: for a
//! stone and each of the four axes, count the contiguous same-color stones
//! ahead of it (up to four steps) and add `10^run`. The same primitive is
//! applied to both colors, so swapping colors on the board and in the
//! evaluator gives the same score.
//!
//! - **Easy**: own run scores, minus run scores of opponent stones whose
//!   run reaches three with an open end.
//! - **Medium**: own run scores minus all opponent run scores, plus a
//!   defensive penalty for opponent stones with room to grow.
//! - **Hard**: Medium, plus a penalty per opponent open four and a bonus
//!   for own runs open at both ends.

use crate::board::{Board, Pos, Stone};
use crate::rules::{count_direction, DIRECTIONS};

use super::patterns::{run_value, PatternScore};

/// Evaluation heuristic, selected by difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalStrategy {
    Easy,
    Medium,
    Hard,
}

/// Scores boards from the point of view of one color.
#[derive(Debug, Clone)]
pub struct Evaluator {
    color: Stone,
    opponent: Stone,
    strategy: EvalStrategy,
}

/// A maximal run of one color along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First stone of the run (the end with no same-color stone behind it)
    pub start: Pos,
    pub dir: (i32, i32),
    pub len: usize,
    /// Number of empty cells bounding the run (0..=2)
    pub open_ends: u8,
}

impl Evaluator {
    #[must_use]
    pub fn new(color: Stone, strategy: EvalStrategy) -> Self {
        Self {
            color,
            opponent: color.opponent(),
            strategy,
        }
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    #[inline]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[inline]
    pub fn strategy(&self) -> EvalStrategy {
        self.strategy
    }

    /// Evaluate the board for this evaluator's color.
    ///
    /// Positive values favor `color`, negative values favor the opponent.
    #[must_use]
    pub fn score(&self, board: &Board) -> i32 {
        match self.strategy {
            EvalStrategy::Easy => self.score_easy(board),
            EvalStrategy::Medium => self.score_medium(board),
            EvalStrategy::Hard => self.score_hard(board),
        }
    }

    fn score_easy(&self, board: &Board) -> i32 {
        let own: i32 = board
            .stone_positions(self.color)
            .map(|pos| run_score(board, pos, self.color))
            .sum();
        let threats: i32 = board
            .stone_positions(self.opponent)
            .map(|pos| threat_run_score(board, pos, self.opponent))
            .sum();
        own - threats
    }

    fn score_medium(&self, board: &Board) -> i32 {
        let own: i32 = board
            .stone_positions(self.color)
            .map(|pos| run_score(board, pos, self.color))
            .sum();
        let opp: i32 = board
            .stone_positions(self.opponent)
            .map(|pos| run_score(board, pos, self.opponent))
            .sum();
        own - opp - defensive_penalty(board, self.opponent)
    }

    fn score_hard(&self, board: &Board) -> i32 {
        let threats = maximal_runs(board, self.opponent)
            .into_iter()
            .filter(|run| run.len >= 4 && run.open_ends >= 1)
            .count() as i32;

        let formations: i32 = maximal_runs(board, self.color)
            .into_iter()
            .filter(|run| run.open_ends == 2)
            .map(|run| match run.len {
                2 => PatternScore::OPEN_TWO,
                n if n >= 3 => PatternScore::OPEN_THREE,
                _ => 0,
            })
            .sum();

        self.score_medium(board) - threats * PatternScore::FOUR_THREAT + formations
    }
}

/// Forward run length of `stone` starting at `pos` along `(dr, dc)`,
/// inclusive of `pos`, capped at five.
#[inline]
pub fn forward_run(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    1 + count_direction(board, pos, stone, dr, dc).min(PatternScore::MAX_RUN_STEPS)
}

/// Sum of `10^run` over the four axes for the stone at `pos`.
#[must_use]
pub fn run_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| run_value(forward_run(board, pos, stone, dr, dc)))
        .sum()
}

/// Run score restricted to runs of at least three that can still extend.
fn threat_run_score(board: &Board, pos: Pos, stone: Stone) -> i32 {
    let size = board.size();
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| {
            let run = forward_run(board, pos, stone, dr, dc);
            if run < PatternScore::EASY_THREAT_RUN {
                return None;
            }
            let open_ahead = pos
                .offset(dr, dc, run as i32, size)
                .is_some_and(|p| board.is_empty(p));
            let open_behind = pos
                .offset(dr, dc, -1, size)
                .is_some_and(|p| board.is_empty(p));
            (open_ahead || open_behind).then(|| run_value(run))
        })
        .sum()
}

/// Penalty magnitude for opponent stones with room to build five.
///
/// For each opponent stone and axis, scan the next four cells: count
/// opponent stones and empties, stopping at an own stone or the edge.
/// When stones + empties reach four, add `100 * stones^2`.
fn defensive_penalty(board: &Board, opponent: Stone) -> i32 {
    let size = board.size();
    let mut penalty = 0;

    for pos in board.stone_positions(opponent) {
        for &(dr, dc) in &DIRECTIONS {
            let mut stones = 0usize;
            let mut spaces = 0usize;
            for step in 1..=PatternScore::DEFENSIVE_WINDOW {
                let Some(p) = pos.offset(dr, dc, step, size) else {
                    break;
                };
                match board.get(p) {
                    Some(s) if s == opponent => stones += 1,
                    None => spaces += 1,
                    Some(_) => break,
                }
            }
            if stones + spaces >= PatternScore::DEFENSIVE_SPAN {
                penalty += PatternScore::DEFENSIVE_WEIGHT * (stones * stones) as i32;
            }
        }
    }

    penalty
}

/// Every maximal run of `stone`, each reported once from its start.
#[must_use]
pub fn maximal_runs(board: &Board, stone: Stone) -> Vec<Run> {
    let size = board.size();
    let mut runs = Vec::new();

    for pos in board.stone_positions(stone) {
        for &(dr, dc) in &DIRECTIONS {
            let behind = pos.offset(dr, dc, -1, size);
            // Not the start of this line segment
            if behind.is_some_and(|p| board.get(p) == Some(stone)) {
                continue;
            }

            let len = 1 + count_direction(board, pos, stone, dr, dc);
            let ahead = pos.offset(dr, dc, len as i32, size);
            let open_ends = u8::from(behind.is_some_and(|p| board.is_empty(p)))
                + u8::from(ahead.is_some_and(|p| board.is_empty(p)));

            runs.push(Run {
                start: pos,
                dir: (dr, dc),
                len,
                open_ends,
            });
        }
    }

    runs
}
