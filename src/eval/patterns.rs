//! Pattern scores for Gomoku evaluation
//!
//! Run scoring is exponential in run length so that one longer run
//! outweighs any number of shorter ones in practice.

/// Scoring weights shared by every evaluation strategy
pub struct PatternScore;

impl PatternScore {
    /// Terminal score for a completed five (search only, never from evaluate)
    pub const WIN: i32 = 1_000_000_000;

    /// Base of the run score: a run of length `n` is worth `RUN_BASE^n`
    pub const RUN_BASE: i32 = 10;
    /// Extra cells scanned past a stone when measuring its forward run
    pub const MAX_RUN_STEPS: usize = 4;

    /// Opponent forward run (with an open end) that Easy treats as a threat
    pub const EASY_THREAT_RUN: usize = 3;

    /// Defensive term: cells scanned ahead of each opponent stone
    pub const DEFENSIVE_WINDOW: i32 = 4;
    /// Defensive term fires when stones + empties in the window reach this
    pub const DEFENSIVE_SPAN: usize = 4;
    /// Defensive penalty per squared run length
    pub const DEFENSIVE_WEIGHT: i32 = 100;

    /// Penalty per opponent four (or longer) with an open continuation
    pub const FOUR_THREAT: i32 = 1_000;
    /// Bonus for an own run of three or more open at both ends
    pub const OPEN_THREE: i32 = 500;
    /// Bonus for an own run of exactly two open at both ends
    pub const OPEN_TWO: i32 = 50;
}

const _: () = assert!(PatternScore::OPEN_THREE > PatternScore::OPEN_TWO);
const _: () = assert!(PatternScore::FOUR_THREAT > PatternScore::OPEN_THREE);

/// Score for a single run of `len` stones (`len` in 1..=5)
#[inline]
pub fn run_value(len: usize) -> i32 {
    PatternScore::RUN_BASE.pow(len as u32)
}
