//! Difficulty tiers and engine configuration

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::eval::EvalStrategy;
use crate::search::ReplacementPolicy;

/// Default transposition cache size in megabytes
pub const DEFAULT_CACHE_MB: usize = 16;

/// Named difficulty tier: selects search depth and evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Uniform random move, no search
    VeryEasy,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::VeryEasy => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    #[inline]
    pub fn strategy(self) -> EvalStrategy {
        match self {
            Difficulty::VeryEasy | Difficulty::Easy => EvalStrategy::Easy,
            Difficulty::Medium => EvalStrategy::Medium,
            Difficulty::Hard => EvalStrategy::Hard,
        }
    }

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "very-easy",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "very-easy" | "very_easy" | "veryeasy" => Ok(Difficulty::VeryEasy),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Construction-time engine settings.
///
/// ```
/// use gomoku::{Difficulty, EngineConfig};
///
/// let cfg = EngineConfig::new(Difficulty::Medium).with_seed(7);
/// assert_eq!(cfg.depth, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Search depth in plies; defaults to `difficulty.depth()`
    pub depth: u8,
    pub cache_mb: usize,
    pub replacement: ReplacementPolicy,
    /// Seed for the random fallback; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            cache_mb: DEFAULT_CACHE_MB,
            replacement: ReplacementPolicy::default(),
            seed: None,
        }
    }

    /// Override the search depth. Zero is rejected.
    pub fn with_depth(mut self, depth: u8) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        self.depth = depth;
        Ok(self)
    }

    pub fn with_cache_mb(mut self, cache_mb: usize) -> Self {
        self.cache_mb = cache_mb;
        self
    }

    pub fn with_replacement(mut self, replacement: ReplacementPolicy) -> Self {
        self.replacement = replacement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Difficulty::Medium)
    }
}
