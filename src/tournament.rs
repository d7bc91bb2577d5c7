//! Round-robin tournament between engine difficulties
//!
//! Every pair of entrants meets twice, once with each color assignment.
//! A win is worth 3 points, a draw 1 point to each side, a loss nothing.

use std::cmp::Reverse;

use log::info;

use crate::board::{Board, Stone};
use crate::config::{Difficulty, EngineConfig};
use crate::error::ConfigError;
use crate::game::{EndReason, GameDriver};
use crate::player::AiPlayer;

pub const WIN_POINTS: u32 = 3;
pub const DRAW_POINTS: u32 = 1;

/// A tournament participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entrant {
    pub name: String,
    pub difficulty: Difficulty,
}

impl Entrant {
    pub fn new(name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }
}

/// One played game, by entrant index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub black: usize,
    pub white: usize,
    pub winner: Option<Stone>,
    pub reason: EndReason,
    pub moves: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Standing {
    #[inline]
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

#[derive(Debug, Clone)]
pub struct TournamentReport {
    pub games: Vec<GameRecord>,
    /// Sorted by points (descending), then name
    pub standings: Vec<Standing>,
}

/// Round-robin schedule over a fixed board size.
pub struct Tournament {
    entrants: Vec<Entrant>,
    board_size: usize,
    cache_mb: usize,
    seed: Option<u64>,
}

impl Tournament {
    pub fn new(entrants: Vec<Entrant>, board_size: usize) -> Result<Self, ConfigError> {
        // Validate once so every game can build its board
        Board::with_size(board_size)?;
        Ok(Self {
            entrants,
            board_size,
            cache_mb: 4,
            seed: None,
        })
    }

    pub fn with_cache_mb(mut self, cache_mb: usize) -> Self {
        self.cache_mb = cache_mb;
        self
    }

    /// Derive every engine's RNG seed from `seed` so the run is repeatable
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn entrants(&self) -> &[Entrant] {
        &self.entrants
    }

    /// Pairings as (black, white) entrant indices, in play order
    pub fn schedule(&self) -> Vec<(usize, usize)> {
        let n = self.entrants.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1));
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push((i, j));
                pairs.push((j, i));
            }
        }
        pairs
    }

    pub fn run(&self) -> Result<TournamentReport, ConfigError> {
        let mut standings: Vec<Standing> = self
            .entrants
            .iter()
            .map(|e| Standing {
                name: e.name.clone(),
                ..Standing::default()
            })
            .collect();
        let mut games = Vec::new();

        for (game_no, (b, w)) in self.schedule().into_iter().enumerate() {
            let mut black = self.player(b, Stone::Black, 2 * game_no as u64);
            let mut white = self.player(w, Stone::White, 2 * game_no as u64 + 1);
            let board = Board::with_size(self.board_size)?;

            let outcome = GameDriver::new(board).play(&mut black, &mut white);

            match outcome.winner {
                Some(Stone::Black) => {
                    standings[b].wins += 1;
                    standings[b].points += WIN_POINTS;
                    standings[w].losses += 1;
                }
                Some(Stone::White) => {
                    standings[w].wins += 1;
                    standings[w].points += WIN_POINTS;
                    standings[b].losses += 1;
                }
                None => {
                    for idx in [b, w] {
                        standings[idx].draws += 1;
                        standings[idx].points += DRAW_POINTS;
                    }
                }
            }

            info!(
                "game {}: {} (black) vs {} (white): {} by {}",
                game_no + 1,
                self.entrants[b].name,
                self.entrants[w].name,
                outcome.winner.map_or("draw".to_string(), |s| s.to_string()),
                outcome.reason
            );

            games.push(GameRecord {
                black: b,
                white: w,
                winner: outcome.winner,
                reason: outcome.reason,
                moves: outcome.moves.len(),
            });
        }

        standings.sort_by_key(|s| (Reverse(s.points), s.name.clone()));

        Ok(TournamentReport { games, standings })
    }

    /// Fresh engine for one seat of one game
    fn player(&self, idx: usize, stone: Stone, offset: u64) -> AiPlayer {
        let entrant = &self.entrants[idx];
        let mut config = EngineConfig::new(entrant.difficulty).with_cache_mb(self.cache_mb);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(offset));
        }
        AiPlayer::with_config(entrant.name.clone(), stone, config)
    }
}
