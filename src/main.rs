//! Gomoku command-line front end
//!
//! ## Usage
//!
//! - `gomoku play --difficulty hard` - Play against the engine
//! - `gomoku match --black easy --white hard` - Watch two engines play
//! - `gomoku tournament --players easy,medium,hard` - Round-robin between tiers
//!
//! Set `RUST_LOG=debug` to see per-move search statistics.

use std::io;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};

use gomoku::tournament::{Entrant, Tournament};
use gomoku::{
    AiPlayer, Board, Difficulty, EngineConfig, GameDriver, GameOutcome, HumanPlayer, Player, Stone,
    DEFAULT_BOARD_SIZE,
};

/// Gomoku: five in a row against a minimax engine
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine from the terminal
    Play {
        /// very-easy, easy, medium or hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_enum, default_value_t = Side::Black)]
        human_color: Side,
    },
    /// Play one engine against another
    Match {
        #[arg(long)]
        black: Difficulty,
        #[arg(long)]
        white: Difficulty,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Seed for the engines' random moves
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Round-robin tournament, each pairing played with both colors
    Tournament {
        #[arg(long, value_delimiter = ',', default_value = "easy,medium,hard")]
        players: Vec<Difficulty>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            difficulty,
            size,
            human_color,
        } => run_play(difficulty, size, human_color.into()),
        Commands::Match {
            black,
            white,
            size,
            seed,
        } => run_match(black, white, size, seed),
        Commands::Tournament {
            players,
            size,
            seed,
        } => run_tournament(&players, size, seed),
    }
}

fn run_play(difficulty: Difficulty, size: usize, human: Stone) -> anyhow::Result<()> {
    let board = Board::with_size(size)?;
    let stdin = io::stdin();
    let mut you = HumanPlayer::new("You", human, stdin.lock(), io::stdout());
    let mut ai = AiPlayer::with_difficulty(human.opponent(), difficulty);

    println!("You play {human} against {difficulty} on {size}x{size}.");
    let outcome = match human {
        Stone::Black => GameDriver::new(board).play(&mut you, &mut ai),
        Stone::White => GameDriver::new(board).play(&mut ai, &mut you),
    };

    let names = [(human, you.name()), (human.opponent(), ai.name())];
    print_outcome(&outcome, &names);
    Ok(())
}

fn run_match(
    black: Difficulty,
    white: Difficulty,
    size: usize,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let board = Board::with_size(size)?;
    let config = |difficulty: Difficulty, offset: u64| {
        let cfg = EngineConfig::new(difficulty);
        match seed {
            Some(s) => cfg.with_seed(s.wrapping_add(offset)),
            None => cfg,
        }
    };
    let mut b = AiPlayer::with_config(format!("{black} (black)"), Stone::Black, config(black, 0));
    let mut w = AiPlayer::with_config(format!("{white} (white)"), Stone::White, config(white, 1));

    let outcome = GameDriver::new(board).play(&mut b, &mut w);
    println!("{}", outcome.board);
    let names = [(Stone::Black, b.name()), (Stone::White, w.name())];
    print_outcome(&outcome, &names);
    Ok(())
}

fn run_tournament(players: &[Difficulty], size: usize, seed: Option<u64>) -> anyhow::Result<()> {
    if players.len() < 2 {
        bail!(
            "a tournament needs at least two players, got {}",
            players.len()
        );
    }

    // Repeated tiers get a numeric suffix so standings stay distinct
    let entrants = players
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let repeats = players[..i].iter().filter(|&&p| p == d).count();
            let name = if repeats == 0 {
                d.to_string()
            } else {
                format!("{d}#{}", repeats + 1)
            };
            Entrant::new(name, d)
        })
        .collect();

    let mut tournament = Tournament::new(entrants, size)?;
    if let Some(s) = seed {
        tournament = tournament.with_seed(s);
    }
    let report = tournament.run().context("tournament aborted")?;

    let names: Vec<&str> = tournament
        .entrants()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    for game in &report.games {
        let result = match game.winner {
            Some(stone) => format!("{stone} wins by {}", game.reason),
            None => "draw".to_string(),
        };
        println!(
            "{:>12} vs {:<12} {result} ({} moves)",
            names[game.black], names[game.white], game.moves
        );
    }

    println!(
        "\n{:<4}{:<14}{:>6}{:>4}{:>4}{:>4}",
        "#", "player", "pts", "W", "D", "L"
    );
    for (place, s) in report.standings.iter().enumerate() {
        println!(
            "{:<4}{:<14}{:>6}{:>4}{:>4}{:>4}",
            place + 1,
            s.name,
            s.points,
            s.wins,
            s.draws,
            s.losses
        );
    }
    Ok(())
}

fn print_outcome(outcome: &GameOutcome, names: &[(Stone, &str)]) {
    let name_of = |stone: Stone| {
        names
            .iter()
            .find(|(s, _)| *s == stone)
            .map_or("?", |&(_, n)| n)
    };
    match outcome.winner {
        Some(stone) => println!(
            "{} ({stone}) wins by {} after {} moves.",
            name_of(stone),
            outcome.reason,
            outcome.moves.len()
        ),
        None => println!("Draw after {} moves.", outcome.moves.len()),
    }
}
