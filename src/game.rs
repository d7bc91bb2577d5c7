//! Match driver: alternates two players on one board until the game ends

use std::fmt;

use log::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::player::Player;
use crate::rules::WinRule;

/// Rejected moves tolerated per turn before the player forfeits
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    FiveInRow,
    /// Board filled with no winner
    BoardFull,
    /// A player returned no move while cells were still empty
    Resignation,
    /// A player exceeded the retry limit with illegal moves
    Forfeit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EndReason::FiveInRow => "five in a row",
            EndReason::BoardFull => "board full",
            EndReason::Resignation => "resignation",
            EndReason::Forfeit => "forfeit",
        };
        f.write_str(text)
    }
}

/// Final state of a played game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    /// `None` for a draw
    pub winner: Option<Stone>,
    /// Every accepted move in order
    pub moves: Vec<(Pos, Stone)>,
    pub reason: EndReason,
    pub board: Board,
}

impl GameOutcome {
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

enum Turn {
    Placed(Pos),
    Pass,
    Forfeit,
}

/// Runs one game between two players. Black moves first.
pub struct GameDriver {
    board: Board,
    rule: WinRule,
    max_retries: usize,
}

impl GameDriver {
    /// Driver starting from `board` (normally empty).
    pub fn new(board: Board) -> Self {
        Self {
            board,
            rule: WinRule::default(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_rule(mut self, rule: WinRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play to completion. Stones are placed with the seat's color
    /// regardless of what the player reports.
    pub fn play(mut self, black: &mut dyn Player, white: &mut dyn Player) -> GameOutcome {
        for (player, seat) in [(&*black, Stone::Black), (&*white, Stone::White)] {
            if player.stone() != seat {
                warn!(
                    "{} plays {} but is seated as {}",
                    player.name(),
                    player.stone(),
                    seat
                );
            }
        }

        let mut moves = Vec::new();
        let mut turn = Stone::Black;

        let (winner, reason) = loop {
            if self.board.is_full() {
                break (None, EndReason::BoardFull);
            }

            let player: &mut dyn Player = match turn {
                Stone::Black => &mut *black,
                Stone::White => &mut *white,
            };

            match self.take_turn(player, turn) {
                Turn::Pass if self.board.is_full() => break (None, EndReason::BoardFull),
                Turn::Pass => break (Some(turn.opponent()), EndReason::Resignation),
                Turn::Forfeit => break (Some(turn.opponent()), EndReason::Forfeit),
                Turn::Placed(pos) => {
                    moves.push((pos, turn));
                    if self.board.check_win_with(pos, turn, self.rule) {
                        break (Some(turn), EndReason::FiveInRow);
                    }
                }
            }

            turn = turn.opponent();
        };

        match winner {
            Some(stone) => info!("{stone} wins by {reason} after {} moves", moves.len()),
            None => info!("draw ({reason}) after {} moves", moves.len()),
        }

        GameOutcome {
            winner,
            moves,
            reason,
            board: self.board,
        }
    }

    /// Ask `player` until a move is accepted, it passes, or retries run out.
    fn take_turn(&mut self, player: &mut dyn Player, turn: Stone) -> Turn {
        let mut rejected = 0;
        loop {
            let Some(pos) = player.request_move(&self.board) else {
                return Turn::Pass;
            };
            match self.board.try_place(pos, turn) {
                Ok(()) => return Turn::Placed(pos),
                Err(e) => {
                    rejected += 1;
                    warn!("{} ({}) move rejected: {e}", player.name(), turn);
                    if rejected > self.max_retries {
                        return Turn::Forfeit;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays a fixed list of moves, then resigns.
    struct Scripted {
        stone: Stone,
        moves: VecDeque<Pos>,
        asked: usize,
    }

    impl Scripted {
        fn new(stone: Stone, moves: &[(u8, u8)]) -> Self {
            Self {
                stone,
                moves: moves.iter().map(|&(r, c)| Pos::new(r, c)).collect(),
                asked: 0,
            }
        }
    }

    impl Player for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn stone(&self) -> Stone {
            self.stone
        }

        fn request_move(&mut self, _board: &Board) -> Option<Pos> {
            self.asked += 1;
            self.moves.pop_front()
        }
    }

    /// Repeats the same move forever.
    struct Stubborn(Stone, Pos, usize);

    impl Player for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn stone(&self) -> Stone {
            self.0
        }

        fn request_move(&mut self, _board: &Board) -> Option<Pos> {
            self.2 += 1;
            Some(self.1)
        }
    }

    #[test]
    fn test_five_in_row_wins() {
        let mut black = Scripted::new(Stone::Black, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let mut white = Scripted::new(Stone::White, &[(1, 0), (1, 1), (1, 2), (1, 3)]);

        let outcome = GameDriver::new(Board::new()).play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::Black));
        assert_eq!(outcome.reason, EndReason::FiveInRow);
        assert_eq!(outcome.moves.len(), 9);
        assert_eq!(outcome.moves[0], (Pos::new(0, 0), Stone::Black));
        assert_eq!(outcome.moves[8], (Pos::new(0, 4), Stone::Black));
    }

    #[test]
    fn test_full_board_is_draw() {
        // Stripe pattern with no five: 13 black cells, 12 white cells
        let mut black_moves = Vec::new();
        let mut white_moves = Vec::new();
        for r in 0..5u8 {
            for c in 0..5u8 {
                if (c + 2 * r) % 4 < 2 {
                    black_moves.push((r, c));
                } else {
                    white_moves.push((r, c));
                }
            }
        }
        let mut black = Scripted::new(Stone::Black, &black_moves);
        let mut white = Scripted::new(Stone::White, &white_moves);

        let board = Board::with_size(5).unwrap();
        let outcome = GameDriver::new(board).play(&mut black, &mut white);
        assert!(outcome.is_draw());
        assert_eq!(outcome.reason, EndReason::BoardFull);
        assert_eq!(outcome.moves.len(), 25);
        assert!(outcome.board.is_full());
    }

    #[test]
    fn test_none_on_open_board_resigns() {
        let mut black = Scripted::new(Stone::Black, &[]);
        let mut white = Scripted::new(Stone::White, &[]);

        let outcome = GameDriver::new(Board::new()).play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::White));
        assert_eq!(outcome.reason, EndReason::Resignation);
        assert!(outcome.moves.is_empty());
        assert_eq!(white.asked, 0);
    }

    #[test]
    fn test_repeated_illegal_moves_forfeit() {
        let mut black = Scripted::new(Stone::Black, &[(0, 0), (5, 5)]);
        let mut white = Stubborn(Stone::White, Pos::new(0, 0), 0);

        let outcome = GameDriver::new(Board::new())
            .with_max_retries(2)
            .play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::Black));
        assert_eq!(outcome.reason, EndReason::Forfeit);
        assert_eq!(outcome.moves.len(), 1);
        // One first try plus two retries
        assert_eq!(white.2, 3);
    }

    #[test]
    fn test_off_board_move_retried() {
        let black_moves = [(20, 20), (0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
        let mut black = Scripted::new(Stone::Black, &black_moves);
        let mut white = Scripted::new(Stone::White, &[(1, 0), (1, 1), (1, 2), (1, 3)]);

        let outcome = GameDriver::new(Board::new()).play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::Black));
        assert_eq!(outcome.moves.len(), 9);
    }

    #[test]
    fn test_overline_under_exactly_five() {
        let black_moves = [(0, 0), (0, 1), (0, 3), (0, 4), (0, 5), (0, 2)];
        let white_moves = [(2, 0), (2, 1), (2, 3), (2, 4), (4, 0), (4, 1)];

        let mut black = Scripted::new(Stone::Black, &black_moves);
        let mut white = Scripted::new(Stone::White, &white_moves);
        let outcome = GameDriver::new(Board::new()).play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::Black));
        assert_eq!(outcome.reason, EndReason::FiveInRow);
        assert_eq!(outcome.moves.len(), 11);

        let mut black = Scripted::new(Stone::Black, &black_moves);
        let mut white = Scripted::new(Stone::White, &white_moves);
        let outcome = GameDriver::new(Board::new())
            .with_rule(WinRule::ExactlyFive)
            .play(&mut black, &mut white);
        assert_eq!(outcome.winner, Some(Stone::White));
        assert_eq!(outcome.reason, EndReason::Resignation);
        assert_eq!(outcome.moves.len(), 12);
    }
}
