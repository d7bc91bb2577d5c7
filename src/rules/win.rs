//! Win condition checking
//!
//! A win is an unbroken line of one color along any of the four axes,
//! counted through the most recently placed stone. By default a line of
//! five or more wins (overlines allowed); `WinRule::ExactlyFive` rejects
//! overlines for drivers that want the stricter rule.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Anti-diagonal SW
];

/// Stones needed in a line to win
pub const WIN_LENGTH: usize = 5;

/// Which line lengths count as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinRule {
    /// Five or more in a row wins
    #[default]
    FiveOrMore,
    /// Exactly five wins; overlines do not
    ExactlyFive,
}

impl WinRule {
    #[inline]
    pub fn is_winning_length(self, len: usize) -> bool {
        match self {
            WinRule::FiveOrMore => len >= WIN_LENGTH,
            WinRule::ExactlyFive => len == WIN_LENGTH,
        }
    }
}

/// Count contiguous `stone`s from `pos` (exclusive) stepping along `(dr, dc)`.
/// Stops at the first non-matching or off-board cell.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let size = board.size();
    let mut count = 0;
    let mut step = 1;
    while let Some(p) = pos.offset(dr, dc, step, size) {
        if board.get(p) != Some(stone) {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the line of `stone` through `pos` along one axis, inclusive of `pos`.
#[inline]
pub fn line_length(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    1 + count_direction(board, pos, stone, dr, dc) + count_direction(board, pos, stone, -dr, -dc)
}

/// Check whether the stone at `pos` completes a winning line for `stone`.
///
/// Returns false when `pos` does not hold `stone`.
pub fn is_win_at(board: &Board, pos: Pos, stone: Stone, rule: WinRule) -> bool {
    if board.get(pos) != Some(stone) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| rule.is_winning_length(line_length(board, pos, stone, dr, dc)))
}

/// Scan the whole board for any winning line of `stone`.
pub fn has_five_in_row(board: &Board, stone: Stone, rule: WinRule) -> bool {
    board
        .stone_positions(stone)
        .any(|pos| is_win_at(board, pos, stone, rule))
}
