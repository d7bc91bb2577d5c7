//! Game rules for Gomoku
//!
//! Freestyle five-in-a-row: no captures, no forbidden moves.

pub mod win;

pub use win::{
    count_direction, has_five_in_row, is_win_at, line_length, WinRule, DIRECTIONS, WIN_LENGTH,
};
