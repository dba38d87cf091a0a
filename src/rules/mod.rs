//! Game rules for standard Gomoku
//!
//! Five or more in a row wins; a full board with no line is a draw.

pub mod win;

pub use win::{check_win, is_board_full, line_through, run_length, Axis, WIN_LENGTH};
