//! Five-in-a-row detection
//!
//! A win can only appear on a line through the stone just played, so every
//! check here starts from one position and walks outward along four axes.
//! Lines of six or more also win.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// The four line directions through a cell, in checking order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Forward step `(dr, dc)`; the backward step is its negation
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (-1, 1),
        }
    }
}

/// Count consecutive `color` stones from `pos` (exclusive) in one direction.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        if board.get(p) != color {
            break;
        }
        count += 1;
        cursor = p.step(dr, dc);
    }
    count
}

/// Length of the `color` run through `pos` along `axis`.
///
/// `pos` itself counts as one stone of `color` whatever it currently holds,
/// so the evaluator can ask "what if I played here" without touching the
/// board. No early exit: a run of seven reports seven.
#[inline]
pub fn run_length(board: &Board, pos: Pos, color: Stone, axis: Axis) -> usize {
    let (dr, dc) = axis.delta();
    1 + count_direction(board, pos, dr, dc, color) + count_direction(board, pos, -dr, -dc, color)
}

/// The full `color` run through `pos` along `axis`, ordered from the
/// backward extreme to the forward extreme.
pub fn line_through(board: &Board, pos: Pos, color: Stone, axis: Axis) -> Vec<Pos> {
    let (dr, dc) = axis.delta();
    let mut line = Vec::with_capacity(WIN_LENGTH);

    let mut cursor = pos.step(-dr, -dc);
    while let Some(p) = cursor {
        if board.get(p) != color {
            break;
        }
        line.push(p);
        cursor = p.step(-dr, -dc);
    }
    line.reverse();
    line.push(pos);

    let mut cursor = pos.step(dr, dc);
    while let Some(p) = cursor {
        if board.get(p) != color {
            break;
        }
        line.push(p);
        cursor = p.step(dr, dc);
    }
    line
}

/// Check whether the stone `color` just played at `pos` completes a line.
///
/// Returns the winning run of the first axis (in [`Axis::ALL`] order) that
/// reaches [`WIN_LENGTH`], ordered end to end.
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if !color.is_player() {
        return None;
    }
    Axis::ALL
        .into_iter()
        .find(|&axis| run_length(board, pos, color, axis) >= WIN_LENGTH)
        .map(|axis| line_through(board, pos, color, axis))
}

/// True iff no empty cell remains.
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}
