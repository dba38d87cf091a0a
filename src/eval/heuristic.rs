//! Per-cell heuristic for the computer opponent
//!
//! Each empty cell gets three parts:
//! - attack: how much a stone of ours there would extend our runs
//! - defense: the same for the opponent, i.e. how urgently the cell needs blocking
//! - center: a small bonus for cells near the middle
//!
//! No look-ahead: only the four lines through the cell itself are read.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::rules::{run_length, Axis};

use super::patterns::{run_score, ATTACK_WEIGHT, CENTER_FACTOR, DEFENSE_WEIGHT};

/// Score breakdown for one candidate cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScore {
    pub attack: i32,
    pub defense: i32,
    pub center: i32,
    pub total: f64,
}

/// Sum of run scores over the four axes for a `color` stone at `pos`.
///
/// `pos` is treated as holding `color`; the board is not modified.
#[must_use]
pub fn line_score(board: &Board, pos: Pos, color: Stone) -> i32 {
    Axis::ALL
        .iter()
        .map(|&axis| run_score(run_length(board, pos, color, axis)))
        .sum()
}

/// `(BOARD_SIZE - manhattan distance to center) * CENTER_FACTOR`
#[inline]
#[must_use]
pub fn center_weight(pos: Pos) -> i32 {
    (BOARD_SIZE as i32 - pos.center_distance() as i32) * CENTER_FACTOR
}

/// Score `pos` as a move for `player` against `opponent`.
///
/// Returns `None` for an occupied or off-board cell.
#[must_use]
pub fn evaluate_cell(board: &Board, pos: Pos, player: Stone, opponent: Stone) -> Option<CellScore> {
    if !pos.in_bounds() || !board.is_empty(pos) {
        return None;
    }

    let attack = line_score(board, pos, player);
    let defense = line_score(board, pos, opponent);
    let center = center_weight(pos);
    let total =
        f64::from(attack) * ATTACK_WEIGHT + f64::from(defense) * DEFENSE_WEIGHT + f64::from(center);

    Some(CellScore {
        attack,
        defense,
        center,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_weight() {
        assert_eq!(center_weight(Pos::new(7, 7)), 30);
        assert_eq!(center_weight(Pos::new(0, 0)), 2);
        assert_eq!(center_weight(Pos::new(7, 8)), 28);
    }

    #[test]
    fn test_lone_stone_scores_nothing() {
        let board = Board::new();
        assert_eq!(line_score(&board, Pos::new(7, 7), Stone::Black), 0);
    }

    #[test]
    fn test_line_score_sums_axes() {
        let mut board = Board::new();
        board.place_stone(Pos::new(6, 7), Stone::Black); // vertical two
        board.place_stone(Pos::new(7, 6), Stone::Black); // horizontal two
        board.place_stone(Pos::new(7, 5), Stone::Black); // ...three
        assert_eq!(line_score(&board, Pos::new(7, 7), Stone::Black), 100 + 10);
        assert_eq!(line_score(&board, Pos::new(7, 7), Stone::White), 0);
    }

    #[test]
    fn test_defense_sees_four_at_edge() {
        let mut board = Board::new();
        for c in 0..3 {
            board.place_stone(Pos::new(0, c), Stone::White);
        }
        // White has (0,0)..(0,2); a White stone at (0,3) makes four, walk stops at col 0
        let score = evaluate_cell(&board, Pos::new(0, 3), Stone::Black, Stone::White).unwrap();
        assert_eq!(score.defense, 1_000);
        assert_eq!(score.attack, 0);
        assert_eq!(score.center, (15 - 11) * 2);
        assert_eq!(score.total, 1_000.0 * 1.5 + 8.0);
    }

    #[test]
    fn test_occupied_cell_has_no_score() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert!(evaluate_cell(&board, Pos::new(7, 7), Stone::White, Stone::Black).is_none());
    }

    #[test]
    fn test_off_board_cell_has_no_score() {
        let board = Board::new();
        assert!(evaluate_cell(&board, Pos { row: 20, col: 0 }, Stone::White, Stone::Black).is_none());
        assert!(evaluate_cell(&board, Pos { row: 0, col: 15 }, Stone::White, Stone::Black).is_none());
    }

    #[test]
    fn test_evaluate_leaves_board_untouched() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Stone::White);
        let before = board.clone();
        let _ = evaluate_cell(&board, Pos::new(3, 4), Stone::White, Stone::Black);
        assert_eq!(board, before);
    }
}
