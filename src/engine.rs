//! Computer opponent
//!
//! One-ply heuristic: every empty cell is scored with
//! [`evaluate_cell`](crate::eval::evaluate_cell) and the best is played.
//! Cells sharing the top score are broken uniformly at random, so the
//! opening move varies between games.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White, Stone::Black);
//! let pos = result.best_move.expect("board has empty cells");
//! assert!(board.is_empty(pos));
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate_cell;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move, `None` on a full board
    pub best_move: Option<Pos>,
    /// Combined score of the chosen cell
    pub score: f64,
    /// Number of cells that shared the top score
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            candidates: 0,
            time_ms,
        }
    }
}

/// Heuristic move picker.
///
/// Holds only the tie-break RNG; the board is passed in on every call.
pub struct AIEngine {
    rng: ChaCha8Rng,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Engine whose tie-breaks are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Best cell for `ai_player`, or `None` if the board is full.
    #[must_use]
    pub fn find_best_move(&mut self, board: &Board, ai_player: Stone, human_player: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, ai_player, human_player).best_move
    }

    /// Score every empty cell and pick among the top-scoring ones.
    ///
    /// Ties use exact equality of the combined score.
    pub fn get_move_with_stats(&mut self, board: &Board, ai_player: Stone, human_player: Stone) -> MoveResult {
        let start = Instant::now();

        let mut best_score = f64::NEG_INFINITY;
        let mut best_moves: Vec<Pos> = Vec::new();

        for pos in board.empty_cells() {
            let Some(cell) = evaluate_cell(board, pos, ai_player, human_player) else {
                continue;
            };
            if cell.total > best_score {
                best_score = cell.total;
                best_moves.clear();
                best_moves.push(pos);
            } else if cell.total == best_score {
                best_moves.push(pos);
            }
        }

        let time_ms = start.elapsed().as_millis() as u64;
        let Some(&choice) = best_moves.choose(&mut self.rng) else {
            debug!("no empty cell left, no move");
            return MoveResult::no_move(time_ms);
        };

        debug!(
            pos = %choice,
            score = best_score,
            candidates = best_moves.len(),
            time_ms,
            "evaluator picked move"
        );
        MoveResult {
            best_move: Some(choice),
            score: best_score,
            candidates: best_moves.len(),
            time_ms,
        }
    }
}
