//! Evaluation for the computer opponent
//!
//! Scores empty cells from run lengths through the cell, weighting blocking
//! above extending, with a bonus toward the center.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_weight, evaluate_cell, line_score, CellScore};
pub use patterns::{run_score, RunScore, ATTACK_WEIGHT, CENTER_FACTOR, DEFENSE_WEIGHT};
