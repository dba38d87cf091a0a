//! Five-in-a-row on a 15x15 board
//!
//! Standard Gomoku: Black moves first, five or more stones in a row wins,
//! a full board without a line is a draw. An optional computer opponent
//! plays a one-ply heuristic.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line walking and win/full-board detection
//! - [`game`]: Game state machine and placement validation
//! - [`eval`]: Per-cell scoring for the computer opponent
//! - [`engine`]: Move selection with random tie-breaking
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, GameState, Placement, Pos, Stone};
//!
//! let mut game = GameState::new();
//! let mut engine = AIEngine::with_seed(1);
//!
//! assert_eq!(game.play(Pos::new(7, 7)).unwrap(), Placement::Continue);
//!
//! // Computer answers as White
//! if let Some(pos) = engine.find_best_move(game.board(), Stone::White, Stone::Black) {
//!     game.play(pos).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert_eq!(game.current_player(), Stone::Black);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult};
pub use error::{InvalidMoveReason, PlacementError};
pub use game::{GameState, GameStatus, Placement};
