//! GUI module for the Gomoku game
//!
//! A native egui/eframe front-end. It holds no rules of its own: clicks are
//! forwarded to [`GameState`](crate::GameState) and the computer's move comes
//! from [`AIEngine`](crate::AIEngine).

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::{AiState, GameMode, Session, SessionConfig, DEFAULT_AI_DELAY};
