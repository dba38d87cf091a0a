//! Session state for the GUI: mode, pacing of the computer's move, hints

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{AIEngine, GameState, MoveResult, Placement, Pos, Stone};

/// Delay before the computer plays, so its move is visible as a separate step
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// Settings that survive a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub ai_delay: Duration,
    /// Fixed RNG seed for the computer's tie-breaks
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            ai_delay: DEFAULT_AI_DELAY,
            seed: None,
        }
    }
}

/// Computer move scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// Computer to move once `ai_delay` has passed since `since`
    Waiting { since: Instant },
}

/// One game plus everything the front-end needs around it
pub struct Session {
    pub game: GameState,
    pub config: SessionConfig,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub suggested_move: Option<Pos>,
    engine: AIEngine,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => AIEngine::with_seed(seed),
            None => AIEngine::new(),
        };
        let mut session = Self {
            game: GameState::new(),
            config,
            ai_state: AiState::Idle,
            last_ai_result: None,
            suggested_move: None,
            engine,
        };
        session.schedule_ai(Instant::now());
        session
    }

    /// Discard the game and start a fresh one with the same settings
    pub fn on_reset(&mut self) {
        info!(mode = ?self.config.mode, "new game");
        self.game = GameState::new();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.suggested_move = None;
        self.schedule_ai(Instant::now());
    }

    /// Switch mode and start over
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.on_reset();
    }

    /// Color the computer plays, if any
    pub fn ai_player(&self) -> Option<Stone> {
        match self.config.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP => None,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.game.is_terminal() && Some(self.game.current_player()) != self.ai_player()
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.game.is_terminal() && Some(self.game.current_player()) == self.ai_player()
    }

    pub fn is_ai_pending(&self) -> bool {
        matches!(self.ai_state, AiState::Waiting { .. })
    }

    /// Time left before the computer moves
    pub fn ai_remaining(&self, now: Instant) -> Option<Duration> {
        match self.ai_state {
            AiState::Waiting { since } => {
                Some(self.config.ai_delay.saturating_sub(now.saturating_duration_since(since)))
            }
            AiState::Idle => None,
        }
    }

    /// A click on the board. Ignored unless a human is to move on an empty
    /// on-board cell; returns whether a stone was placed.
    pub fn on_cell_activated(&mut self, pos: Pos) -> bool {
        if !self.is_human_turn() || !pos.in_bounds() || !self.game.board().is_empty(pos) {
            return false;
        }
        match self.game.play(pos) {
            Ok(_) => {
                self.suggested_move = None;
                self.schedule_ai(Instant::now());
                true
            }
            Err(err) => {
                debug!(%err, "click ignored");
                false
            }
        }
    }

    /// Play the computer's move once its delay has passed.
    /// Returns the placement if one was made.
    pub fn tick(&mut self, now: Instant) -> Option<Placement> {
        let AiState::Waiting { since } = self.ai_state else {
            return None;
        };
        if now.saturating_duration_since(since) < self.config.ai_delay {
            return None;
        }
        self.ai_state = AiState::Idle;

        let ai = self.ai_player()?;
        if !self.is_ai_turn() {
            return None;
        }

        let result = self.engine.get_move_with_stats(self.game.board(), ai, ai.opponent());
        let pos = result.best_move;
        self.last_ai_result = Some(result);

        match self.game.place_stone(pos?, ai) {
            Ok(placement) => {
                self.schedule_ai(now);
                Some(placement)
            }
            Err(err) => {
                debug!(%err, "computer move rejected");
                None
            }
        }
    }

    /// Suggest a move for the side to move (PvP helper)
    pub fn request_suggestion(&mut self) {
        if self.game.is_terminal() {
            return;
        }
        let color = self.game.current_player();
        let result = self.engine.get_move_with_stats(self.game.board(), color, color.opponent());
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    fn schedule_ai(&mut self, now: Instant) {
        if self.is_ai_turn() {
            self.ai_state = AiState::Waiting { since: now };
        }
    }
}
