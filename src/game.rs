//! Game state and placement rules
//!
//! [`GameState`] is the single writer of the grid. Every accepted placement
//! either keeps the game in progress and hands the turn over, or ends it with
//! a win or a draw. Terminal games refuse further placements until replaced
//! by a fresh state.

use tracing::{debug, info, warn};

use crate::board::{Board, Pos, Stone};
use crate::error::{InvalidMoveReason, PlacementError};
use crate::rules::{check_win, is_board_full};

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Stone, line: Vec<Pos> },
    Draw,
}

/// Outcome of one accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No line yet, board not full; the other player moves next
    Continue,
    /// The placement completed a line; cells ordered end to end
    Win(Vec<Pos>),
    /// The placement filled the last cell without a line
    Draw,
}

/// Full game state: grid, side to move and status
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Stone,
    status: GameStatus,
    last_move: Option<Pos>,
    move_count: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Winner, if the game ended with a line
    pub fn winner(&self) -> Option<Stone> {
        match &self.status {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Cells of the winning line, if any
    pub fn winning_cells(&self) -> Option<&[Pos]> {
        match &self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// "Black wins", "White wins" or "Draw" once the game is over
    pub fn result_message(&self) -> Option<String> {
        match &self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(format!("{winner} wins")),
            GameStatus::Draw => Some("Draw".to_string()),
        }
    }

    /// Place a stone for `player`.
    ///
    /// Rejected without touching the state when the game is over, the cell is
    /// off the board or occupied, `player` is not a color, or it is the other
    /// player's turn.
    pub fn place_stone(&mut self, pos: Pos, player: Stone) -> Result<Placement, PlacementError> {
        if let Err(reason) = self.validate(pos, player) {
            warn!(%pos, %player, %reason, "placement rejected");
            return Err(PlacementError::InvalidMove { pos, reason });
        }

        self.board.place_stone(pos, player);
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(%pos, %player, moves = self.move_count, "stone placed");

        if let Some(line) = check_win(&self.board, pos, player) {
            info!(winner = %player, length = line.len(), "five in a row");
            self.status = GameStatus::Won {
                winner: player,
                line: line.clone(),
            };
            return Ok(Placement::Win(line));
        }

        if is_board_full(&self.board) {
            info!(moves = self.move_count, "board full, game drawn");
            self.status = GameStatus::Draw;
            return Ok(Placement::Draw);
        }

        self.current_player = player.opponent();
        Ok(Placement::Continue)
    }

    /// Place a stone for whoever is to move.
    pub fn play(&mut self, pos: Pos) -> Result<Placement, PlacementError> {
        self.place_stone(pos, self.current_player)
    }

    fn validate(&self, pos: Pos, player: Stone) -> Result<(), InvalidMoveReason> {
        if self.is_terminal() {
            return Err(InvalidMoveReason::GameOver);
        }
        if !player.is_player() {
            return Err(InvalidMoveReason::NotAPlayer);
        }
        if !pos.in_bounds() {
            return Err(InvalidMoveReason::OutOfBounds);
        }
        if !self.board.is_empty(pos) {
            return Err(InvalidMoveReason::Occupied);
        }
        if player != self.current_player {
            return Err(InvalidMoveReason::NotYourTurn);
        }
        Ok(())
    }
}
