use std::fmt;

use crate::board::Pos;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    Occupied,
    OutOfBounds,
    GameOver,
    NotYourTurn,
    NotAPlayer,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::Occupied => "cell is occupied",
            InvalidMoveReason::OutOfBounds => "cell is off the board",
            InvalidMoveReason::GameOver => "game is already over",
            InvalidMoveReason::NotYourTurn => "not this player's turn",
            InvalidMoveReason::NotAPlayer => "an empty stone cannot be placed",
        };
        f.write_str(text)
    }
}

/// Errors raised by the rules engine. A rejected placement never mutates
/// the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("invalid move at {pos}: {reason}")]
    InvalidMove { pos: Pos, reason: InvalidMoveReason },
}

impl PlacementError {
    pub fn reason(&self) -> InvalidMoveReason {
        match self {
            PlacementError::InvalidMove { reason, .. } => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = PlacementError::InvalidMove {
            pos: Pos::new(3, 4),
            reason: InvalidMoveReason::Occupied,
        };
        assert_eq!(err.to_string(), "invalid move at (3, 4): cell is occupied");
        assert_eq!(err.reason(), InvalidMoveReason::Occupied);
    }

    #[test]
    fn test_game_over_display() {
        let err = PlacementError::InvalidMove {
            pos: Pos::new(0, 0),
            reason: InvalidMoveReason::GameOver,
        };
        assert_eq!(err.to_string(), "invalid move at (0, 0): game is already over");
    }
}
