//! Error types surfaced by the turn scheduler.

use crate::action::MoveError;
use crate::env::LevelLoadError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameStatus;
use crate::tools::ToolError;

/// Reasons an action is rejected. The input state is never modified and the
/// turn counter does not advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("tool rejected: {0}")]
    Tool(#[from] ToolError),

    #[error("game is {status}; no actions accepted")]
    GameOver { status: GameStatus },
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidMove(error) => error.severity(),
            Self::Tool(error) => error.severity(),
            Self::GameOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMove(error) => error.error_code(),
            Self::Tool(error) => error.error_code(),
            Self::GameOver { .. } => "TURN_GAME_OVER",
        }
    }
}

/// Failures while moving a run on to its next level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("level is {status}; only a won level can advance")]
    NotWon { status: GameStatus },

    #[error(transparent)]
    Level(#[from] LevelLoadError),
}

impl GameError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotWon { .. } => ErrorSeverity::Validation,
            Self::Level(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotWon { .. } => "PROGRESSION_NOT_WON",
            Self::Level(error) => error.error_code(),
        }
    }
}
