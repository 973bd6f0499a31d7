//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core, action log persistence and replay
//! verification so clients can bubble them up with consistent context.
use std::path::PathBuf;

use heist_core::{ErrorSeverity, GameError, LevelLoadError, ProgressionError, TurnError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to start level")]
    Level(#[from] LevelLoadError),

    #[error("turn rejected: {0}")]
    Turn(#[from] TurnError),

    #[error("cannot advance to the next level")]
    Progression(#[from] ProgressionError),

    #[error("replay diverged from the recorded digest at turn {turn}")]
    Divergence { turn: u64 },

    #[error("initial state does not match the action log")]
    InitialStateMismatch,

    #[error("action log encoding failed")]
    Encoding(#[from] serde_json::Error),

    #[error("action log i/o failed for {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// Severity of the underlying failure, for front ends deciding whether to retry.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Level(error) => error.severity(),
            Self::Turn(error) => error.severity(),
            Self::Progression(error) => error.severity(),
            Self::Divergence { .. } | Self::InitialStateMismatch => ErrorSeverity::Internal,
            Self::Encoding(_) | Self::Io { .. } => ErrorSeverity::Fatal,
        }
    }

    /// True if the session is unaffected and another action may succeed.
    pub fn is_recoverable(&self) -> bool {
        self.severity().is_recoverable()
    }
}
