//! Verification of recorded sessions.

use heist_core::{GameConfig, GameState, TurnScheduler};

use crate::api::{Result, SessionError};
use crate::repository::ActionLog;

/// Re-runs `log` from `initial` and returns the final state.
///
/// Fails with [`SessionError::InitialStateMismatch`] if `initial` is not the
/// state the log was recorded from, and with [`SessionError::Divergence`] at
/// the first turn whose resulting digest differs from the recorded one.
pub fn replay(initial: &GameState, config: &GameConfig, log: &ActionLog) -> Result<GameState> {
    if initial.digest() != log.initial_digest() {
        return Err(SessionError::InitialStateMismatch);
    }

    let scheduler = TurnScheduler::new(config.clone());
    let mut state = initial.clone();
    for record in log.records() {
        if record.turn != state.turn {
            return Err(SessionError::Divergence { turn: record.turn });
        }
        state = scheduler.advance(&state, &record.action, record.seed)?;
        if state.digest() != record.digest {
            tracing::warn!(turn = record.turn, "replay digest mismatch");
            return Err(SessionError::Divergence { turn: record.turn });
        }
    }

    tracing::debug!(turns = log.len(), status = %state.status, "replay verified");
    Ok(state)
}
