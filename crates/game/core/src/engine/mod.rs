//! Turn scheduling and level progression.
//!
//! [`TurnScheduler`] is the authoritative reducer for [`GameState`]: it owns
//! the balance configuration and turns `(state, action, seed)` into the next
//! state. Nothing else in the crate produces a new state.

mod errors;
mod turns;

pub use errors::{ProgressionError, TurnError};

use crate::config::GameConfig;
use crate::env::{Level, LevelDescriptor, LevelLoadError};
use crate::state::{GameState, GameStatus, Message};

/// Deterministic driver of a heist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnScheduler {
    config: GameConfig,
}

impl TurnScheduler {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validates `descriptor` and places a fresh run on it.
    pub fn start_level(&self, descriptor: LevelDescriptor) -> Result<GameState, LevelLoadError> {
        let level = descriptor.validate()?;
        Ok(self.start(&level))
    }

    /// Places a fresh run on an already validated level.
    pub fn start(&self, level: &Level) -> GameState {
        let state = GameState::new(level, &self.config);
        tracing::debug!(
            width = state.world.width(),
            height = state.world.height(),
            guards = state.guards.len(),
            loot = state.loot.len(),
            "level started"
        );
        state
    }

    /// Moves a won run onto `descriptor`.
    ///
    /// Score, loot count, alert meter and the tool belt carry over. Keycard,
    /// noise, smoke and the turn counter start afresh.
    pub fn start_next_level(
        &self,
        previous: &GameState,
        descriptor: LevelDescriptor,
    ) -> Result<GameState, ProgressionError> {
        if previous.status != GameStatus::Won {
            return Err(ProgressionError::NotWon {
                status: previous.status,
            });
        }

        let level = descriptor.validate()?;
        let mut next = GameState::new(&level, &self.config);
        next.player.tools = previous.player.tools.clone();
        next.score = previous.score;
        next.loot_collected = previous.loot_collected;
        next.alert = next.alert.with_value(previous.alert.value());
        next.level_number = previous.level_number + 1;
        next.message = Some(Message::info(format!(
            "Level {}: security tightened.",
            next.level_number
        )));

        tracing::debug!(
            level = next.level_number,
            score = next.score,
            alert = next.alert.value(),
            "advanced to next level"
        );
        Ok(next)
    }
}
