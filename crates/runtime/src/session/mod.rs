//! Stateful driver around the turn scheduler.
mod stats;

pub use stats::SessionStats;

use heist_core::{
    Action, GameConfig, GameState, GameStatus, LevelDescriptor, TurnScheduler, compute_seed,
};

use crate::api::Result;
use crate::repository::{ActionLog, ActionRecord};

/// A run in progress: current state, per-level action log and statistics.
///
/// Turn seeds are derived from the session seed, so a session created with the
/// same seed and fed the same actions reproduces every state exactly.
#[derive(Debug, Clone)]
pub struct Session {
    scheduler: TurnScheduler,
    seed: u64,
    initial: GameState,
    state: GameState,
    log: ActionLog,
    stats: SessionStats,
}

impl Session {
    /// Validates `descriptor` and starts a run on it.
    pub fn new(descriptor: LevelDescriptor, config: GameConfig, seed: u64) -> Result<Self> {
        let scheduler = TurnScheduler::new(config);
        let state = scheduler.start_level(descriptor)?;
        Ok(Self::from_state(scheduler, state, seed))
    }

    /// Resumes from an arbitrary state, e.g. one with a pre-filled alert meter.
    pub fn from_state(scheduler: TurnScheduler, state: GameState, seed: u64) -> Self {
        tracing::info!(
            level = state.level_number,
            guards = state.guards.len(),
            seed,
            "session started"
        );
        Self {
            scheduler,
            seed,
            log: ActionLog::new(&state),
            initial: state.clone(),
            state,
            stats: SessionStats::default(),
        }
    }

    /// Resolves one turn. Rejected actions leave the session untouched.
    pub fn submit(&mut self, action: Action) -> Result<&GameState> {
        let seed = self.turn_seed();
        let next = match self.scheduler.advance(&self.state, &action, seed) {
            Ok(next) => next,
            Err(error) => {
                tracing::warn!(turn = self.state.turn, ?action, %error, "action rejected");
                return Err(error.into());
            }
        };

        self.stats.record_turn(&self.state, &action, &next);
        self.log.push(ActionRecord {
            turn: self.state.turn,
            action,
            seed,
            digest: next.digest(),
        });

        tracing::debug!(
            turn = next.turn,
            status = %next.status,
            alert = next.alert.value(),
            score = next.score,
            "turn accepted"
        );
        if next.status.is_terminal() {
            tracing::info!(
                level = next.level_number,
                status = %next.status,
                turns = next.turn,
                score = next.score,
                "level finished"
            );
        }

        self.state = next;
        Ok(&self.state)
    }

    /// Flips between playing and paused; finished levels are unaffected.
    pub fn toggle_pause(&mut self) -> GameStatus {
        let status = self.state.toggle_pause();
        tracing::debug!(%status, "pause toggled");
        status
    }

    /// Moves a won run onto the next level and starts a fresh action log.
    pub fn next_level(&mut self, descriptor: LevelDescriptor) -> Result<&GameState> {
        let next = self.scheduler.start_next_level(&self.state, descriptor)?;
        tracing::info!(
            level = next.level_number,
            score = next.score,
            alert = next.alert.value(),
            "next level started"
        );

        self.log = ActionLog::new(&next);
        self.initial = next.clone();
        self.state = next;
        Ok(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// State the current action log starts from.
    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    pub fn config(&self) -> &GameConfig {
        self.scheduler.config()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn turn_seed(&self) -> u64 {
        compute_seed(self.seed, self.state.turn, self.state.level_number, 0)
    }
}
