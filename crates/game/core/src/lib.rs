//! Deterministic stealth simulation shared across heist front ends.
//!
//! `heist-core` defines the canonical rules of a grid heist: a static level
//! grid, guards driven by a per-guard state machine, decaying noise, the
//! player's tools and the global alert meter. The [`engine::TurnScheduler`]
//! is the only entry point that produces new [`GameState`] values; all other
//! modules are pure helpers it composes.
pub mod action;
pub mod alert;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod guard;
pub mod noise;
pub mod state;
pub mod tools;
pub mod visibility;

pub use action::{Action, CardinalDirection, MoveError, MoveOutcome};
#[cfg(feature = "serde")]
pub use action::compute_actions_root;
pub use alert::{AlertMeter, ThreatLevel};
pub use config::{ConfigError, GameConfig, ToolSpec};
pub use engine::{ProgressionError, TurnError, TurnScheduler};
pub use env::{
    Cell, GridWorld, GuardSpec, Level, LevelDescriptor, LevelLoadError, LootSpec, PcgRng,
    RngOracle, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use guard::{GuardContext, update_guard};
pub use noise::{Noise, NoiseField};
pub use state::{
    GameState, GameStatus, Guard, GuardId, GuardState, Loot, LootId, Message, MessageKind,
    PatrolDirection, PatrolRoute, Player, Position, Tool, ToolBelt, ToolId,
};
pub use tools::{SmokeField, ToolEffect, ToolError};
