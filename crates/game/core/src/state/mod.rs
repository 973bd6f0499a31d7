//! Authoritative game state representation.
//!
//! [`GameState`] is the single root aggregate of a level in progress. Callers
//! only read it; the [`TurnScheduler`](crate::TurnScheduler) derives each next
//! value from the previous one.
pub mod types;

use std::sync::Arc;

use crate::alert::AlertMeter;
use crate::config::GameConfig;
use crate::env::{Cell, GridWorld, Level};
use crate::noise::NoiseField;
use crate::tools::SmokeField;
use crate::visibility;

pub use types::{
    GameStatus, Guard, GuardId, GuardState, Loot, LootId, Message, MessageKind, PatrolDirection,
    PatrolRoute, Player, Position, Tool, ToolBelt, ToolId,
};

/// Canonical snapshot of a level in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Static level data, shared between successive states.
    pub world: Arc<GridWorld>,
    pub player: Player,
    /// Ordered by id; this is also the update order.
    pub guards: Vec<Guard>,
    pub loot: Vec<Loot>,
    pub noises: NoiseField,
    pub smoke: SmokeField,
    pub alert: AlertMeter,
    /// Number of accepted turns since the level started.
    pub turn: u64,
    pub status: GameStatus,
    pub score: u64,
    /// Loot picked up across all levels of a run.
    pub loot_collected: u32,
    /// 1-based index of the level within a run.
    pub level_number: u32,
    pub message: Option<Message>,
}

impl GameState {
    /// Places the player, guards and loot of a validated level.
    ///
    /// Levels without keycard doors hand out the keycard right away.
    pub fn new(level: &Level, config: &GameConfig) -> Self {
        let world = Arc::clone(level.world());

        let mut player = Player::new(world.player_start(), Player::starting_tools(config));
        player.has_keycard = world.cells_of(Cell::KeycardDoor).next().is_none();

        let guards = level
            .guards()
            .iter()
            .map(|spec| {
                Guard::new(
                    spec.id,
                    spec.position,
                    spec.patrol_path.clone(),
                    spec.vision_range,
                )
            })
            .collect();
        let loot = level
            .loot()
            .iter()
            .map(|spec| Loot::new(spec.id, spec.position, spec.value))
            .collect();

        Self {
            world,
            player,
            guards,
            loot,
            noises: NoiseField::new(),
            smoke: SmokeField::new(),
            alert: AlertMeter::new(config.max_alert_meter),
            turn: 0,
            status: GameStatus::Playing,
            score: 0,
            loot_collected: 0,
            level_number: 1,
            message: None,
        }
    }

    /// Flips between playing and paused. Finished levels stay finished.
    pub fn toggle_pause(&mut self) -> GameStatus {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            finished => finished,
        };
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn guard(&self, id: GuardId) -> Option<&Guard> {
        self.guards.iter().find(|guard| guard.id == id)
    }

    pub fn alert_level(&self) -> u32 {
        self.alert.value()
    }

    /// Cells currently inside the vision cone of guard `id`.
    pub fn visible_cells(&self, id: GuardId) -> Option<Vec<Position>> {
        let guard = self.guard(id)?;
        Some(visibility::visible_cells(
            &self.world,
            guard.position,
            guard.vision_range,
        ))
    }

    pub fn remaining_loot(&self) -> impl Iterator<Item = &Loot> {
        self.loot.iter().filter(|loot| !loot.collected)
    }

    /// SHA-256 over the bincode encoding of the whole state.
    ///
    /// Bit-identical states share a digest, which is what replays compare.
    ///
    /// Encoding into memory is infallible here: bincode only errors on
    /// sequences of unknown length or on a `Serialize` impl that reports an
    /// error, and every type in the state uses derived impls over fixed
    /// fields, `Vec`s and `ArrayVec`s.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}
