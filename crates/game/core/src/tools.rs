//! Player tools: smoke, decoys and the keycard.
//!
//! A tool is usable only with a charge left and no cooldown pending. Every
//! successful use spends one charge and restarts the tool's cooldown.

use crate::config::GameConfig;
use crate::env::{PcgRng, RngOracle, compute_seed};
use crate::error::{ErrorSeverity, GameError};
use crate::noise::NoiseField;
use crate::state::{GameState, Player, Position, ToolId};

/// Reasons a tool use is rejected; the state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolError {
    #[error("{tool} is not carried")]
    ToolUnavailable { tool: ToolId },

    #[error("{tool} has no charges left")]
    NoCharges { tool: ToolId },

    #[error("{tool} is cooling down for {remaining} more turn(s)")]
    OnCooldown { tool: ToolId, remaining: u32 },

    #[error("{tool} cannot target {target}")]
    InvalidTarget { tool: ToolId, target: Position },
}

impl ToolError {
    pub fn tool(&self) -> ToolId {
        match self {
            Self::ToolUnavailable { tool }
            | Self::NoCharges { tool }
            | Self::OnCooldown { tool, .. }
            | Self::InvalidTarget { tool, .. } => *tool,
        }
    }
}

impl GameError for ToolError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ToolUnavailable { .. } | Self::InvalidTarget { .. } => ErrorSeverity::Validation,
            Self::NoCharges { .. } | Self::OnCooldown { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ToolUnavailable { .. } => "TOOL_UNAVAILABLE",
            Self::NoCharges { .. } => "TOOL_NO_CHARGES",
            Self::OnCooldown { .. } => "TOOL_ON_COOLDOWN",
            Self::InvalidTarget { .. } => "TOOL_INVALID_TARGET",
        }
    }
}

/// What a successful tool use did to the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToolEffect {
    Smoke { center: Position, radius: u32 },
    Decoy { target: Position },
    Keycard,
}

impl ToolEffect {
    pub fn describe(&self) -> String {
        match self {
            Self::Smoke { .. } => "Smoke bomb deployed!".to_string(),
            Self::Decoy { target } => format!("Decoy thrown to {target}!"),
            Self::Keycard => "Keycard activated!".to_string(),
        }
    }
}

/// Active smoke clouds. Same decay rules as noise, but a cloud hides whoever
/// stands inside it instead of attracting guards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmokeField {
    clouds: NoiseField,
}

impl SmokeField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deploy(&mut self, center: Position, radius: u32, turns: u32) {
        self.clouds.emit(center, radius, turns);
    }

    pub fn decay(&mut self) {
        self.clouds.decay();
    }

    pub fn covers(&self, position: Position) -> bool {
        self.clouds.covers(position)
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn clear(&mut self) {
        self.clouds.clear();
    }
}

/// Uses `tool` on behalf of the player.
///
/// `target` only matters for the decoy; without one the decoy lands
/// `decoy_scatter` cells away on each axis, directions rolled from `turn_seed`.
pub fn use_tool(
    state: &mut GameState,
    tool: ToolId,
    target: Option<Position>,
    turn_seed: u64,
    config: &GameConfig,
) -> Result<ToolEffect, ToolError> {
    let Some(current) = state.player.tool(tool) else {
        return Err(ToolError::ToolUnavailable { tool });
    };
    if current.charges == 0 {
        return Err(ToolError::NoCharges { tool });
    }
    if current.current_cooldown > 0 {
        return Err(ToolError::OnCooldown {
            tool,
            remaining: current.current_cooldown,
        });
    }

    let effect = match tool {
        ToolId::Smokebomb => {
            let center = state.player.position;
            state
                .smoke
                .deploy(center, config.smoke_radius, config.smoke_turns);
            state.player.in_smoke = true;
            ToolEffect::Smoke {
                center,
                radius: config.smoke_radius,
            }
        }
        ToolId::Decoy => {
            let target = match target {
                Some(target) => validate_decoy_target(state, target, config)?,
                None => scatter_decoy(state, turn_seed, config),
            };
            state
                .noises
                .emit(target, config.decoy_noise_radius, config.decoy_noise_turns);
            ToolEffect::Decoy { target }
        }
        ToolId::Keycard => {
            state.player.has_keycard = true;
            ToolEffect::Keycard
        }
    };

    if let Some(used) = state.player.tool_mut(tool) {
        used.charges -= 1;
        used.current_cooldown = used.cooldown;
    }

    Ok(effect)
}

/// Counts every carried tool's cooldown down by one turn.
pub fn tick_cooldowns(player: &mut Player) {
    for tool in player.tools.iter_mut() {
        tool.tick();
    }
}

fn validate_decoy_target(
    state: &GameState,
    target: Position,
    config: &GameConfig,
) -> Result<Position, ToolError> {
    let in_reach = target.manhattan(state.player.position) <= config.decoy_max_distance;
    let lands = state
        .world
        .cell_at(target)
        .is_some_and(|cell| !cell.blocks_sight());
    if in_reach && lands {
        Ok(target)
    } else {
        Err(ToolError::InvalidTarget {
            tool: ToolId::Decoy,
            target,
        })
    }
}

fn scatter_decoy(state: &GameState, turn_seed: u64, config: &GameConfig) -> Position {
    let scatter = config.decoy_scatter as i32;
    let roll = |context| {
        let seed = compute_seed(turn_seed, state.turn, 0, context);
        if PcgRng.coin_flip(seed) { scatter } else { -scatter }
    };
    let origin = state.player.position;
    let max_x = state.world.width() as i32 - 1;
    let max_y = state.world.height() as i32 - 1;
    Position::new(
        (origin.x + roll(1)).clamp(0, max_x),
        (origin.y + roll(2)).clamp(0, max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::LevelDescriptor;

    fn state() -> GameState {
        let rows = ["#######", "#.....#", "#.#...#", "#....E#", "#######"];
        let level = LevelDescriptor::from_rows(&rows, Position::new(1, 1), Position::new(5, 3))
            .expect("known glyphs")
            .validate()
            .expect("valid level");
        GameState::new(&level, &GameConfig::default())
    }

    #[test]
    fn smoke_hides_player_and_starts_cooldown() {
        let config = GameConfig::default();
        let mut state = state();

        let effect = use_tool(&mut state, ToolId::Smokebomb, None, 0, &config);
        assert_eq!(
            effect,
            Ok(ToolEffect::Smoke {
                center: Position::new(1, 1),
                radius: config.smoke_radius
            })
        );
        assert!(state.player.in_smoke);
        assert!(state.smoke.covers(Position::new(1, 1)));

        let smoke = state.player.tool(ToolId::Smokebomb).expect("carried");
        assert_eq!(smoke.charges, config.smokebomb.charges - 1);
        assert_eq!(smoke.current_cooldown, config.smokebomb.cooldown);

        assert_eq!(
            use_tool(&mut state, ToolId::Smokebomb, None, 0, &config),
            Err(ToolError::OnCooldown {
                tool: ToolId::Smokebomb,
                remaining: config.smokebomb.cooldown
            })
        );
    }

    #[test]
    fn empty_tool_reports_no_charges_before_cooldown() {
        let config = GameConfig::default();
        let mut state = state();
        let decoy = state.player.tool_mut(ToolId::Decoy).expect("carried");
        decoy.charges = 0;
        decoy.current_cooldown = 2;

        let before = state.clone();
        assert_eq!(
            use_tool(&mut state, ToolId::Decoy, None, 0, &config),
            Err(ToolError::NoCharges { tool: ToolId::Decoy })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn cooldowns_tick_down_to_zero() {
        let config = GameConfig::default();
        let mut state = state();
        use_tool(&mut state, ToolId::Decoy, Some(Position::new(3, 1)), 0, &config)
            .expect("decoy is ready");

        for _ in 0..config.decoy.cooldown + 2 {
            tick_cooldowns(&mut state.player);
        }
        let decoy = state.player.tool(ToolId::Decoy).expect("carried");
        assert_eq!(decoy.current_cooldown, 0);
        assert!(decoy.is_ready());
    }

    #[test]
    fn decoy_targets_must_be_open_and_in_reach() {
        let config = GameConfig::default();
        let mut state = state();

        for target in [Position::new(2, 2), Position::new(0, 0), Position::new(9, 9)] {
            assert_eq!(
                use_tool(&mut state, ToolId::Decoy, Some(target), 0, &config),
                Err(ToolError::InvalidTarget {
                    tool: ToolId::Decoy,
                    target
                })
            );
        }

        let effect = use_tool(&mut state, ToolId::Decoy, Some(Position::new(4, 2)), 0, &config);
        assert_eq!(effect, Ok(ToolEffect::Decoy { target: Position::new(4, 2) }));
        assert_eq!(state.noises.nearest(Position::new(4, 3)), Some(Position::new(4, 2)));
    }

    #[test]
    fn scattered_decoy_is_seeded_and_clamped() {
        let config = GameConfig::default();
        let mut first = state();
        let mut second = state();

        let a = use_tool(&mut first, ToolId::Decoy, None, 77, &config).expect("ready");
        let b = use_tool(&mut second, ToolId::Decoy, None, 77, &config).expect("ready");
        assert_eq!(a, b);

        let ToolEffect::Decoy { target } = a else {
            panic!("expected a decoy effect, got {a:?}");
        };
        assert!(first.world.in_bounds(target));
        assert!(target.x.abs_diff(1) <= config.decoy_scatter);
        assert!(target.y.abs_diff(1) <= config.decoy_scatter);
    }

    #[test]
    fn keycard_is_permanent() {
        let config = GameConfig::default();
        let mut state = state();
        state.player.has_keycard = false;

        assert_eq!(
            use_tool(&mut state, ToolId::Keycard, None, 0, &config),
            Ok(ToolEffect::Keycard)
        );
        assert!(state.player.has_keycard);
        assert_eq!(
            use_tool(&mut state, ToolId::Keycard, None, 0, &config),
            Err(ToolError::NoCharges { tool: ToolId::Keycard })
        );
        assert!(state.player.has_keycard);
    }

    #[test]
    fn missing_tool_is_unavailable() {
        let config = GameConfig::default();
        let mut state = state();
        state.player.tools.clear();

        assert_eq!(
            use_tool(&mut state, ToolId::Smokebomb, None, 0, &config),
            Err(ToolError::ToolUnavailable { tool: ToolId::Smokebomb })
        );
    }
}
