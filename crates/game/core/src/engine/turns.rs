//! The per-turn pipeline behind [`TurnScheduler::advance`].
//!
//! Phases run strictly in this order:
//!
//! 1. reject unless the game is playing
//! 2. apply the player action
//! 3. decay noise and smoke, tick tool cooldowns
//! 4. update guards by ascending id
//! 5. recompute player visibility and smoke cover
//! 6. fold the worst guard state into the alert meter
//! 7. resolve terminal conditions
//! 8. bump the turn counter and score collected loot

use crate::action::{self, Action};
use crate::alert::ThreatLevel;
use crate::config::GameConfig;
use crate::guard::{GuardContext, update_guard};
use crate::state::{GameState, GameStatus, GuardState, Message};
use crate::tools;
use crate::visibility;

use super::{TurnError, TurnScheduler};

/// Loot picked up during the turn being resolved.
#[derive(Clone, Copy, Debug, Default)]
struct Pickup {
    value: u32,
}

impl TurnScheduler {
    /// Resolves one turn and returns the next state.
    ///
    /// `state` is never modified; on error the caller keeps using it as-is.
    /// `seed` drives every random decision made during the turn.
    pub fn advance(
        &self,
        state: &GameState,
        action: &Action,
        seed: u64,
    ) -> Result<GameState, TurnError> {
        if state.status != GameStatus::Playing {
            return Err(TurnError::GameOver {
                status: state.status,
            });
        }

        let config = &self.config;
        let mut next = state.clone();
        let mut action_message = None;
        let mut pickup = None;

        match *action {
            Action::Move { direction } => {
                let outcome = action::apply_move(&mut next, direction, config)?;
                pickup = outcome.collected.map(|(_, value)| Pickup { value });
            }
            Action::UseTool { tool, target } => {
                let effect = tools::use_tool(&mut next, tool, target, seed, config)?;
                action_message = Some(Message::info(effect.describe()));
            }
            Action::Wait => {}
        }

        next.noises.decay();
        next.smoke.decay();
        tools::tick_cooldowns(&mut next.player);
        next.player.in_smoke = next.smoke.covers(next.player.position);

        update_guards(&mut next, config, seed);

        next.player.in_smoke = next.smoke.covers(next.player.position);
        next.player.is_visible = next.guards.iter().any(|guard| {
            visibility::can_see_player(&next.world, guard.position, &next.player, guard.vision_range)
        });

        let warning_before = state.alert.percent() >= config.alert_warning_percent;
        next.alert = next
            .alert
            .update(ThreatLevel::from_guards(&next.guards), config);

        let event_message = resolve_terminal(&mut next, config, warning_before);

        next.turn += 1;
        let loot_message = pickup.map(|Pickup { value }| {
            let points = stealth_scaled(value, &next, config);
            next.score += points;
            Message::success(format!("+{points} points!"))
        });

        if let Some(message) = event_message.or(loot_message).or(action_message) {
            next.message = Some(message);
        }

        tracing::trace!(
            turn = next.turn,
            status = %next.status,
            alert = next.alert.value(),
            visible = next.player.is_visible,
            "turn resolved"
        );

        Ok(next)
    }
}

fn update_guards(state: &mut GameState, config: &GameConfig, seed: u64) {
    let updated: Vec<_> = {
        let ctx = GuardContext {
            world: &state.world,
            player: &state.player,
            noises: &state.noises,
            config,
            turn: state.turn,
            turn_seed: seed,
        };
        state
            .guards
            .iter()
            .map(|guard| update_guard(guard, &ctx))
            .collect()
    };
    state.guards = updated;
}

/// Applies loss and win rules in priority order; returns the message they raise.
fn resolve_terminal(state: &mut GameState, config: &GameConfig, warning_before: bool) -> Option<Message> {
    let captured_by = state
        .guards
        .iter()
        .find(|guard| guard.state.is_chasing() && guard.position.touches(state.player.position))
        .map(|guard| guard.id);

    if state.alert.is_maxed() {
        state.status = GameStatus::Lost;
        escalate_chasers(state);
        return Some(Message::danger("Alert maxed! The guards have you."));
    }

    if let Some(guard) = captured_by {
        state.status = GameStatus::Lost;
        state.alert = state.alert.saturate();
        escalate_chasers(state);
        return Some(Message::danger(format!("Caught by {guard}!")));
    }

    if state.player.position == state.world.exit() {
        state.status = GameStatus::Won;
        return Some(Message::success("Level complete!"));
    }

    if !warning_before && state.alert.percent() >= config.alert_warning_percent {
        return Some(Message::warning("Alert level rising!"));
    }

    None
}

fn escalate_chasers(state: &mut GameState) {
    for guard in state.guards.iter_mut().filter(|guard| guard.state.is_chasing()) {
        guard.state = GuardState::Alert;
    }
}

/// Base value plus a bonus that shrinks as the alert meter fills.
fn stealth_scaled(value: u32, state: &GameState, config: &GameConfig) -> u64 {
    let value = u64::from(value);
    let maximum = u64::from(state.alert.maximum());
    if maximum == 0 {
        return value;
    }
    let calm = maximum - u64::from(state.alert.value());
    value + value * u64::from(config.stealth_bonus_percent) * calm / (100 * maximum)
}
