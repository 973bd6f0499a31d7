//! Per-guard state machine.
//!
//! [`update_guard`] is a pure function from the guard's current value and
//! what it can perceive this turn to the guard's next value. Rules are checked
//! in priority order and the first match wins:
//!
//! 1. Player in sight → `Chase`, step towards the player.
//! 2. Was chasing, sight lost → `Investigate` the last sighting.
//! 3. Investigation countdown spent and nothing heard → back to `Patrol`.
//! 4. Noise heard while patrolling or investigating → `Investigate` the noise.
//! 5. Still investigating → keep searching, countdown ticks down.
//! 6. Otherwise patrol the route.
//!
//! `Alert` guards are frozen; only the scheduler puts a guard in that state.

use crate::config::GameConfig;
use crate::env::{GridWorld, compute_seed};
use crate::noise::NoiseField;
use crate::state::{Guard, GuardState, Player, Position};
use crate::visibility;

use super::pathing;

/// Everything a guard perceives during its update.
#[derive(Clone, Copy, Debug)]
pub struct GuardContext<'a> {
    pub world: &'a GridWorld,
    pub player: &'a Player,
    pub noises: &'a NoiseField,
    pub config: &'a GameConfig,
    /// Turn counter of the state being advanced.
    pub turn: u64,
    /// Seed supplied with the action; mixed per guard for tie-breaks.
    pub turn_seed: u64,
}

impl GuardContext<'_> {
    fn step_seed(&self, guard: &Guard) -> u64 {
        compute_seed(self.turn_seed, self.turn, guard.id.0, 0)
    }
}

/// Evaluates one guard for one turn.
pub fn update_guard(guard: &Guard, ctx: &GuardContext<'_>) -> Guard {
    let mut next = guard.clone();
    if guard.state == GuardState::Alert {
        return next;
    }

    let grace = ctx.config.investigate_grace_turns;

    if visibility::can_see_player(ctx.world, guard.position, ctx.player, guard.vision_range) {
        next.state = GuardState::Chase;
        next.last_seen_player = Some(ctx.player.position);
        move_towards(&mut next, ctx.player.position, ctx);
    } else if guard.state == GuardState::Chase {
        let target = guard.last_seen_player.unwrap_or(guard.position);
        next.state = GuardState::Investigate {
            target,
            countdown: grace,
        };
        move_towards(&mut next, target, ctx);
    } else {
        let heard = ctx.noises.nearest(guard.position);
        match (guard.state, heard) {
            (GuardState::Investigate { countdown: 0, .. }, None) => {
                next.state = GuardState::Patrol;
                next.patrol.rejoin_nearest(guard.position);
                patrol(&mut next, ctx);
            }
            (_, Some(noise)) => {
                next.state = GuardState::Investigate {
                    target: noise,
                    countdown: grace,
                };
                move_towards(&mut next, noise, ctx);
            }
            (GuardState::Investigate { target, countdown }, None) => {
                next.state = GuardState::Investigate {
                    target,
                    countdown: countdown - 1,
                };
                move_towards(&mut next, target, ctx);
            }
            _ => patrol(&mut next, ctx),
        }
    }

    if next.state != guard.state {
        tracing::debug!(
            guard = %guard.id,
            from = %guard.state,
            to = %next.state,
            position = %next.position,
            "guard state changed"
        );
    }

    next
}

fn move_towards(guard: &mut Guard, target: Position, ctx: &GuardContext<'_>) {
    if let Some(step) = pathing::next_step(ctx.world, guard.position, target, ctx.step_seed(guard)) {
        guard.position = step;
    }
}

/// Walks to the current waypoint; on arrival, moves on to the next one.
fn patrol(guard: &mut Guard, ctx: &GuardContext<'_>) {
    let Some(waypoint) = guard.patrol.waypoint() else {
        return;
    };
    if guard.position == waypoint {
        guard.patrol.advance();
    }
    if let Some(target) = guard.patrol.waypoint() {
        move_towards(guard, target, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::LevelDescriptor;
    use crate::state::{GuardId, PatrolDirection};

    struct Fixture {
        world: GridWorld,
        player: Player,
        noises: NoiseField,
        config: GameConfig,
    }

    impl Fixture {
        fn new(player: Position) -> Self {
            let rows = ["#########", "#.......#", "#.......#", "#......E#", "#########"];
            let world = LevelDescriptor::from_rows(&rows, Position::new(1, 1), Position::new(7, 3))
                .expect("known glyphs")
                .validate()
                .expect("valid level")
                .world()
                .as_ref()
                .clone();
            Self {
                world,
                player: Player::new(player, Default::default()),
                noises: NoiseField::new(),
                config: GameConfig::default().with_investigate_grace_turns(2),
            }
        }

        fn ctx(&self) -> GuardContext<'_> {
            GuardContext {
                world: &self.world,
                player: &self.player,
                noises: &self.noises,
                config: &self.config,
                turn: 0,
                turn_seed: 9,
            }
        }
    }

    fn guard(position: Position, range: u32) -> Guard {
        Guard::new(GuardId(1), position, Vec::new(), range)
    }

    #[test]
    fn sight_triggers_chase_and_a_step() {
        let fixture = Fixture::new(Position::new(5, 1));
        let next = update_guard(&guard(Position::new(1, 1), 4), &fixture.ctx());

        assert_eq!(next.state, GuardState::Chase);
        assert_eq!(next.position, Position::new(2, 1));
        assert_eq!(next.last_seen_player, Some(Position::new(5, 1)));
        assert_eq!(next.state.investigate_target(), None);
    }

    #[test]
    fn smoke_keeps_patrolling_guard_calm() {
        let mut fixture = Fixture::new(Position::new(3, 1));
        fixture.player.in_smoke = true;

        let next = update_guard(&guard(Position::new(1, 1), 4), &fixture.ctx());
        assert_eq!(next.state, GuardState::Patrol);
        assert_eq!(next.position, Position::new(1, 1));
    }

    #[test]
    fn lost_sight_turns_chase_into_investigation() {
        let mut fixture = Fixture::new(Position::new(7, 3));
        fixture.player.in_smoke = true;

        let mut chaser = guard(Position::new(1, 1), 4).with_state(GuardState::Chase);
        chaser.last_seen_player = Some(Position::new(4, 1));

        let next = update_guard(&chaser, &fixture.ctx());
        assert_eq!(
            next.state,
            GuardState::Investigate {
                target: Position::new(4, 1),
                countdown: 2
            }
        );
        assert_eq!(next.position, Position::new(2, 1));
    }

    #[test]
    fn investigation_times_out_back_to_patrol() {
        let mut fixture = Fixture::new(Position::new(7, 3));
        fixture.player.in_smoke = true;

        let mut current = guard(Position::new(2, 2), 1).with_state(GuardState::Investigate {
            target: Position::new(2, 2),
            countdown: 2,
        });
        let mut states = Vec::new();
        for _ in 0..3 {
            current = update_guard(&current, &fixture.ctx());
            states.push(current.state);
        }

        assert_eq!(
            states,
            vec![
                GuardState::Investigate {
                    target: Position::new(2, 2),
                    countdown: 1
                },
                GuardState::Investigate {
                    target: Position::new(2, 2),
                    countdown: 0
                },
                GuardState::Patrol,
            ]
        );
        assert_eq!(current.position, Position::new(2, 2));
    }

    #[test]
    fn noise_pulls_patrol_into_investigation() {
        let mut fixture = Fixture::new(Position::new(7, 3));
        fixture.player.in_smoke = true;
        fixture.noises.emit(Position::new(4, 2), 3, 2);

        let next = update_guard(&guard(Position::new(2, 2), 1), &fixture.ctx());
        assert_eq!(
            next.state,
            GuardState::Investigate {
                target: Position::new(4, 2),
                countdown: 2
            }
        );
        assert_eq!(next.position, Position::new(3, 2));
    }

    #[test]
    fn fresh_noise_refreshes_a_spent_investigation() {
        let mut fixture = Fixture::new(Position::new(7, 3));
        fixture.player.in_smoke = true;
        fixture.noises.emit(Position::new(5, 3), 2, 2);

        let spent = guard(Position::new(4, 3), 1).with_state(GuardState::Investigate {
            target: Position::new(1, 1),
            countdown: 0,
        });
        let next = update_guard(&spent, &fixture.ctx());
        assert_eq!(
            next.state,
            GuardState::Investigate {
                target: Position::new(5, 3),
                countdown: 2
            }
        );
    }

    #[test]
    fn patrol_walks_route_and_reverses() {
        let mut fixture = Fixture::new(Position::new(7, 3));
        fixture.player.in_smoke = true;

        let path = vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
        let mut current = Guard::new(GuardId(1), Position::new(1, 2), path, 1);
        let mut trail = Vec::new();
        for _ in 0..5 {
            current = update_guard(&current, &fixture.ctx());
            trail.push(current.position.x);
        }

        assert_eq!(trail, vec![2, 3, 2, 1, 2]);
        assert_eq!(current.patrol.direction(), PatrolDirection::Forward);
    }

    #[test]
    fn alert_guards_are_frozen() {
        let fixture = Fixture::new(Position::new(2, 1));
        let frozen = guard(Position::new(1, 1), 4).with_state(GuardState::Alert);

        assert_eq!(update_guard(&frozen, &fixture.ctx()), frozen);
    }

}
