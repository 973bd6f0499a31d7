//! Breadth-first shortest-path steps over passable cells.
//!
//! Paths are recomputed every call; targets move between turns, so nothing is
//! cached.

use std::collections::VecDeque;

use crate::env::{GridWorld, PcgRng, RngOracle};
use crate::state::Position;

/// Length of the shortest 4-connected path from `from` to `to`.
pub fn distance(world: &GridWorld, from: Position, to: Position, has_keycard: bool) -> Option<u32> {
    let index = world.index(from)?;
    distance_field(world, to, from, has_keycard)[index]
}

/// First cell of a shortest guard path from `from` towards `to`.
///
/// Guards open keycard doors. When several neighbours start an equally short
/// path, `seed` picks one. Returns `None` when already at the target or when
/// the target cannot be reached.
pub fn next_step(world: &GridWorld, from: Position, to: Position, seed: u64) -> Option<Position> {
    if from == to {
        return None;
    }

    let field = distance_field(world, to, from, true);
    let here = field[world.index(from)?]?;

    // The target itself may be impassable (a decoy thrown at a wall); never step into it.
    let candidates: Vec<Position> = world
        .neighbors(from)
        .filter(|next| world.is_passable(*next, true))
        .filter(|next| {
            world
                .index(*next)
                .and_then(|index| field[index])
                .is_some_and(|distance| distance + 1 == here)
        })
        .collect();

    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        len => Some(candidates[PcgRng.pick(seed, len)]),
    }
}

/// BFS distances from `origin`, stopping once `until` has been reached.
///
/// Every cell on the layer before `until` is already labelled at that point,
/// which is all [`next_step`] needs.
fn distance_field(
    world: &GridWorld,
    origin: Position,
    until: Position,
    has_keycard: bool,
) -> Vec<Option<u32>> {
    let mut field = vec![None; world.cell_count()];
    let Some(start) = world.index(origin) else {
        return field;
    };

    field[start] = Some(0);
    let mut frontier = VecDeque::from([(origin, 0_u32)]);
    while let Some((cell, distance)) = frontier.pop_front() {
        if cell == until {
            break;
        }
        for next in world.neighbors(cell) {
            let Some(index) = world.index(next) else {
                continue;
            };
            if field[index].is_some() || !world.is_passable(next, has_keycard) {
                continue;
            }
            field[index] = Some(distance + 1);
            frontier.push_back((next, distance + 1));
        }
    }

    field
}
