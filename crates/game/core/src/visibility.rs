//! Line-of-sight between grid cells.
//!
//! Range uses the Euclidean metric; the trace walks every cell a straight line
//! between the two cell centres passes through and fails on the first wall.
//! The endpoints themselves never block.

use crate::env::GridWorld;
use crate::state::{Player, Position};

/// True if `observer` sees `target` within `range` cells.
pub fn can_see(world: &GridWorld, observer: Position, target: Position, range: u32) -> bool {
    let range = u64::from(range);
    if observer.distance_squared(target) > range * range {
        return false;
    }
    line_of_sight(world, observer, target)
}

/// Player-aware sight check: smoke hides the player before any geometry runs.
pub fn can_see_player(world: &GridWorld, observer: Position, player: &Player, range: u32) -> bool {
    if player.in_smoke {
        return false;
    }
    can_see(world, observer, player.position, range)
}

/// True if no intermediate cell between `from` and `to` blocks sight.
pub fn line_of_sight(world: &GridWorld, from: Position, to: Position) -> bool {
    let trace = trace(from, to);
    let intermediate = trace.len().saturating_sub(1);
    trace
        .iter()
        .take(intermediate)
        .skip(1)
        .all(|cell| !world.blocks_sight(*cell))
}

/// Every in-range cell `observer` has line of sight to, in row-major order.
///
/// The scan covers the range box clipped to the grid, so ranges wider than the
/// level cost no more than the level itself.
pub fn visible_cells(world: &GridWorld, observer: Position, range: u32) -> Vec<Position> {
    let reach = i64::from(range);
    let span = |centre: i32, extent: u32| {
        let low = (i64::from(centre) - reach).max(0);
        let high = (i64::from(centre) + reach).min(i64::from(extent) - 1);
        low..=high
    };

    let mut cells = Vec::new();
    for y in span(observer.y, world.height()) {
        for x in span(observer.x, world.width()) {
            // Both coordinates lie inside the grid, whose sides fit in i32.
            let target = Position::new(x as i32, y as i32);
            if can_see(world, observer, target, range) {
                cells.push(target);
            }
        }
    }
    cells
}

/// Grid traversal from `from` to `to`, both inclusive.
///
/// Steps one axis at a time, choosing whichever boundary the ideal line
/// crosses first; a line through an exact corner moves diagonally.
fn trace(from: Position, to: Position) -> Vec<Position> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    let (nx, ny) = (dx.abs(), dy.abs());
    let (sx, sy) = (dx.signum() as i32, dy.signum() as i32);

    let mut cells = Vec::with_capacity((nx + ny + 1) as usize);
    let mut current = from;
    cells.push(current);

    let (mut ix, mut iy) = (0_i64, 0_i64);
    while ix < nx || iy < ny {
        let decision = (1 + 2 * ix) * ny - (1 + 2 * iy) * nx;
        if decision == 0 {
            current = current.offset(sx, sy);
            ix += 1;
            iy += 1;
        } else if decision < 0 {
            current = current.offset(sx, 0);
            ix += 1;
        } else {
            current = current.offset(0, sy);
            iy += 1;
        }
        cells.push(current);
    }

    cells
}
