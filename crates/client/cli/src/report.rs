//! Plain-text output for finished runs.
use heist_core::{GameState, Position};
use heist_runtime::SessionStats;

/// One-line outcome of a run, printed to stdout.
pub fn summary(state: &GameState) -> String {
    format!(
        "status={} level={} turn={} score={} loot={}/{} alert={}/{} digest={}",
        state.status,
        state.level_number,
        state.turn,
        state.score,
        state.loot_collected,
        state.loot.len(),
        state.alert.value(),
        state.alert.maximum(),
        hex::encode(state.digest()),
    )
}

pub fn stats_line(stats: &SessionStats) -> String {
    format!(
        "levels_completed={} turns={} spotted={} tools_used={} total_score={}",
        stats.levels_completed,
        stats.turns_used,
        stats.times_spotted,
        stats.tools_used,
        stats.total_score,
    )
}

/// ASCII view of the grid: `@` player, `G` guards, `$` loot still on the floor.
/// Collected loot is drawn as floor.
pub fn render(state: &GameState) -> String {
    let mut grid: Vec<Vec<char>> = state
        .world
        .rows()
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();

    let mut put = |position: Position, glyph: char| {
        if let Some(cell) = usize::try_from(position.y)
            .ok()
            .zip(usize::try_from(position.x).ok())
            .and_then(|(y, x)| grid.get_mut(y)?.get_mut(x))
        {
            *cell = glyph;
        }
    };

    for loot in &state.loot {
        put(loot.position, if loot.collected { '.' } else { '$' });
    }
    for guard in &state.guards {
        put(guard.position, 'G');
    }
    put(state.player.position, '@');

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
