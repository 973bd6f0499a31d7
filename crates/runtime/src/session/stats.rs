use heist_core::{Action, GameState, GameStatus};
use serde::{Deserialize, Serialize};

/// Aggregate numbers for a run, across levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub levels_completed: u32,
    /// Score of the run so far; carried over between levels.
    pub total_score: u64,
    pub loot_collected: u32,
    /// Accepted turns across all levels.
    pub turns_used: u64,
    /// Turns that ended with at least one guard seeing the player.
    pub times_spotted: u32,
    pub tools_used: u32,
}

impl SessionStats {
    pub(crate) fn record_turn(&mut self, before: &GameState, action: &Action, after: &GameState) {
        self.turns_used += 1;
        if action.is_tool_use() {
            self.tools_used += 1;
        }
        if after.player.is_visible {
            self.times_spotted += 1;
        }
        if before.status != GameStatus::Won && after.status == GameStatus::Won {
            self.levels_completed += 1;
        }
        self.total_score = after.score;
        self.loot_collected = after.loot_collected;
    }
}
