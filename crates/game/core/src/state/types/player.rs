use arrayvec::ArrayVec;

use super::common::Position;
use super::tool::{Tool, ToolId};
use crate::config::GameConfig;

/// Fixed-capacity tool belt.
pub type ToolBelt = ArrayVec<Tool, { GameConfig::MAX_TOOLS }>;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub has_keycard: bool,
    pub tools: ToolBelt,
    /// Derived each turn: true if any guard currently sees the player.
    pub is_visible: bool,
    /// Derived each turn: true while standing inside an active smoke cloud.
    pub in_smoke: bool,
}

impl Player {
    pub fn new(position: Position, tools: ToolBelt) -> Self {
        Self {
            position,
            has_keycard: false,
            tools,
            is_visible: false,
            in_smoke: false,
        }
    }

    /// Builds the starting belt with one entry per tool kind.
    pub fn starting_tools(config: &GameConfig) -> ToolBelt {
        ToolId::ALL
            .iter()
            .map(|&id| Tool::new(id, config.tool_spec(id)))
            .collect()
    }

    pub fn tool(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    pub fn tool_mut(&mut self, id: ToolId) -> Option<&mut Tool> {
        self.tools.iter_mut().find(|tool| tool.id == id)
    }
}
