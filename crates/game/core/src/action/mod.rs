//! Player actions accepted by the turn scheduler.
//!
//! An [`Action`] describes one discrete player intent. Applying it is the first
//! step of every turn; everything after (noise decay, guards, alert meter) is
//! driven by the scheduler regardless of which action was taken.
mod movement;
mod root;

pub use movement::{CardinalDirection, MoveError, MoveOutcome};
#[cfg(feature = "serde")]
pub use root::compute_actions_root;

pub(crate) use movement::apply_move;

use crate::state::{Position, ToolId};

/// One player intent per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Step one cell in `direction`.
    Move { direction: CardinalDirection },
    /// Activate a carried tool. `target` is only meaningful for decoys.
    UseTool {
        tool: ToolId,
        target: Option<Position>,
    },
    /// Stand still for a turn.
    Wait,
}

impl Action {
    pub fn step(direction: CardinalDirection) -> Self {
        Self::Move { direction }
    }

    pub fn tool(tool: ToolId) -> Self {
        Self::UseTool { tool, target: None }
    }

    pub fn decoy_at(target: Position) -> Self {
        Self::UseTool {
            tool: ToolId::Decoy,
            target: Some(target),
        }
    }

    pub fn is_tool_use(&self) -> bool {
        matches!(self, Self::UseTool { .. })
    }
}
