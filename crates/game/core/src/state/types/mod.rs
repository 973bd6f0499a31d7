mod common;
mod guard;
mod loot;
mod player;
mod status;
mod tool;

pub use common::{GuardId, LootId, Position};
pub use guard::{Guard, GuardState, PatrolDirection, PatrolRoute};
pub use loot::Loot;
pub use player::{Player, ToolBelt};
pub use status::{GameStatus, Message, MessageKind};
pub use tool::{Tool, ToolId};
