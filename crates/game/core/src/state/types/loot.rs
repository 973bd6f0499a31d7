use super::common::{LootId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    pub id: LootId,
    pub position: Position,
    pub value: u32,
    /// Flips to true exactly once, when the player steps on the cell.
    pub collected: bool,
}

impl Loot {
    pub fn new(id: LootId, position: Position, value: u32) -> Self {
        Self {
            id,
            position,
            value,
            collected: false,
        }
    }
}
