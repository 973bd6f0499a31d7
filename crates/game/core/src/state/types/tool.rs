use crate::config::ToolSpec;

/// Tools a player can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ToolId {
    /// Drops a cloud that hides the player from sight.
    Smokebomb,
    /// Throws a noise source that lures guards away.
    Decoy,
    /// Unlocks keycard doors for the rest of the level once activated.
    Keycard,
}

impl ToolId {
    pub const ALL: [ToolId; 3] = [ToolId::Smokebomb, ToolId::Decoy, ToolId::Keycard];
}

/// Cooldown and charge bookkeeping for a carried tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tool {
    pub id: ToolId,
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub charges: u32,
    pub max_charges: u32,
}

impl Tool {
    pub fn new(id: ToolId, spec: ToolSpec) -> Self {
        Self {
            id,
            cooldown: spec.cooldown,
            current_cooldown: 0,
            charges: spec.charges,
            max_charges: spec.charges,
        }
    }

    /// A tool is usable only with a charge left and no cooldown pending.
    pub fn is_ready(&self) -> bool {
        self.charges > 0 && self.current_cooldown == 0
    }

    pub fn tick(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}
