use crate::error::{ErrorSeverity, GameError};
use crate::state::ToolId;

/// Balance values the simulation cannot run with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_alert_meter must be at least 1")]
    ZeroAlertMeter,

    #[error("alert_warning_percent {percent} exceeds 100")]
    WarningPercent { percent: u32 },

    /// An effect lasting one turn decays before any guard update sees it.
    /// Zero disables the effect; otherwise at least two turns are needed.
    #[error("{field} = 1 expires before guards react; use 0 or at least 2")]
    EffectExpiresUnheard { field: &'static str },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroAlertMeter => "CONFIG_ZERO_ALERT_METER",
            Self::WarningPercent { .. } => "CONFIG_WARNING_PERCENT",
            Self::EffectExpiresUnheard { .. } => "CONFIG_EFFECT_TOO_SHORT",
        }
    }
}

/// Starting cooldown and charge allotment for one tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolSpec {
    /// Turns the tool stays unavailable after a successful use.
    pub cooldown: u32,
    /// Charges the player starts a run with.
    pub charges: u32,
}

impl ToolSpec {
    pub const fn new(cooldown: u32, charges: u32) -> Self {
        Self { cooldown, charges }
    }
}

/// Game configuration constants and tunable balance parameters.
///
/// Every rate the simulation uses lives here so replays and tests can inject
/// their own values. Missing fields fall back to [`GameConfig::default`] when
/// deserialized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    /// Upper bound of the alert meter; reaching it loses the level.
    pub max_alert_meter: u32,
    /// Meter increase for a turn in which any guard is chasing.
    pub chase_alert_increment: u32,
    /// Meter increase for a turn in which the worst guard is investigating.
    pub investigate_alert_increment: u32,
    /// Meter decrease for a turn with every guard on patrol.
    pub alert_decay: u32,
    /// Percentage of the meter that triggers a one-off warning message.
    pub alert_warning_percent: u32,

    /// Turns an investigating guard searches before returning to patrol.
    pub investigate_grace_turns: u32,

    pub footstep_noise_radius: u32,
    pub footstep_noise_turns: u32,

    /// Manhattan radius of a smoke cloud around its centre.
    pub smoke_radius: u32,
    /// Lifetime of a smoke cloud, including the decay of the turn it is deployed.
    pub smoke_turns: u32,

    pub decoy_noise_radius: u32,
    pub decoy_noise_turns: u32,
    /// Maximum Manhattan distance between the player and an explicit decoy target.
    pub decoy_max_distance: u32,
    /// Per-axis offset used when a decoy is thrown without a target.
    pub decoy_scatter: u32,

    /// Extra loot value, in percent, granted when the alert meter is empty.
    /// Scales linearly down to zero at a full meter.
    pub stealth_bonus_percent: u32,

    pub smokebomb: ToolSpec,
    pub decoy: ToolSpec,
    pub keycard: ToolSpec,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of distinct tools a player can carry.
    pub const MAX_TOOLS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ALERT_METER: u32 = 100;
    pub const DEFAULT_CHASE_ALERT_INCREMENT: u32 = 20;
    pub const DEFAULT_INVESTIGATE_ALERT_INCREMENT: u32 = 5;
    pub const DEFAULT_ALERT_DECAY: u32 = 2;
    pub const DEFAULT_ALERT_WARNING_PERCENT: u32 = 50;
    pub const DEFAULT_INVESTIGATE_GRACE_TURNS: u32 = 4;

    pub fn new() -> Self {
        Self {
            max_alert_meter: Self::DEFAULT_MAX_ALERT_METER,
            chase_alert_increment: Self::DEFAULT_CHASE_ALERT_INCREMENT,
            investigate_alert_increment: Self::DEFAULT_INVESTIGATE_ALERT_INCREMENT,
            alert_decay: Self::DEFAULT_ALERT_DECAY,
            alert_warning_percent: Self::DEFAULT_ALERT_WARNING_PERCENT,
            investigate_grace_turns: Self::DEFAULT_INVESTIGATE_GRACE_TURNS,
            footstep_noise_radius: 2,
            footstep_noise_turns: 2,
            smoke_radius: 1,
            smoke_turns: 4,
            decoy_noise_radius: 4,
            decoy_noise_turns: 3,
            decoy_max_distance: 6,
            decoy_scatter: 3,
            stealth_bonus_percent: 50,
            smokebomb: ToolSpec::new(5, 2),
            decoy: ToolSpec::new(4, 3),
            keycard: ToolSpec::new(0, 1),
        }
    }

    /// Returns the starting allotment for `tool`.
    pub fn tool_spec(&self, tool: ToolId) -> ToolSpec {
        match tool {
            ToolId::Smokebomb => self.smokebomb,
            ToolId::Decoy => self.decoy,
            ToolId::Keycard => self.keycard,
        }
    }

    /// Rejects values that make a level unplayable or an effect inert.
    ///
    /// Noise and smoke decay in the turn they are created, so a lifetime of
    /// one never reaches a guard update.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_alert_meter == 0 {
            return Err(ConfigError::ZeroAlertMeter);
        }
        if self.alert_warning_percent > 100 {
            return Err(ConfigError::WarningPercent {
                percent: self.alert_warning_percent,
            });
        }
        let lifetimes = [
            ("footstep_noise_turns", self.footstep_noise_turns),
            ("smoke_turns", self.smoke_turns),
            ("decoy_noise_turns", self.decoy_noise_turns),
        ];
        match lifetimes.into_iter().find(|(_, turns)| *turns == 1) {
            Some((field, _)) => Err(ConfigError::EffectExpiresUnheard { field }),
            None => Ok(()),
        }
    }

    pub fn with_max_alert_meter(mut self, max_alert_meter: u32) -> Self {
        self.max_alert_meter = max_alert_meter;
        self
    }

    pub fn with_investigate_grace_turns(mut self, turns: u32) -> Self {
        self.investigate_grace_turns = turns;
        self
    }

    pub fn with_tool(mut self, tool: ToolId, spec: ToolSpec) -> Self {
        match tool {
            ToolId::Smokebomb => self.smokebomb = spec,
            ToolId::Decoy => self.decoy = spec,
            ToolId::Keycard => self.keycard = spec,
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
