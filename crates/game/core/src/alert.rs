//! Global detection accumulator.
//!
//! The meter is a plain value carried inside [`GameState`](crate::GameState);
//! every turn folds the worst guard state present into it.

use crate::config::GameConfig;
use crate::state::{Guard, GuardState};

/// Worst guard state observed during a turn.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ThreatLevel {
    #[default]
    Calm,
    Suspicious,
    Hunting,
}

impl ThreatLevel {
    pub fn of(state: &GuardState) -> Self {
        match state {
            GuardState::Patrol => Self::Calm,
            GuardState::Investigate { .. } => Self::Suspicious,
            GuardState::Chase | GuardState::Alert => Self::Hunting,
        }
    }

    pub fn from_guards<'a>(guards: impl IntoIterator<Item = &'a Guard>) -> Self {
        guards
            .into_iter()
            .map(|guard| Self::of(&guard.state))
            .max()
            .unwrap_or_default()
    }
}

/// Bounded scalar in `0..=maximum`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertMeter {
    value: u32,
    maximum: u32,
}

impl AlertMeter {
    pub fn new(maximum: u32) -> Self {
        Self { value: 0, maximum }
    }

    /// Starts from an arbitrary value, clamped to the maximum.
    pub fn with_value(mut self, value: u32) -> Self {
        self.value = value.min(self.maximum);
        self
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_maxed(&self) -> bool {
        self.value >= self.maximum
    }

    /// Fill level in whole percent.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 100;
        }
        (u64::from(self.value) * 100 / u64::from(self.maximum)) as u32
    }

    /// Applies one turn of threat and returns the new meter.
    pub fn update(self, threat: ThreatLevel, config: &GameConfig) -> Self {
        let value = match threat {
            ThreatLevel::Hunting => self.value.saturating_add(config.chase_alert_increment),
            ThreatLevel::Suspicious => self
                .value
                .saturating_add(config.investigate_alert_increment),
            ThreatLevel::Calm => self.value.saturating_sub(config.alert_decay),
        };
        Self {
            value: value.min(self.maximum),
            ..self
        }
    }

    /// Forces the meter to its maximum.
    pub fn saturate(self) -> Self {
        Self {
            value: self.maximum,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GuardId, Position};

    #[test]
    fn worst_guard_state_wins() {
        let calm = Guard::new(GuardId(1), Position::ORIGIN, Vec::new(), 3);
        let curious = calm.clone().with_state(GuardState::Investigate {
            target: Position::ORIGIN,
            countdown: 2,
        });
        let chasing = calm.clone().with_state(GuardState::Chase);

        assert_eq!(ThreatLevel::from_guards([] as [&Guard; 0]), ThreatLevel::Calm);
        assert_eq!(ThreatLevel::from_guards([&calm]), ThreatLevel::Calm);
        assert_eq!(ThreatLevel::from_guards([&calm, &curious]), ThreatLevel::Suspicious);
        assert_eq!(
            ThreatLevel::from_guards(&vec![curious, chasing, calm]),
            ThreatLevel::Hunting
        );
    }

    #[test]
    fn meter_stays_within_bounds() {
        let config = GameConfig::default();
        let mut meter = AlertMeter::new(config.max_alert_meter);

        meter = meter.update(ThreatLevel::Calm, &config);
        assert_eq!(meter.value(), 0);

        for _ in 0..10 {
            meter = meter.update(ThreatLevel::Hunting, &config);
            assert!(meter.value() <= meter.maximum());
        }
        assert!(meter.is_maxed());
        assert_eq!(meter.percent(), 100);
    }

    #[test]
    fn suspicion_rises_slower_than_a_chase() {
        let config = GameConfig::default();
        let meter = AlertMeter::new(100).with_value(10);

        assert_eq!(meter.update(ThreatLevel::Suspicious, &config).value(), 15);
        assert_eq!(meter.update(ThreatLevel::Hunting, &config).value(), 30);
        assert_eq!(meter.update(ThreatLevel::Calm, &config).value(), 8);
    }

    #[test]
    fn one_below_max_plus_chase_is_maxed() {
        let config = GameConfig::default();
        let meter = AlertMeter::new(100).with_value(99);

        assert!(meter.update(ThreatLevel::Hunting, &config).is_maxed());
        assert_eq!(AlertMeter::new(10).with_value(50).value(), 10);
        assert_eq!(AlertMeter::new(10).saturate().value(), 10);
    }
}
