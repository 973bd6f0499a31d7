//! Decaying sound events guards can hear without line of sight.

use crate::state::Position;

/// A transient sound with a Manhattan `radius`, alive for `turns_remaining` more decays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Noise {
    pub position: Position,
    pub radius: u32,
    pub turns_remaining: u32,
}

impl Noise {
    pub fn new(position: Position, radius: u32, turns_remaining: u32) -> Self {
        Self {
            position,
            radius,
            turns_remaining,
        }
    }

    /// True when `listener` is within the noise's own radius.
    pub fn reaches(&self, listener: Position) -> bool {
        self.position.manhattan(listener) <= self.radius
    }
}

/// Multiset of active noises; entries have no identity beyond their slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseField {
    noises: Vec<Noise>,
}

impl NoiseField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a noise. A zero-turn noise would never be heard and is dropped.
    pub fn emit(&mut self, position: Position, radius: u32, turns: u32) {
        if turns == 0 {
            return;
        }
        self.noises.push(Noise::new(position, radius, turns));
    }

    /// Ages every noise by one turn and drops the ones that reach zero.
    pub fn decay(&mut self) {
        for noise in &mut self.noises {
            noise.turns_remaining -= 1;
        }
        self.noises.retain(|noise| noise.turns_remaining > 0);
    }

    /// Closest active noise whose radius reaches `listener`.
    ///
    /// Ties keep emission order, so the older noise wins.
    pub fn nearest(&self, listener: Position) -> Option<Position> {
        self.noises
            .iter()
            .filter(|noise| noise.reaches(listener))
            .min_by_key(|noise| noise.position.manhattan(listener))
            .map(|noise| noise.position)
    }

    /// True if any active noise covers `position`.
    pub fn covers(&self, position: Position) -> bool {
        self.noises.iter().any(|noise| noise.reaches(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Noise> {
        self.noises.iter()
    }

    pub fn len(&self) -> usize {
        self.noises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.noises.is_empty()
    }

    pub fn clear(&mut self) {
        self.noises.clear();
    }
}
