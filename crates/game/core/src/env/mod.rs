//! Read-only level data and deterministic randomness.
//!
//! [`GridWorld`] is the immutable spatial layer of a level. Loaders hand in a
//! [`LevelDescriptor`], which is validated once into a [`Level`] before any
//! turn is played.
mod grid;
mod level;
mod rng;

pub use grid::{Cell, GridWorld};
pub use level::{GuardSpec, Level, LevelDescriptor, LevelLoadError, LootSpec};
pub use rng::{PcgRng, RngOracle, compute_seed};
