//! Data-driven heist content and loaders.
//!
//! This crate houses the bundled levels and balance configuration and provides
//! loaders for RON/TOML data files:
//! - Level layouts with guard and loot placement (RON)
//! - Balance configuration (TOML)
//!
//! Loaders produce [`heist_core::LevelDescriptor`] and [`heist_core::GameConfig`]
//! values; validation happens in the core when a level starts.

pub mod bundled;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelFile, LevelLoader, LoadResult};
