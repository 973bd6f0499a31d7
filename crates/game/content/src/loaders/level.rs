//! Level data loader.
//!
//! A level file lists the grid as glyph rows (see [`heist_core::Cell`]) plus
//! the player start, the exit and the guard and loot placements:
//!
//! ```ron
//! (
//!     name: "Corridor",
//!     difficulty: 1,
//!     rows: ["#####", "#..E#", "#####"],
//!     player_start: (1, 1),
//!     exit: (3, 1),
//!     guards: [(id: 1, position: (2, 1), patrol: [], vision_range: 2)],
//!     loot: [],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use heist_core::{GuardSpec, LevelDescriptor, LootSpec, Position};
use serde::{Deserialize, Serialize};

use crate::bundled;
use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GuardRon {
    id: u32,
    position: (i32, i32),
    #[serde(default)]
    patrol: Vec<(i32, i32)>,
    vision_range: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LootRon {
    id: u32,
    position: (i32, i32),
    value: u32,
}

/// A level as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub name: String,
    #[serde(default)]
    pub difficulty: u32,
    rows: Vec<String>,
    player_start: (i32, i32),
    exit: (i32, i32),
    #[serde(default)]
    guards: Vec<GuardRon>,
    #[serde(default)]
    loot: Vec<LootRon>,
}

impl LevelFile {
    /// Converts the file into a descriptor ready for validation.
    pub fn into_descriptor(self) -> LoadResult<LevelDescriptor> {
        let Self {
            name,
            difficulty,
            rows,
            player_start,
            exit,
            guards,
            loot,
        } = self;

        let mut descriptor = LevelDescriptor::from_rows(&rows, point(player_start), point(exit))
            .with_context(|| format!("Level '{name}' has an invalid grid"))?
            .with_difficulty(difficulty);

        for guard in guards {
            descriptor = descriptor.with_guard(
                GuardSpec::new(guard.id, point(guard.position), guard.vision_range)
                    .with_patrol(guard.patrol.into_iter().map(point).collect()),
            );
        }
        for item in loot {
            descriptor =
                descriptor.with_loot(LootSpec::new(item.id, point(item.position), item.value));
        }

        Ok(descriptor)
    }
}

fn point((x, y): (i32, i32)) -> Position {
    Position::new(x, y)
}

/// Loader for level data from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    pub fn load(path: &Path) -> LoadResult<LevelDescriptor> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse a level from RON text.
    pub fn parse(content: &str) -> LoadResult<LevelDescriptor> {
        Self::parse_file(content)?.into_descriptor()
    }

    /// Parse RON text without converting it, keeping the level's name.
    pub fn parse_file(content: &str) -> LoadResult<LevelFile> {
        ron::from_str(content).context("Failed to parse level RON")
    }

    /// The bundled tutorial level.
    pub fn tutorial() -> LoadResult<LevelDescriptor> {
        Self::parse(bundled::TUTORIAL)
    }

    /// A bundled level by name (see [`bundled::LEVELS`]).
    pub fn bundled(name: &str) -> LoadResult<LevelDescriptor> {
        let source = bundled::level(name)
            .with_context(|| format!("No bundled level named '{name}'"))?;
        Self::parse(source).with_context(|| format!("in bundled level '{name}'"))
    }
}
