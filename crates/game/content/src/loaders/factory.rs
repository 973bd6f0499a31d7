//! Content factory for loading a campaign from a data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use heist_core::{GameConfig, LevelDescriptor};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult};

/// Loads configuration and levels from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── levels/
///     ├── tutorial.ron
///     └── vault.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory shipped inside this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `levels/<name>.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<LevelDescriptor> {
        LevelLoader::load(&self.level_path(name))
    }

    /// Names of every level file, sorted.
    pub fn level_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("levels");
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("Failed to list levels in {}", dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn level_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("levels").join(format!("{name}.ron"))
    }
}
