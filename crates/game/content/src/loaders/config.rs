//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use heist_core::GameConfig;

use crate::bundled;
use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Fields missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse config data from TOML text and check its balance values.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate().context("Invalid balance configuration")?;
        Ok(config)
    }

    /// The configuration shipped with the crate.
    pub fn bundled() -> LoadResult<GameConfig> {
        Self::parse(bundled::CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heist_core::{ToolId, ToolSpec};

    #[test]
    fn bundled_config_matches_defaults() {
        let config = ConfigLoader::bundled().expect("bundled config parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            "max_alert_meter = 60\n\n[decoy]\ncooldown = 1\ncharges = 9\n",
        )
        .expect("valid toml");

        assert_eq!(config.max_alert_meter, 60);
        assert_eq!(config.tool_spec(ToolId::Decoy), ToolSpec::new(1, 9));
        assert_eq!(config.smokebomb, GameConfig::default().smokebomb);
        assert_eq!(config.alert_decay, GameConfig::DEFAULT_ALERT_DECAY);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let error = ConfigLoader::parse("max_alert_meter = \"lots\"").expect_err("wrong type");
        assert!(error.to_string().contains("config TOML"));
    }

    #[test]
    fn unplayable_balance_is_rejected() {
        let error = ConfigLoader::parse("max_alert_meter = 0").expect_err("empty meter");
        assert!(error.to_string().contains("balance configuration"));

        let error = ConfigLoader::parse("decoy_noise_turns = 1").expect_err("inert decoy");
        assert!(format!("{error:#}").contains("decoy_noise_turns"));
    }
}
