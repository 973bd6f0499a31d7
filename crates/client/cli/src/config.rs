//! Settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Defaults for command flags, taken from the environment (and `.env`).
///
/// Flags given on the command line always win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub seed: Option<u64>,
    pub level: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HEIST_SEED` - session seed (default: 0)
    /// - `HEIST_LEVEL` - level file path or bundled level name
    /// - `HEIST_CONFIG` - balance configuration TOML path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed: read_parsed(&lookup, "HEIST_SEED"),
            level: lookup("HEIST_LEVEL").filter(|value| !value.trim().is_empty()),
            config_path: lookup("HEIST_CONFIG")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn seed_or(&self, flag: Option<u64>) -> u64 {
        flag.or(self.seed).unwrap_or_default()
    }

    pub fn level_or(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.level.clone())
    }

    pub fn config_or(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.config_path.clone())
    }
}

fn read_parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> CliConfig {
        CliConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("HEIST_SEED", "42"),
            ("HEIST_LEVEL", "vault"),
            ("HEIST_CONFIG", "balance.toml"),
        ]);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.level.as_deref(), Some("vault"));
        assert_eq!(config.config_path, Some(PathBuf::from("balance.toml")));
    }

    #[test]
    fn bad_or_blank_values_are_ignored() {
        let config = config(&[("HEIST_SEED", "many"), ("HEIST_LEVEL", "  ")]);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn flags_override_environment() {
        let config = config(&[("HEIST_SEED", "42"), ("HEIST_LEVEL", "vault")]);

        assert_eq!(config.seed_or(Some(7)), 7);
        assert_eq!(config.seed_or(None), 42);
        assert_eq!(config.level_or(Some("gallery".into())).as_deref(), Some("gallery"));
        assert_eq!(CliConfig::default().seed_or(None), 0);
    }
}
