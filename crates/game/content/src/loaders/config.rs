//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration bundled with the crate.
    pub fn embedded() -> LoadResult<GameConfig> {
        Self::parse(include_str!("../../data/config.toml"))
            .context("Failed to load embedded config")
    }

    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate TOML config data.
    pub fn parse(source: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate().context("Config values are not playable")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = ConfigLoader::embedded().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heal_amount = 25").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.heal_amount, 25);
        assert_eq!(config.starting_health, GameConfig::DEFAULT_STARTING_HEALTH);
    }

    #[test]
    fn rejects_heal_amount_that_hurts() {
        let error = ConfigLoader::parse("heal_amount = -50").unwrap_err();

        assert_eq!(
            error.root_cause().to_string(),
            game_core::ContentError::NonPositiveHealAmount { amount: -50 }.to_string()
        );
        assert!(ConfigLoader::parse("heal_amount = 0").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ConfigLoader::load(Path::new("/nonexistent/quest.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/quest.toml"));
    }
}
