//! Scoring configuration loader.

use std::path::Path;

use score_core::ScoreConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for scoring configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`ScoreConfig`] from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<ScoreConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScoreConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_core::FailurePolicy;

    #[test]
    fn missing_keys_take_defaults() {
        let config = ConfigLoader::parse("failure_policy = \"substitute\"\n").unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::Substitute);
        assert!(config.validate_state);

        assert_eq!(ConfigLoader::parse("").unwrap(), ScoreConfig::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(ConfigLoader::parse("failure_policy = \"retry\"\n").is_err());
    }
}
