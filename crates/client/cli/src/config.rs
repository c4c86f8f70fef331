//! CLI runtime configuration from the process environment.
use std::env;
use std::path::PathBuf;

use score_core::FailurePolicy;

/// Data directory used when neither `--data-dir` nor `SCORE_DATA_DIR` is set.
pub const DEFAULT_DATA_DIR: &str = "crates/score/content/data";

/// Settings read from the environment; command-line flags override them.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub failure_policy: Option<FailurePolicy>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCORE_DATA_DIR` - Directory holding config, tables and turns
    /// - `SCORE_FAILURE_POLICY` - `abort` or `substitute`, overriding `config.toml`
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("SCORE_DATA_DIR").ok().map(PathBuf::from),
            failure_policy: read_env::<FailurePolicy>("SCORE_FAILURE_POLICY"),
        }
    }

    /// Resolves the data directory, giving `flag` precedence.
    pub fn data_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("ignoring {}={:?}: unrecognized value", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_environment() {
        let config = CliConfig {
            data_dir: Some(PathBuf::from("/srv/stars")),
            failure_policy: None,
        };
        assert_eq!(config.data_dir(None), PathBuf::from("/srv/stars"));
        assert_eq!(
            config.data_dir(Some(PathBuf::from("./data"))),
            PathBuf::from("./data")
        );
        assert_eq!(
            CliConfig::default().data_dir(None),
            PathBuf::from(DEFAULT_DATA_DIR)
        );
    }
}
