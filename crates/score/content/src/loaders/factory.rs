//! Content factory for building scoring inputs from data files.

use std::path::{Path, PathBuf};

use score_core::{
    HullsSnapshot, OracleSnapshot, OrbitalCapacityTable, PartsSnapshot, RulesSnapshot,
    ScoreConfig, TurnState,
};

use crate::loaders::{ConfigLoader, HullLoader, LoadResult, PartLoader, TablesLoader, TurnLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── hulls.ron
/// ├── parts.ron
/// ├── orbital.ron
/// ├── rules.ron      (optional)
/// └── turns/
///     └── sample.ron
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

    /// Load scoring configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ScoreConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the hull catalog from `hulls.ron`.
    pub fn load_hulls(&self) -> LoadResult<HullsSnapshot> {
        HullLoader::load(&self.data_dir.join("hulls.ron"))
    }

    /// Load the part catalog from `parts.ron`.
    pub fn load_parts(&self) -> LoadResult<PartsSnapshot> {
        PartLoader::load(&self.data_dir.join("parts.ron"))
    }

    /// Load the orbital capacity table from `orbital.ron`.
    pub fn load_orbital(&self) -> LoadResult<OrbitalCapacityTable> {
        TablesLoader::load_orbital(&self.data_dir.join("orbital.ron"))
    }

    /// Load movement rules from `rules.ron`, or the standard rules when the file is absent.
    pub fn load_rules(&self) -> LoadResult<RulesSnapshot> {
        let path = self.data_dir.join("rules.ron");
        if !path.exists() {
            tracing::debug!("{} not found, using standard rules", path.display());
            return Ok(RulesSnapshot::default());
        }
        TablesLoader::load_rules(&path)
    }

    /// Load every oracle table into one snapshot.
    pub fn load_oracles(&self) -> LoadResult<OracleSnapshot> {
        Ok(OracleSnapshot::new(
            self.load_hulls()?,
            self.load_parts()?,
            self.load_orbital()?,
            self.load_rules()?,
        ))
    }

    /// Load a turn from `turns/{name}.ron`.
    pub fn load_turn(&self, name: &str) -> LoadResult<TurnState> {
        let path = self.data_dir.join("turns").join(format!("{}.ron", name));
        TurnLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
