//! Orbital capacity table and rules loader.

use std::path::Path;

use score_core::{OrbitalCapacityTable, RulesSnapshot};

use crate::loaders::{LoadResult, read_file};

/// Loader for the numeric game tables.
pub struct TablesLoader;

impl TablesLoader {
    /// Load the orbital capacity table from a RON file.
    pub fn load_orbital(path: &Path) -> LoadResult<OrbitalCapacityTable> {
        let content = read_file(path)?;
        Self::parse_orbital(&content)
    }

    /// Parses an orbital capacity table.
    ///
    /// The stride must be non-zero and the entry count a whole number of rows.
    pub fn parse_orbital(content: &str) -> LoadResult<OrbitalCapacityTable> {
        let table: OrbitalCapacityTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse orbital table RON: {}", e))?;

        if table.stride == 0 {
            anyhow::bail!("Orbital table stride must be non-zero");
        }
        if table.entries.len() % table.stride != 0 {
            anyhow::bail!(
                "Orbital table has {} entries, not a multiple of stride {}",
                table.entries.len(),
                table.stride
            );
        }
        Ok(table)
    }

    /// Load movement rules from a RON file.
    pub fn load_rules(path: &Path) -> LoadResult<RulesSnapshot> {
        let content = read_file(path)?;
        Self::parse_rules(&content)
    }

    pub fn parse_rules(content: &str) -> LoadResult<RulesSnapshot> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_core::{DesignSlot, HullId, PlayerId};

    #[test]
    fn orbital_table_defaults_layout() {
        let table = TablesLoader::parse_orbital("(entries: [2500, 0, 0, 0, 5000, 0, 0, 0])").unwrap();
        assert_eq!(table.base_hull, OrbitalCapacityTable::BASE_HULL);
        assert_eq!(table.capacity(HullId(0x21)), Some(5000));
    }

    #[test]
    fn orbital_table_rejects_ragged_rows() {
        assert!(TablesLoader::parse_orbital("(entries: [2500, 0, 0])").is_err());
        assert!(TablesLoader::parse_orbital("(stride: 0, entries: [])").is_err());
    }

    #[test]
    fn rules_default_speed_is_neutral() {
        let rules = TablesLoader::parse_rules(
            "(speeds: [(player: 1, slot: 3, speed: 9)])",
        )
        .unwrap();
        assert_eq!(rules.default_speed, RulesSnapshot::NEUTRAL_SPEED);
        assert_eq!(rules.speed_of(PlayerId(1), DesignSlot(3)), 9);
        assert_eq!(rules.speed_of(PlayerId(1), DesignSlot(4)), 4);
    }
}
