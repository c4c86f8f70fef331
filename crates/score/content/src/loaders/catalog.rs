//! Hull and part catalog loaders.

use std::collections::BTreeSet;
use std::path::Path;

use score_core::{HullDefinition, HullsSnapshot, PartDefinition, PartsSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Hull catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HullCatalog {
    pub hulls: Vec<HullDefinition>,
}

/// Part catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartCatalog {
    pub parts: Vec<PartDefinition>,
}

/// Loader for hull catalogs from RON files.
pub struct HullLoader;

impl HullLoader {
    pub fn load(path: &Path) -> LoadResult<HullsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a hull catalog, rejecting duplicate hull ids.
    pub fn parse(content: &str) -> LoadResult<HullsSnapshot> {
        let catalog: HullCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hull catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for hull in &catalog.hulls {
            if !seen.insert(hull.id) {
                anyhow::bail!("Duplicate {} in hull catalog", hull.id);
            }
        }
        Ok(HullsSnapshot::new(catalog.hulls))
    }
}

/// Loader for part catalogs from RON files.
pub struct PartLoader;

impl PartLoader {
    pub fn load(path: &Path) -> LoadResult<PartsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a part catalog.
    ///
    /// Parts resolve by category and the low byte of their id, so two entries
    /// that collide on that pair are rejected.
    pub fn parse(content: &str) -> LoadResult<PartsSnapshot> {
        let catalog: PartCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse part catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for part in &catalog.parts {
            if !seen.insert((part.category.mask(), part.id.low_byte())) {
                anyhow::bail!("Duplicate {} {} in part catalog", part.category, part.id);
            }
        }
        Ok(PartsSnapshot::new(catalog.parts))
    }
}
