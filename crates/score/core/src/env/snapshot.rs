//! Oracle snapshots and the adapters that serve them.
//!
//! - **Snapshots**: plain data loaded from game files (hulls, parts, orbital
//!   table, rules)
//! - **Adapters**: implement the oracle traits by borrowing a snapshot
//! - **Bundle**: owns every adapter so callers can build a [`ScoreEnv`] in one call

use super::{
    DesignSpeed, Env, HullDefinition, HullOracle, OrbitalCapacityTable, PartDefinition,
    PartOracle, RulesOracle, RulesSnapshot, SaturatingPack, ScoreEnv, TablesOracle,
};
use crate::state::{DesignSlot, HullId, PartCategory, PartId, Planet, Player, Race, ShipDesign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Every oracle table needed to score a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OracleSnapshot {
    pub hulls: HullsSnapshot,
    pub parts: PartsSnapshot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub orbital: OrbitalCapacityTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules: RulesSnapshot,
}

impl OracleSnapshot {
    pub fn new(
        hulls: HullsSnapshot,
        parts: PartsSnapshot,
        orbital: OrbitalCapacityTable,
        rules: RulesSnapshot,
    ) -> Self {
        Self {
            hulls,
            parts,
            orbital,
            rules,
        }
    }
}

/// Hull records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HullsSnapshot {
    pub hulls: Vec<HullDefinition>,
}

impl HullsSnapshot {
    pub fn new(hulls: impl IntoIterator<Item = HullDefinition>) -> Self {
        Self {
            hulls: hulls.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.hulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hulls.is_empty()
    }
}

/// Part records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartsSnapshot {
    pub parts: Vec<PartDefinition>,
}

impl PartsSnapshot {
    pub fn new(parts: Vec<PartDefinition>) -> Self {
        Self { parts }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

// ============================================================================
// Adapters (implement oracle traits backed by snapshots)
// ============================================================================

pub struct SnapshotHullOracle<'a> {
    snapshot: &'a HullsSnapshot,
}

impl<'a> SnapshotHullOracle<'a> {
    pub fn new(snapshot: &'a HullsSnapshot) -> Self {
        Self { snapshot }
    }
}

impl HullOracle for SnapshotHullOracle<'_> {
    fn hull(&self, id: HullId) -> Option<HullDefinition> {
        self.snapshot.hulls.iter().find(|hull| hull.id == id).copied()
    }
}

pub struct SnapshotPartOracle<'a> {
    snapshot: &'a PartsSnapshot,
}

impl<'a> SnapshotPartOracle<'a> {
    pub fn new(snapshot: &'a PartsSnapshot) -> Self {
        Self { snapshot }
    }
}

impl PartOracle for SnapshotPartOracle<'_> {
    /// Parts match on category and the low byte of the id.
    fn part(&self, category: PartCategory, id: PartId) -> Option<PartDefinition> {
        self.snapshot
            .parts
            .iter()
            .find(|part| part.category == category && part.id.low_byte() == id.low_byte())
            .copied()
    }
}

pub struct SnapshotTablesOracle<'a> {
    snapshot: &'a OrbitalCapacityTable,
}

impl<'a> SnapshotTablesOracle<'a> {
    pub fn new(snapshot: &'a OrbitalCapacityTable) -> Self {
        Self { snapshot }
    }
}

impl TablesOracle for SnapshotTablesOracle<'_> {
    fn orbital_capacity(&self, hull: HullId) -> Option<i64> {
        self.snapshot.orbital_capacity(hull)
    }
}

pub struct SnapshotRulesOracle<'a> {
    snapshot: &'a RulesSnapshot,
}

impl<'a> SnapshotRulesOracle<'a> {
    pub fn new(snapshot: &'a RulesSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn speeds(&self) -> &'a [DesignSpeed] {
        &self.snapshot.speeds
    }
}

impl RulesOracle for SnapshotRulesOracle<'_> {
    fn ship_speed(&self, player: &Player, slot: DesignSlot, _design: &ShipDesign) -> i16 {
        self.snapshot.speed_of(player.id, slot)
    }

    fn operable_factories(&self, planet: &Planet, race: &Race) -> u32 {
        RulesSnapshot::standard_operable_factories(planet, race)
    }
}

/// Bundle of all snapshot-backed oracle adapters.
pub struct SnapshotOracleBundle<'a> {
    pub hulls: SnapshotHullOracle<'a>,
    pub parts: SnapshotPartOracle<'a>,
    pub tables: SnapshotTablesOracle<'a>,
    pub rules: SnapshotRulesOracle<'a>,
    pub pack: SaturatingPack,
}

impl<'a> SnapshotOracleBundle<'a> {
    pub fn new(snapshot: &'a OracleSnapshot) -> Self {
        Self {
            hulls: SnapshotHullOracle::new(&snapshot.hulls),
            parts: SnapshotPartOracle::new(&snapshot.parts),
            tables: SnapshotTablesOracle::new(&snapshot.orbital),
            rules: SnapshotRulesOracle::new(&snapshot.rules),
            pack: SaturatingPack,
        }
    }

    /// Creates a typed environment from this bundle.
    pub fn env(
        &self,
    ) -> Env<
        '_,
        SnapshotHullOracle<'a>,
        SnapshotPartOracle<'a>,
        SnapshotTablesOracle<'a>,
        SnapshotRulesOracle<'a>,
        SaturatingPack,
    > {
        Env::with_all(&self.hulls, &self.parts, &self.tables, &self.rules, &self.pack)
    }

    /// Creates a trait-object environment from this bundle.
    pub fn as_env(&self) -> ScoreEnv<'_> {
        self.env().into_score_env()
    }
}
