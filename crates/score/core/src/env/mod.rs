//! Traits describing read-only game data.
//!
//! Oracles expose hull records, part stats, the orbital capacity table, rule
//! calculators and the ship-count packer. The [`Env`] aggregate bundles them so
//! the evaluators can reach everything they need without coupling to concrete
//! implementations.
mod error;
mod hulls;
mod pack;
mod parts;
mod rules;
mod snapshot;
mod tables;

pub use error::OracleError;
pub use hulls::{HullDefinition, HullOracle};
pub use pack::{PackOracle, PackedCount, SaturatingPack};
pub use parts::{PartDefinition, PartFlags, PartOracle};
pub use rules::{DesignSpeed, RulesOracle, RulesSnapshot};
pub use snapshot::{
    HullsSnapshot, OracleSnapshot, PartsSnapshot, SnapshotHullOracle, SnapshotOracleBundle,
    SnapshotPartOracle, SnapshotRulesOracle, SnapshotTablesOracle,
};
pub use tables::{OrbitalCapacityTable, TablesOracle};

/// Aggregates the read-only oracles required by the evaluators.
pub struct Env<'a, H, P, T, R, K>
where
    H: HullOracle + ?Sized,
    P: PartOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RulesOracle + ?Sized,
    K: PackOracle + ?Sized,
{
    hulls: Option<&'a H>,
    parts: Option<&'a P>,
    tables: Option<&'a T>,
    rules: Option<&'a R>,
    pack: Option<&'a K>,
}

impl<H, P, T, R, K> Clone for Env<'_, H, P, T, R, K>
where
    H: HullOracle + ?Sized,
    P: PartOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RulesOracle + ?Sized,
    K: PackOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Holds only references, so Copy does not need the oracles to be Copy.
impl<H, P, T, R, K> Copy for Env<'_, H, P, T, R, K>
where
    H: HullOracle + ?Sized,
    P: PartOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RulesOracle + ?Sized,
    K: PackOracle + ?Sized,
{
}

impl<H, P, T, R, K> core::fmt::Debug for Env<'_, H, P, T, R, K>
where
    H: HullOracle + ?Sized,
    P: PartOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RulesOracle + ?Sized,
    K: PackOracle + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("hulls", &self.hulls.is_some())
            .field("parts", &self.parts.is_some())
            .field("tables", &self.tables.is_some())
            .field("rules", &self.rules.is_some())
            .field("pack", &self.pack.is_some())
            .finish()
    }
}

pub type ScoreEnv<'a> = Env<
    'a,
    dyn HullOracle + 'a,
    dyn PartOracle + 'a,
    dyn TablesOracle + 'a,
    dyn RulesOracle + 'a,
    dyn PackOracle + 'a,
>;

impl<'a, H, P, T, R, K> Env<'a, H, P, T, R, K>
where
    H: HullOracle + ?Sized,
    P: PartOracle + ?Sized,
    T: TablesOracle + ?Sized,
    R: RulesOracle + ?Sized,
    K: PackOracle + ?Sized,
{
    pub fn new(
        hulls: Option<&'a H>,
        parts: Option<&'a P>,
        tables: Option<&'a T>,
        rules: Option<&'a R>,
        pack: Option<&'a K>,
    ) -> Self {
        Self {
            hulls,
            parts,
            tables,
            rules,
            pack,
        }
    }

    pub fn with_all(hulls: &'a H, parts: &'a P, tables: &'a T, rules: &'a R, pack: &'a K) -> Self {
        Self::new(
            Some(hulls),
            Some(parts),
            Some(tables),
            Some(rules),
            Some(pack),
        )
    }

    pub fn empty() -> Self {
        Self {
            hulls: None,
            parts: None,
            tables: None,
            rules: None,
            pack: None,
        }
    }

    /// Returns the HullOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::HullsNotAvailable` if no hull oracle was provided.
    pub fn hulls(&self) -> Result<&'a H, OracleError> {
        self.hulls.ok_or(OracleError::HullsNotAvailable)
    }

    /// Returns the PartOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PartsNotAvailable` if no part oracle was provided.
    pub fn parts(&self) -> Result<&'a P, OracleError> {
        self.parts.ok_or(OracleError::PartsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the RulesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RulesNotAvailable` if no rules oracle was provided.
    pub fn rules(&self) -> Result<&'a R, OracleError> {
        self.rules.ok_or(OracleError::RulesNotAvailable)
    }

    /// Returns the PackOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PackNotAvailable` if no pack oracle was provided.
    pub fn pack(&self) -> Result<&'a K, OracleError> {
        self.pack.ok_or(OracleError::PackNotAvailable)
    }
}

impl<'a, H, P, T, R, K> Env<'a, H, P, T, R, K>
where
    H: HullOracle + 'a,
    P: PartOracle + 'a,
    T: TablesOracle + 'a,
    R: RulesOracle + 'a,
    K: PackOracle + 'a,
{
    /// Converts this environment into a trait-object based `ScoreEnv`.
    pub fn into_score_env(self) -> ScoreEnv<'a> {
        let hulls: Option<&'a dyn HullOracle> = self.hulls.map(|hulls| hulls as _);
        let parts: Option<&'a dyn PartOracle> = self.parts.map(|parts| parts as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        let rules: Option<&'a dyn RulesOracle> = self.rules.map(|rules| rules as _);
        let pack: Option<&'a dyn PackOracle> = self.pack.map(|pack| pack as _);
        Env::new(hulls, parts, tables, rules, pack)
    }
}
