use crate::state::HullId;

pub trait TablesOracle: Send + Sync {
    /// Colonist capacity of an Alternate Reality starbase built on `hull`.
    fn orbital_capacity(&self, hull: HullId) -> Option<i64>;
}

/// Orbital capacity table as laid out in the game data.
///
/// Rows start at `base_hull`; each row is `stride` wide and the capacity is the
/// first column, so the entry for hull `h` sits at `(h - base_hull) * stride`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrbitalCapacityTable {
    #[cfg_attr(feature = "serde", serde(default = "OrbitalCapacityTable::default_base_hull"))]
    pub base_hull: HullId,
    #[cfg_attr(feature = "serde", serde(default = "OrbitalCapacityTable::default_stride"))]
    pub stride: usize,
    pub entries: Vec<i64>,
}

impl OrbitalCapacityTable {
    /// First starbase hull id.
    pub const BASE_HULL: HullId = HullId(0x20);
    pub const STRIDE: usize = 4;

    pub fn new(entries: Vec<i64>) -> Self {
        Self {
            base_hull: Self::BASE_HULL,
            stride: Self::STRIDE,
            entries,
        }
    }

    /// Builds a table from one capacity per starbase hull, padding the unused columns.
    pub fn from_capacities(capacities: &[i64]) -> Self {
        let mut entries = Vec::with_capacity(capacities.len() * Self::STRIDE);
        for &capacity in capacities {
            entries.push(capacity);
            entries.extend(core::iter::repeat_n(0, Self::STRIDE - 1));
        }
        Self::new(entries)
    }

    /// Flat index of a hull's capacity entry, or `None` for hulls below the base.
    pub fn index_of(&self, hull: HullId) -> Option<usize> {
        let row = hull.0.checked_sub(self.base_hull.0)?;
        usize::from(row).checked_mul(self.stride)
    }

    pub fn capacity(&self, hull: HullId) -> Option<i64> {
        self.entries.get(self.index_of(hull)?).copied()
    }

    fn default_base_hull() -> HullId {
        Self::BASE_HULL
    }

    fn default_stride() -> usize {
        Self::STRIDE
    }
}

impl Default for OrbitalCapacityTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TablesOracle for OrbitalCapacityTable {
    fn orbital_capacity(&self, hull: HullId) -> Option<i64> {
        self.capacity(hull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_strided_from_base_hull() {
        let table = OrbitalCapacityTable::from_capacities(&[250_000, 500_000, 1_000_000]);
        assert_eq!(table.index_of(HullId(0x20)), Some(0));
        assert_eq!(table.index_of(HullId(0x22)), Some(8));
        assert_eq!(table.capacity(HullId(0x21)), Some(500_000));
        assert_eq!(table.capacity(HullId(0x23)), None);
        assert_eq!(table.capacity(HullId(0x1F)), None);
    }

    #[test]
    fn table_answers_as_an_oracle() {
        fn lookup<T: TablesOracle + ?Sized>(tables: &T, hull: HullId) -> Option<i64> {
            tables.orbital_capacity(hull)
        }

        let table = OrbitalCapacityTable::from_capacities(&[250_000, 500_000]);
        assert_eq!(lookup(&table, HullId(0x21)), Some(500_000));
        assert_eq!(lookup(&table, HullId(0x22)), None);
        let dyn_tables: &dyn TablesOracle = &table;
        assert_eq!(dyn_tables.orbital_capacity(HullId(0x20)), Some(250_000));
    }
}
