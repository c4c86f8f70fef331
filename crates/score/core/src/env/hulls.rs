use crate::state::HullId;

pub trait HullOracle: Send + Sync {
    fn hull(&self, id: HullId) -> Option<HullDefinition>;
}

/// Hull record fields the evaluators read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HullDefinition {
    pub id: HullId,
    /// Fleet dock capacity. Zero for orbital forts, which do not count as starbases.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dock_capacity: u16,
}

impl HullDefinition {
    pub fn new(id: HullId, dock_capacity: u16) -> Self {
        Self { id, dock_capacity }
    }

    #[inline]
    pub fn has_dock(&self) -> bool {
        self.dock_capacity != 0
    }
}
