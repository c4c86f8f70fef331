use crate::state::{HardwareSlot, PartCategory, PartId};

pub trait PartOracle: Send + Sync {
    fn part(&self, category: PartCategory, id: PartId) -> Option<PartDefinition>;

    /// Resolves the part installed in a hardware slot.
    fn part_for_slot(&self, slot: &HardwareSlot) -> Option<PartDefinition> {
        self.part(slot.category, slot.part)
    }
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PartFlags: u16 {
        /// Gattling beam: hits every target in range, rated at a third.
        const GATTLING = 0x0001;
    }
}

/// Combat-relevant stats of one component.
///
/// Only the fields for the part's category carry meaning: beams and torpedoes
/// use `damage`/`range`, bombs use `damage`/`smart_damage`, capacitors use
/// `capacitor_bonus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartDefinition {
    pub category: PartCategory,
    pub id: PartId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: i16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub smart_damage: i16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: i16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: PartFlags,
    /// Beam damage bonus in percent per installed capacitor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacitor_bonus: i16,
}

impl PartDefinition {
    pub fn new(category: PartCategory, id: PartId) -> Self {
        Self {
            category,
            id,
            damage: 0,
            smart_damage: 0,
            range: 0,
            flags: PartFlags::empty(),
            capacitor_bonus: 0,
        }
    }

    pub fn beam(id: PartId, damage: i16, range: i16) -> Self {
        Self {
            damage,
            range,
            ..Self::new(PartCategory::Beam, id)
        }
    }

    pub fn torpedo(id: PartId, damage: i16, range: i16) -> Self {
        Self {
            damage,
            range,
            ..Self::new(PartCategory::Torpedo, id)
        }
    }

    pub fn bomb(id: PartId, damage: i16, smart_damage: i16) -> Self {
        Self {
            damage,
            smart_damage,
            ..Self::new(PartCategory::Bomb, id)
        }
    }

    pub fn capacitor(id: PartId, bonus: i16) -> Self {
        Self {
            capacitor_bonus: bonus,
            ..Self::new(PartCategory::Electrical, id)
        }
    }

    #[must_use]
    pub fn gattling(mut self) -> Self {
        self.flags.insert(PartFlags::GATTLING);
        self
    }

    #[inline]
    pub fn is_gattling(&self) -> bool {
        self.flags.contains(PartFlags::GATTLING)
    }
}
