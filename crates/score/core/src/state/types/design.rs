//! Ship designs and their hardware loadout.

use arrayvec::{ArrayVec, CapacityError};

use super::common::{HullId, PartId};
use crate::config::ScoreConfig;

/// Hardware category of a design slot.
///
/// The discriminant is the category bit used by the hull slot masks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PartCategory {
    Engine = 0x0001,
    Scanner = 0x0002,
    Shield = 0x0004,
    Armor = 0x0008,
    Beam = 0x0010,
    Torpedo = 0x0020,
    Bomb = 0x0040,
    MiningRobot = 0x0080,
    MineLayer = 0x0100,
    Orbital = 0x0200,
    Planetary = 0x0400,
    Electrical = 0x0800,
    Mechanical = 0x1000,
}

impl PartCategory {
    #[inline]
    pub const fn mask(self) -> u16 {
        self as u16
    }
}

/// One hardware slot of a design: a part reference and how many are installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardwareSlot {
    pub category: PartCategory,
    pub part: PartId,
    pub count: u16,
}

impl HardwareSlot {
    pub const fn new(category: PartCategory, part: PartId, count: u16) -> Self {
        Self {
            category,
            part,
            count,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

bitflags::bitflags! {
    /// Design record status bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct DesignFlags: u16 {
        /// Slot is empty or the design was deleted.
        const DELETED = 0x0001;
    }
}

/// Hardware slots of one design, bounded by the largest hull.
pub type Loadout = ArrayVec<HardwareSlot, { ScoreConfig::MAX_HARDWARE_SLOTS }>;

/// A ship or starbase design.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDesign {
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: DesignFlags,
    pub hull: HullId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Loadout,
}

impl ShipDesign {
    /// Creates an active design with no hardware.
    pub fn new(hull: HullId) -> Self {
        Self {
            flags: DesignFlags::empty(),
            hull,
            slots: ArrayVec::new(),
        }
    }

    /// An empty design-table entry.
    pub fn empty() -> Self {
        Self {
            flags: DesignFlags::DELETED,
            hull: HullId::default(),
            slots: ArrayVec::new(),
        }
    }

    /// Appends a hardware slot, handing it back when the loadout is full.
    pub fn try_add_slot(&mut self, slot: HardwareSlot) -> Result<(), CapacityError<HardwareSlot>> {
        self.slots.try_push(slot)
    }

    /// Appends a hardware slot (builder pattern).
    ///
    /// The loadout must have room; use [`Self::try_add_slot`] for untrusted input.
    #[must_use]
    pub fn with_slot(mut self, slot: HardwareSlot) -> Self {
        let pushed = self.try_add_slot(slot);
        debug_assert!(
            pushed.is_ok(),
            "design already holds {} hardware slots",
            ScoreConfig::MAX_HARDWARE_SLOTS
        );
        self
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.flags.contains(DesignFlags::DELETED)
    }

    /// Hardware slots with at least one installed part.
    pub fn installed(&self) -> impl Iterator<Item = &HardwareSlot> {
        self.slots.iter().filter(|slot| !slot.is_empty())
    }
}

impl Default for ShipDesign {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_design_is_deleted() {
        assert!(ShipDesign::empty().is_deleted());
        assert!(ShipDesign::default().is_deleted());
        assert!(!ShipDesign::new(HullId(4)).is_deleted());
    }

    #[test]
    fn installed_skips_zero_count_slots() {
        let design = ShipDesign::new(HullId(1))
            .with_slot(HardwareSlot::new(PartCategory::Beam, PartId(1), 0))
            .with_slot(HardwareSlot::new(PartCategory::Torpedo, PartId(2), 3));
        let installed: Vec<_> = design.installed().collect();
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].category, PartCategory::Torpedo);
    }

    #[test]
    fn loadout_is_bounded() {
        let mut design = ShipDesign::new(HullId(1));
        for i in 0..ScoreConfig::MAX_HARDWARE_SLOTS {
            design
                .try_add_slot(HardwareSlot::new(PartCategory::Armor, PartId(i as u16), 1))
                .unwrap();
        }
        let extra = HardwareSlot::new(PartCategory::Beam, PartId(99), 1);
        let err = design.try_add_slot(extra).unwrap_err();
        assert_eq!(err.element(), extra);
        assert_eq!(design.slots.len(), ScoreConfig::MAX_HARDWARE_SLOTS);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hardware slots")]
    fn builder_rejects_overfull_loadout() {
        let mut design = ShipDesign::new(HullId(1));
        for i in 0..=ScoreConfig::MAX_HARDWARE_SLOTS {
            design = design.with_slot(HardwareSlot::new(PartCategory::Armor, PartId(i as u16), 1));
        }
    }

    #[test]
    fn category_masks_match_slot_bits() {
        assert_eq!(PartCategory::Beam.mask(), 0x10);
        assert_eq!(PartCategory::Torpedo.mask(), 0x20);
        assert_eq!(PartCategory::Bomb.mask(), 0x40);
        assert_eq!(PartCategory::Electrical.mask(), 0x800);
    }
}
