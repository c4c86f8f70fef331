use std::fmt;

use crate::config::ScoreConfig;

/// Index of a player in the turn snapshot (0-15).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Planet identifier as stored in the universe table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlanetId(pub u16);

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fleet identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FleetId(pub u16);

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fleet {}", self.0)
    }
}

/// Hull identifier, resolved through the hull oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HullId(pub u16);

impl fmt::Display for HullId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hull {:#04x}", self.0)
    }
}

/// Part identifier within a hardware category.
///
/// Only the low byte names the part; the high byte is reserved for the
/// category-relative encoding used by turn files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartId(pub u16);

impl PartId {
    /// Electrical part: Energy Capacitor.
    pub const ENERGY_CAPACITOR: Self = Self(0x0C);
    /// Electrical part: Flux Capacitor.
    pub const FLUX_CAPACITOR: Self = Self(0x0D);

    #[inline]
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns true if this electrical part boosts beam weapons.
    #[inline]
    pub const fn is_capacitor(self) -> bool {
        let id = self.low_byte();
        id == Self::ENERGY_CAPACITOR.0 as u8 || id == Self::FLUX_CAPACITOR.0 as u8
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {:#04x}", self.0)
    }
}

/// Position in a player's ship design table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DesignSlot(pub u8);

impl DesignSlot {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.index() < ScoreConfig::MAX_DESIGNS
    }

    /// Iterates over every design slot of a player, in table order.
    pub fn all() -> impl Iterator<Item = DesignSlot> {
        (0..ScoreConfig::MAX_DESIGNS as u8).map(DesignSlot)
    }
}

impl fmt::Display for DesignSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacitor_ids_match_on_low_byte() {
        assert!(PartId::ENERGY_CAPACITOR.is_capacitor());
        assert!(PartId::FLUX_CAPACITOR.is_capacitor());
        assert!(PartId(0x080C).is_capacitor());
        assert!(!PartId(0x0B).is_capacitor());
        assert!(!PartId(0x0E).is_capacitor());
    }

    #[test]
    fn design_slots_cover_table() {
        let slots: Vec<_> = DesignSlot::all().collect();
        assert_eq!(slots.len(), ScoreConfig::MAX_DESIGNS);
        assert!(slots.iter().all(|slot| slot.is_valid()));
        assert!(!DesignSlot(16).is_valid());
    }
}
