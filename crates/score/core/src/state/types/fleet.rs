use super::common::{DesignSlot, FleetId, PlayerId};
use crate::config::ScoreConfig;

bitflags::bitflags! {
    /// Fleet status bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FleetFlags: u16 {
        /// Fleet is between owners (gift or transfer in progress); not tallied.
        const IN_TRANSIT = 0x0001;
    }
}

/// A fleet: ship counts per design slot of its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    pub id: FleetId,
    pub owner: PlayerId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: FleetFlags,
    pub ships: [u32; ScoreConfig::MAX_DESIGNS],
}

impl Fleet {
    pub fn new(id: FleetId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            flags: FleetFlags::empty(),
            ships: [0; ScoreConfig::MAX_DESIGNS],
        }
    }

    /// Sets the ship count for a design slot (builder pattern). Out-of-range slots are ignored.
    #[must_use]
    pub fn with_ships(mut self, slot: DesignSlot, count: u32) -> Self {
        if let Some(entry) = self.ships.get_mut(slot.index()) {
            *entry = count;
        }
        self
    }

    #[must_use]
    pub fn in_transit(mut self) -> Self {
        self.flags.insert(FleetFlags::IN_TRANSIT);
        self
    }

    #[inline]
    pub fn is_in_transit(&self) -> bool {
        self.flags.contains(FleetFlags::IN_TRANSIT)
    }

    /// Non-zero ship counts paired with their design slot.
    pub fn stacks(&self) -> impl Iterator<Item = (DesignSlot, u32)> + '_ {
        self.ships
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(slot, count)| (DesignSlot(slot as u8), *count))
    }
}
