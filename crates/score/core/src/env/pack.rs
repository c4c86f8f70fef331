use core::fmt;

pub trait PackOracle: Send + Sync {
    /// Packs a wide ship count into the 16-bit score record field.
    fn pack(&self, count: i64) -> PackedCount;
}

/// A ship count as stored in the legacy score record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackedCount(pub u16);

impl PackedCount {
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for PackedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamps counts into `0..=u16::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaturatingPack;

impl PackOracle for SaturatingPack {
    fn pack(&self, count: i64) -> PackedCount {
        PackedCount(count.clamp(0, i64::from(u16::MAX)) as u16)
    }
}
