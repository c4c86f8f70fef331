//! Score snapshot and its legacy 20-byte record.

use crate::env::PackedCount;
use crate::state::PlayerId;

/// Points a single tech field is worth at `level`.
///
/// Each band of three levels is worth one more point per level than the last:
/// 1-3 score `L`, 4-6 score `2L - 3`, 7-9 score `3L - 9`, 10+ score `4L - 18`.
pub const fn tech_points(level: u16) -> i64 {
    let level = level as i64;
    if level < 4 {
        level
    } else if level < 7 {
        level * 2 - 3
    } else if level < 10 {
        level * 3 - 9
    } else {
        level * 4 - 18
    }
}

/// Wide ship tallies by class, before packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipTally {
    pub unarmed: i64,
    pub escort: i64,
    pub capital: i64,
}

/// Ship counts as stored in the score record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipCounts {
    pub unarmed: PackedCount,
    pub escort: PackedCount,
    pub capital: PackedCount,
}

impl ShipCounts {
    pub const fn as_array(&self) -> [PackedCount; 3] {
        [self.unarmed, self.escort, self.capital]
    }
}

/// A player's evaluated score.
///
/// `total` is the wide accumulator. The narrow 16-bit view older clients show is
/// [`Score::legacy_total`], which wraps on overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub player: PlayerId,
    pub total: i64,
    pub planets: u32,
    pub starbases: u32,
    pub resources: i64,
    pub tech_levels: u32,
    pub ships: ShipCounts,
}

impl Score {
    /// Low 16 bits of the total, as a signed value.
    #[inline]
    pub const fn legacy_total(&self) -> i16 {
        self.total as i16
    }

    /// Narrows this score into the legacy record layout.
    pub const fn to_record(&self) -> ScoreRecord {
        ScoreRecord {
            score: self.total as i32,
            planets: self.planets as u16,
            starbases: self.starbases as u16,
            resources: self.resources as i32,
            tech_levels: self.tech_levels as u16,
            ships: [self.ships.unarmed.0, self.ships.escort.0, self.ships.capital.0],
        }
    }
}

/// The 20-byte score record exchanged between clients.
///
/// Little-endian layout:
///
/// ```text
/// 0..4    i32  score
/// 4..6    u16  planets
/// 6..8    u16  starbases
/// 8..12   i32  resources
/// 12..14  u16  tech levels
/// 14..20  u16  unarmed, escort, capital ships (packed)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    pub score: i32,
    pub planets: u16,
    pub starbases: u16,
    pub resources: i32,
    pub tech_levels: u16,
    pub ships: [u16; 3],
}

impl ScoreRecord {
    pub const SIZE: usize = 20;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.score.to_le_bytes());
        out[4..6].copy_from_slice(&self.planets.to_le_bytes());
        out[6..8].copy_from_slice(&self.starbases.to_le_bytes());
        out[8..12].copy_from_slice(&self.resources.to_le_bytes());
        out[12..14].copy_from_slice(&self.tech_levels.to_le_bytes());
        for (i, count) in self.ships.iter().enumerate() {
            let at = 14 + i * 2;
            out[at..at + 2].copy_from_slice(&count.to_le_bytes());
        }
        out
    }

    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let i32_at =
            |at: usize| i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Self {
            score: i32_at(0),
            planets: u16_at(4),
            starbases: u16_at(6),
            resources: i32_at(8),
            tech_levels: u16_at(12),
            ships: [u16_at(14), u16_at(16), u16_at(18)],
        }
    }

    /// Low 16 bits of the score, matching [`Score::legacy_total`].
    pub const fn legacy_total(&self) -> i16 {
        self.score as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_points_by_band() {
        let points: Vec<i64> = (0..=12).map(tech_points).collect();
        assert_eq!(points, vec![0, 1, 2, 3, 5, 7, 9, 12, 15, 18, 22, 26, 30]);
    }

    #[test]
    fn legacy_total_wraps() {
        let score = Score {
            total: 70_000,
            ..Score::default()
        };
        assert_eq!(score.legacy_total(), 4_464);
        assert_eq!(score.to_record().legacy_total(), 4_464);

        let score = Score {
            total: 40_000,
            ..Score::default()
        };
        assert_eq!(score.legacy_total(), -25_536);
    }

    #[test]
    fn record_layout_is_little_endian() {
        let score = Score {
            player: PlayerId(1),
            total: 0x0102_0304,
            planets: 5,
            starbases: 2,
            resources: 300,
            tech_levels: 17,
            ships: ShipCounts {
                unarmed: PackedCount(1),
                escort: PackedCount(2),
                capital: PackedCount(0x0300),
            },
        };
        let bytes = score.to_record().to_bytes();
        assert_eq!(&bytes[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[4..6], &[5, 0]);
        assert_eq!(&bytes[8..12], &[0x2C, 0x01, 0, 0]);
        assert_eq!(&bytes[18..20], &[0x00, 0x03]);
        assert_eq!(ScoreRecord::from_bytes(&bytes), score.to_record());
    }
}
