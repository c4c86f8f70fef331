//! Combat power rating of a ship design.

use super::error::EvalError;
use crate::config::ScoreConfig;
use crate::env::{OracleError, PartOracle, RulesOracle};
use crate::state::{DesignSlot, PartCategory, Player, ShipDesign};

/// Fixed-point unity of the capacitor multiplier (100.0%).
const CAPACITOR_UNIT: i64 = 1000;
/// Upper bound of the applied capacitor percentage.
const MAX_CAPACITOR_PCT: i64 = 255;

/// Ship class derived from a design's power rating.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ShipClass {
    /// Empty or deleted design slot; never counted.
    Deleted,
    Unarmed,
    Escort,
    Capital,
}

impl ShipClass {
    /// Classifies an active design by its power.
    ///
    /// Anything non-zero below [`ScoreConfig::CAPITAL_POWER`] is an escort,
    /// including the negative ratings short-range torpedoes can produce.
    pub const fn from_power(power: i64) -> Self {
        if power == 0 {
            Self::Unarmed
        } else if power < ScoreConfig::CAPITAL_POWER {
            Self::Escort
        } else {
            Self::Capital
        }
    }

    #[inline]
    pub const fn is_counted(self) -> bool {
        !matches!(self, Self::Deleted)
    }
}

/// Per-weapon-family contributions to a design's power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBreakdown {
    /// Beam power after capacitors.
    pub beam: i64,
    pub torpedo: i64,
    pub bomb: i64,
    /// Capacitor percentage applied to beams, if any capacitor changed it.
    pub capacitor_pct: Option<i64>,
    pub speed: i16,
    pub speed_bonus: i64,
}

impl PowerBreakdown {
    pub fn total(&self) -> i64 {
        self.bomb + self.beam + self.speed_bonus + self.torpedo
    }

    pub fn class(&self) -> ShipClass {
        ShipClass::from_power(self.total())
    }
}

/// Rates the combat power of `design`, installed in `slot` of `player`.
///
/// Only beam, torpedo, bomb and electrical slots are resolved against the part
/// oracle; other categories never contribute.
///
/// # Errors
///
/// Returns [`OracleError::PartNotFound`] when a combat-relevant part does not resolve.
pub fn design_power<P, R>(
    player: &Player,
    slot: DesignSlot,
    design: &ShipDesign,
    parts: &P,
    rules: &R,
) -> Result<PowerBreakdown, EvalError>
where
    P: PartOracle + ?Sized,
    R: RulesOracle + ?Sized,
{
    let mut beam: i64 = 0;
    let mut torpedo: i64 = 0;
    let mut bomb: i64 = 0;
    let mut capacitor: i64 = CAPACITOR_UNIT;

    for hw in design.installed() {
        if !matches!(
            hw.category,
            PartCategory::Beam | PartCategory::Torpedo | PartCategory::Bomb | PartCategory::Electrical
        ) {
            continue;
        }
        let part = parts.part_for_slot(hw).ok_or(OracleError::PartNotFound {
            category: hw.category,
            part: hw.part,
        })?;
        let count = i64::from(hw.count);

        match hw.category {
            PartCategory::Beam => {
                let mut power = i64::from(part.damage) * count * (i64::from(part.range) + 3) / 4;
                if part.is_gattling() {
                    power /= 3;
                }
                beam += power;
            }
            PartCategory::Torpedo => {
                torpedo += i64::from(part.damage) * count * (i64::from(part.range) - 2) / 2;
            }
            PartCategory::Bomb => {
                bomb += (i64::from(part.damage) + i64::from(part.smart_damage)) * count * 2;
            }
            PartCategory::Electrical if hw.part.is_capacitor() => {
                let factor = 100 + i64::from(part.capacitor_bonus);
                for _ in 0..hw.count {
                    capacitor = capacitor.saturating_mul(factor) / 100;
                }
            }
            _ => {}
        }
    }

    let capacitor_pct = (capacitor != CAPACITOR_UNIT).then(|| (capacitor / 10).min(MAX_CAPACITOR_PCT));
    if let Some(pct) = capacitor_pct {
        beam = beam * pct / 100;
    }

    let speed = rules.ship_speed(player, slot, design);
    let speed_bonus = beam * (i64::from(speed) - 4) / 10;

    let breakdown = PowerBreakdown {
        beam,
        torpedo,
        bomb,
        capacitor_pct,
        speed,
        speed_bonus,
    };

    tracing::trace!(
        "power of {} {}: {} ({})",
        player.id,
        slot,
        breakdown.total(),
        breakdown.class()
    );

    Ok(breakdown)
}
