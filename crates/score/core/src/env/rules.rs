use crate::state::{DesignSlot, Planet, Player, PlayerId, Race, ShipDesign};

/// Game rules the evaluators delegate to rather than re-derive.
pub trait RulesOracle: Send + Sync {
    /// Warp speed of a design, as used by the power rating speed bonus.
    fn ship_speed(&self, player: &Player, slot: DesignSlot, design: &ShipDesign) -> i16;

    /// Factories on `planet` that its population can run this turn.
    fn operable_factories(&self, planet: &Planet, race: &Race) -> u32;
}

/// Speed override for one design of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignSpeed {
    pub player: PlayerId,
    pub slot: DesignSlot,
    pub speed: i16,
}

/// Standard rule parameters.
///
/// Ship speeds come from a per-design table; designs without an entry move at
/// `default_speed`, which earns no speed bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesSnapshot {
    #[cfg_attr(feature = "serde", serde(default = "RulesSnapshot::default_speed"))]
    pub default_speed: i16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub speeds: Vec<DesignSpeed>,
}

impl RulesSnapshot {
    /// Speed at which the power rating adds no bonus.
    pub const NEUTRAL_SPEED: i16 = 4;

    pub fn new(default_speed: i16, speeds: Vec<DesignSpeed>) -> Self {
        Self {
            default_speed,
            speeds,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, player: PlayerId, slot: DesignSlot, speed: i16) -> Self {
        self.speeds.retain(|entry| !(entry.player == player && entry.slot == slot));
        self.speeds.push(DesignSpeed {
            player,
            slot,
            speed,
        });
        self
    }

    pub fn speed_of(&self, player: PlayerId, slot: DesignSlot) -> i16 {
        self.speeds
            .iter()
            .find(|entry| entry.player == player && entry.slot == slot)
            .map_or(self.default_speed, |entry| entry.speed)
    }

    /// `min(factories, population * operated_per_10k / 10000)`.
    pub fn standard_operable_factories(planet: &Planet, race: &Race) -> u32 {
        let operable =
            u64::from(planet.population) * u64::from(race.factories_operated) / 10_000;
        u64::from(planet.factories).min(operable) as u32
    }

    fn default_speed() -> i16 {
        Self::NEUTRAL_SPEED
    }
}

impl Default for RulesSnapshot {
    fn default() -> Self {
        Self::new(Self::NEUTRAL_SPEED, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Environment, PlanetId};

    #[test]
    fn operable_factories_limited_by_population() {
        let race = Race {
            factories_operated: 10,
            ..Race::default()
        };
        let planet = Planet::new(PlanetId(1), Environment::default())
            .owned_by(PlayerId(0), 5000)
            .with_factories(10);
        assert_eq!(RulesSnapshot::standard_operable_factories(&planet, &race), 5);

        let planet = planet.with_factories(3);
        assert_eq!(RulesSnapshot::standard_operable_factories(&planet, &race), 3);
    }

    #[test]
    fn speed_table_falls_back_to_default() {
        let rules = RulesSnapshot::default()
            .with_speed(PlayerId(1), DesignSlot(2), 9)
            .with_speed(PlayerId(1), DesignSlot(2), 7);
        assert_eq!(rules.speed_of(PlayerId(1), DesignSlot(2)), 7);
        assert_eq!(rules.speed_of(PlayerId(1), DesignSlot(3)), 4);
        assert_eq!(rules.speeds.len(), 1);
    }
}
