//! Player records: race traits, tech levels, and the ship design table.

use core::array;

use super::common::{DesignSlot, PlayerId};
use super::design::ShipDesign;
use super::planet::EnvAxis;
use crate::config::ScoreConfig;

/// Primary racial trait.
///
/// Discriminants follow the index stored in the race record.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PrimaryTrait {
    /// Hyper-Expansion: half the usual population capacity.
    #[strum(serialize = "HE")]
    HyperExpansion = 0,
    #[strum(serialize = "SS")]
    SuperStealth = 1,
    #[strum(serialize = "WM")]
    WarMonger = 2,
    #[strum(serialize = "CA")]
    ClaimAdjuster = 3,
    #[strum(serialize = "IS")]
    InnerStrength = 4,
    #[strum(serialize = "SD")]
    SpaceDemolition = 5,
    #[strum(serialize = "PP")]
    PacketPhysics = 6,
    #[strum(serialize = "IT")]
    InterstellarTraveler = 7,
    /// Alternate Reality: population lives in orbital facilities.
    #[strum(serialize = "AR")]
    AlternateReality = 8,
    /// Jack-of-all-Trades: a fifth more population capacity.
    #[default]
    #[strum(serialize = "JOAT")]
    JackOfAllTrades = 9,
}

impl PrimaryTrait {
    #[inline]
    pub const fn index(self) -> i32 {
        self as i32
    }

    #[inline]
    pub const fn is_alternate_reality(self) -> bool {
        matches!(self, Self::AlternateReality)
    }
}

bitflags::bitflags! {
    /// Lesser racial traits, one bit each in race-record order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct LesserTraits: u16 {
        const IMPROVED_FUEL_EFFICIENCY = 1 << 0;
        const TOTAL_TERRAFORMING = 1 << 1;
        const ADVANCED_REMOTE_MINING = 1 << 2;
        const IMPROVED_STARBASES = 1 << 3;
        const GENERALIZED_RESEARCH = 1 << 4;
        const ULTIMATE_RECYCLING = 1 << 5;
        const MINERAL_ALCHEMY = 1 << 6;
        const NO_RAM_SCOOP_ENGINES = 1 << 7;
        const CHEAP_ENGINES = 1 << 8;
        /// Only Basic Remote Mining: a tenth more population capacity.
        const ONLY_BASIC_REMOTE_MINING = 1 << 9;
        const NO_ADVANCED_SCANNERS = 1 << 10;
        const LOW_STARTING_POPULATION = 1 << 11;
        const BLEEDING_EDGE_TECHNOLOGY = 1 << 12;
        const REGENERATING_SHIELDS = 1 << 13;
    }
}

bitflags::bitflags! {
    /// Player status bits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PlayerFlags: u16 {
        /// Player has been eliminated; tech levels no longer score.
        const ELIMINATED = 0x0001;
    }
}

/// Environment tolerance for one axis.
///
/// A negative `max` marks the race as immune to the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisTolerance {
    pub ideal: i16,
    pub min: i16,
    pub max: i16,
}

impl AxisTolerance {
    pub const IMMUNE: Self = Self::new(50, -1, -1);

    pub const fn new(ideal: i16, min: i16, max: i16) -> Self {
        Self { ideal, min, max }
    }

    #[inline]
    pub const fn is_immune(&self) -> bool {
        self.max < 0
    }

    #[inline]
    pub const fn contains(&self, value: i16) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for AxisTolerance {
    /// Default race window: 15..85 centred on 50.
    fn default() -> Self {
        Self::new(50, 15, 85)
    }
}

/// Race definition consulted by the evaluators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Race {
    pub tolerances: [AxisTolerance; ScoreConfig::ENV_AXES],
    pub primary_trait: PrimaryTrait,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lesser_traits: LesserTraits,
    /// Colonists needed to generate one resource.
    pub colonists_per_resource: u32,
    /// Resources produced by every 10 factories.
    pub factory_output: u32,
    /// Factories operated per 10,000 colonists.
    pub factories_operated: u32,
}

impl Race {
    #[inline]
    pub fn tolerance(&self, axis: EnvAxis) -> &AxisTolerance {
        &self.tolerances[axis.index()]
    }

    #[inline]
    pub fn has_trait(&self, traits: LesserTraits) -> bool {
        self.lesser_traits.contains(traits)
    }
}

impl Default for Race {
    fn default() -> Self {
        Self {
            tolerances: [AxisTolerance::default(); ScoreConfig::ENV_AXES],
            primary_trait: PrimaryTrait::default(),
            lesser_traits: LesserTraits::empty(),
            colonists_per_resource: 1000,
            factory_output: 10,
            factories_operated: 10,
        }
    }
}

/// Research fields, in tech-array order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TechField {
    Energy = 0,
    Weapons = 1,
    Propulsion = 2,
    Construction = 3,
    Electronics = 4,
    Biotechnology = 5,
}

impl TechField {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Tech level per research field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TechLevels(pub [u16; ScoreConfig::TECH_FIELDS]);

impl TechLevels {
    pub const fn new(levels: [u16; ScoreConfig::TECH_FIELDS]) -> Self {
        Self(levels)
    }

    #[inline]
    pub fn get(&self, field: TechField) -> u16 {
        self.0[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }
}

/// A player as seen by the evaluation engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub race: Race,
    pub tech: TechLevels,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: PlayerFlags,
    pub designs: [ShipDesign; ScoreConfig::MAX_DESIGNS],
}

impl Player {
    /// Creates a player with an empty design table.
    pub fn new(id: PlayerId, race: Race) -> Self {
        Self {
            id,
            race,
            tech: TechLevels::default(),
            flags: PlayerFlags::empty(),
            designs: array::from_fn(|_| ShipDesign::empty()),
        }
    }

    #[must_use]
    pub fn with_tech(mut self, tech: TechLevels) -> Self {
        self.tech = tech;
        self
    }

    /// Installs a design into a slot (builder pattern). Out-of-range slots are ignored.
    #[must_use]
    pub fn with_design(mut self, slot: DesignSlot, design: ShipDesign) -> Self {
        if let Some(entry) = self.designs.get_mut(slot.index()) {
            *entry = design;
        }
        self
    }

    #[must_use]
    pub fn eliminated(mut self) -> Self {
        self.flags.insert(PlayerFlags::ELIMINATED);
        self
    }

    #[inline]
    pub fn is_eliminated(&self) -> bool {
        self.flags.contains(PlayerFlags::ELIMINATED)
    }

    #[inline]
    pub fn design(&self, slot: DesignSlot) -> Option<&ShipDesign> {
        self.designs.get(slot.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn primary_trait_indices_match_race_record() {
        assert_eq!(PrimaryTrait::HyperExpansion.index(), 0);
        assert_eq!(PrimaryTrait::AlternateReality.index(), 8);
        assert_eq!(PrimaryTrait::JackOfAllTrades.index(), 9);
        assert_eq!(PrimaryTrait::from_str("ar").unwrap(), PrimaryTrait::AlternateReality);
        assert_eq!(PrimaryTrait::HyperExpansion.to_string(), "HE");
    }

    #[test]
    fn lesser_traits_are_checked_by_containment() {
        let mut race = Race::default();
        assert!(!race.has_trait(LesserTraits::ONLY_BASIC_REMOTE_MINING));
        race.lesser_traits = LesserTraits::ONLY_BASIC_REMOTE_MINING | LesserTraits::CHEAP_ENGINES;
        assert!(race.has_trait(LesserTraits::ONLY_BASIC_REMOTE_MINING));
        assert!(!race.has_trait(LesserTraits::ONLY_BASIC_REMOTE_MINING | LesserTraits::NO_ADVANCED_SCANNERS));
    }

    #[test]
    fn immune_axis_has_negative_max() {
        assert!(AxisTolerance::IMMUNE.is_immune());
        assert!(!AxisTolerance::default().is_immune());
        assert!(AxisTolerance::default().contains(15));
        assert!(!AxisTolerance::default().contains(86));
    }

    #[test]
    fn new_player_has_only_empty_designs() {
        let player = Player::new(PlayerId(3), Race::default());
        assert!(player.designs.iter().all(|d| d.is_deleted()));
        assert!(player.design(DesignSlot(16)).is_none());
        assert!(!player.is_eliminated());
        assert!(player.eliminated().is_eliminated());
    }
}
