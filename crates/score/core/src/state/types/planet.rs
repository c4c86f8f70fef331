use super::common::{DesignSlot, PlanetId, PlayerId};
use crate::config::ScoreConfig;

/// Planetary environment axes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EnvAxis {
    Gravity = 0,
    Temperature = 1,
    Radiation = 2,
}

impl EnvAxis {
    pub const ALL: [EnvAxis; ScoreConfig::ENV_AXES] =
        [EnvAxis::Gravity, EnvAxis::Temperature, EnvAxis::Radiation];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Environment values of a planet, one per axis, each in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Environment(pub [i16; ScoreConfig::ENV_AXES]);

impl Environment {
    pub const MIN_VALUE: i16 = 1;
    pub const MAX_VALUE: i16 = 100;

    pub const fn new(gravity: i16, temperature: i16, radiation: i16) -> Self {
        Self([gravity, temperature, radiation])
    }

    #[inline]
    pub fn get(&self, axis: EnvAxis) -> i16 {
        self.0[axis.index()]
    }

    #[inline]
    pub const fn in_domain(value: i16) -> bool {
        value >= Self::MIN_VALUE && value <= Self::MAX_VALUE
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(50, 50, 50)
    }
}

/// A planet in the turn snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Planet {
    pub id: PlanetId,
    pub owner: Option<PlayerId>,
    /// Colonist count.
    pub population: u32,
    pub environment: Environment,
    /// Installed factories; how many run is decided by the rules oracle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub factories: u32,
    /// Starbase design slot in the owner's design table, if a starbase orbits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub starbase: Option<DesignSlot>,
}

impl Planet {
    /// Creates an unowned, uninhabited planet.
    pub fn new(id: PlanetId, environment: Environment) -> Self {
        Self {
            id,
            owner: None,
            population: 0,
            environment,
            factories: 0,
            starbase: None,
        }
    }

    #[must_use]
    pub fn owned_by(mut self, owner: PlayerId, population: u32) -> Self {
        self.owner = Some(owner);
        self.population = population;
        self
    }

    #[must_use]
    pub fn with_factories(mut self, factories: u32) -> Self {
        self.factories = factories;
        self
    }

    #[must_use]
    pub fn with_starbase(mut self, slot: DesignSlot) -> Self {
        self.starbase = Some(slot);
        self
    }

    #[inline]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}
