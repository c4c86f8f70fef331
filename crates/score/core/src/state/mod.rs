//! Read-only turn snapshot consumed by the evaluators.
//!
//! [`TurnState`] owns every player, planet and fleet of one turn. The engine only
//! ever borrows it; nothing in this crate mutates a snapshot after it is built.
mod error;
pub mod types;

use std::collections::BTreeSet;

pub use error::StateError;
pub use types::*;

use crate::config::ScoreConfig;

/// One turn of game state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub year: u16,
    pub players: Vec<Player>,
    pub planets: Vec<Planet>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fleets: Vec<Fleet>,
}

impl TurnState {
    pub fn new(year: u16) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn with_planet(mut self, planet: Planet) -> Self {
        self.planets.push(planet);
        self
    }

    #[must_use]
    pub fn with_fleet(mut self, fleet: Fleet) -> Self {
        self.fleets.push(fleet);
        self
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == id)
    }

    /// Planets owned by `player`, in snapshot order.
    pub fn planets_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Planet> + '_ {
        self.planets
            .iter()
            .filter(move |planet| planet.is_owned_by(player))
    }

    /// Fleets owned by `player`, in snapshot order, including fleets in transit.
    pub fn fleets_owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Fleet> + '_ {
        self.fleets.iter().filter(move |fleet| fleet.owner == player)
    }

    /// Player ids in ascending order.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.players.iter().map(|player| player.id).collect();
        ids.sort_unstable();
        ids
    }

    /// Checks the structural invariants the evaluators rely on.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] found, scanning players, then planets,
    /// then fleets.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut players = BTreeSet::new();
        for player in &self.players {
            if player.id.index() >= ScoreConfig::MAX_PLAYERS {
                return Err(StateError::PlayerOutOfRange(player.id));
            }
            if !players.insert(player.id) {
                return Err(StateError::DuplicatePlayer(player.id));
            }
            for axis in EnvAxis::ALL {
                let tol = player.race.tolerance(axis);
                if !tol.is_immune() && !(tol.min <= tol.ideal && tol.ideal <= tol.max) {
                    return Err(StateError::ToleranceInverted {
                        player: player.id,
                        axis,
                        min: tol.min,
                        ideal: tol.ideal,
                        max: tol.max,
                    });
                }
            }
        }

        let mut planets = BTreeSet::new();
        for planet in &self.planets {
            if !planets.insert(planet.id) {
                return Err(StateError::DuplicatePlanet(planet.id));
            }
            for axis in EnvAxis::ALL {
                let value = planet.environment.get(axis);
                if !Environment::in_domain(value) {
                    return Err(StateError::EnvironmentOutOfDomain {
                        planet: planet.id,
                        axis,
                        value,
                    });
                }
            }
            if let Some(owner) = planet.owner
                && !players.contains(&owner)
            {
                return Err(StateError::UnknownOwner {
                    planet: planet.id,
                    owner,
                });
            }
            if let Some(slot) = planet.starbase
                && !slot.is_valid()
            {
                return Err(StateError::StarbaseSlotOutOfRange {
                    planet: planet.id,
                    slot,
                });
            }
        }

        for fleet in &self.fleets {
            if !players.contains(&fleet.owner) {
                return Err(StateError::UnknownFleetOwner {
                    fleet: fleet.id,
                    owner: fleet.owner,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, GameError};

    fn sample() -> TurnState {
        TurnState::new(2400)
            .with_player(Player::new(PlayerId(0), Race::default()))
            .with_player(Player::new(PlayerId(1), Race::default()))
            .with_planet(Planet::new(PlanetId(1), Environment::default()).owned_by(PlayerId(0), 5000))
            .with_planet(Planet::new(PlanetId(2), Environment::default()).owned_by(PlayerId(1), 800))
            .with_planet(Planet::new(PlanetId(3), Environment::default()))
            .with_fleet(Fleet::new(FleetId(1), PlayerId(0)).with_ships(DesignSlot(0), 2))
    }

    #[test]
    fn ownership_queries_filter_by_player() {
        let state = sample();
        let owned: Vec<_> = state.planets_owned_by(PlayerId(0)).map(|p| p.id).collect();
        assert_eq!(owned, vec![PlanetId(1)]);
        assert_eq!(state.fleets_owned_by(PlayerId(1)).count(), 0);
        assert!(state.player(PlayerId(5)).is_none());
        assert_eq!(state.player_ids(), vec![PlayerId(0), PlayerId(1)]);
    }

    #[test]
    fn valid_snapshot_passes() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn rejects_environment_outside_domain() {
        let state = sample().with_planet(Planet::new(PlanetId(9), Environment::new(50, 0, 50)));
        let err = state.validate().unwrap_err();
        assert_eq!(
            err,
            StateError::EnvironmentOutOfDomain {
                planet: PlanetId(9),
                axis: EnvAxis::Temperature,
                value: 0,
            }
        );
        assert_eq!(err.kind(), ErrorKind::MalformedState);
    }

    #[test]
    fn rejects_inverted_tolerance_but_allows_immune() {
        let mut race = Race::default();
        race.tolerances[0] = AxisTolerance::IMMUNE;
        let state = sample().with_player(Player::new(PlayerId(2), race.clone()));
        assert_eq!(state.validate(), Ok(()));

        race.tolerances[1] = AxisTolerance::new(10, 20, 80);
        let state = sample().with_player(Player::new(PlayerId(2), race));
        assert_eq!(
            state.validate().unwrap_err().error_code(),
            "STATE_TOLERANCE_INVERTED"
        );
    }

    #[test]
    fn rejects_dangling_references() {
        let state = sample().with_planet(
            Planet::new(PlanetId(7), Environment::default()).owned_by(PlayerId(4), 100),
        );
        let err = state.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidReference);

        let state = sample().with_fleet(Fleet::new(FleetId(3), PlayerId(9)));
        assert!(matches!(
            state.validate(),
            Err(StateError::UnknownFleetOwner { .. })
        ));

        let state = sample().with_planet(
            Planet::new(PlanetId(8), Environment::default()).with_starbase(DesignSlot(16)),
        );
        assert!(matches!(
            state.validate(),
            Err(StateError::StarbaseSlotOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_duplicates() {
        let state = sample().with_planet(Planet::new(PlanetId(1), Environment::default()));
        assert_eq!(state.validate(), Err(StateError::DuplicatePlanet(PlanetId(1))));

        let state = sample().with_player(Player::new(PlayerId(1), Race::default()));
        assert_eq!(state.validate(), Err(StateError::DuplicatePlayer(PlayerId(1))));
    }
}
