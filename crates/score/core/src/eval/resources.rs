//! Resources a planet yields its owner each turn.

use super::arith::sqrt_trunc;
use super::error::{Degenerate, EvalError};
use super::population::max_population;
use crate::env::ScoreEnv;
use crate::state::{Planet, Player, PlanetId, TechField};

/// Intermediate values of one planet's resource computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanetResources {
    pub planet: PlanetId,
    pub max_population: i64,
    /// Population after overcrowding attrition.
    pub effective_population: i64,
    pub from_population: i64,
    pub from_factories: i64,
    pub resources: i64,
}

impl PlanetResources {
    fn empty(planet: PlanetId) -> Self {
        Self {
            planet,
            ..Self::default()
        }
    }
}

/// Computes the resources `planet` produces for `player`.
///
/// Population above capacity counts at half. Alternate Reality races yield
/// `sqrt(energy * population / colonists_per_resource)`; everyone else earns
/// one resource per `colonists_per_resource` colonists plus factory output,
/// rounded up per ten factories. A populated planet always yields at least one.
///
/// # Errors
///
/// - [`Degenerate::ColonistsPerResource`] when the race stat is zero
/// - errors from [`max_population`] and missing tables or rules oracles
pub fn planet_resources(
    planet: &Planet,
    player: &Player,
    env: &ScoreEnv<'_>,
) -> Result<PlanetResources, EvalError> {
    if planet.population == 0 {
        return Ok(PlanetResources::empty(planet.id));
    }

    let race = &player.race;
    let colonists_per_resource = i64::from(race.colonists_per_resource);
    if colonists_per_resource == 0 {
        return Err(EvalError::degenerate(
            player.id,
            Degenerate::ColonistsPerResource,
        ));
    }

    let population = i64::from(planet.population);
    let capacity = max_population(planet, player, env.tables()?)?;
    // Overflow is only halved, never capped.
    let effective = if population > capacity {
        capacity + (population - capacity) / 2
    } else {
        population
    };

    let (from_population, from_factories) = if race.primary_trait.is_alternate_reality() {
        let energy = i64::from(player.tech.get(TechField::Energy)).max(1);
        let yield_ =
            sqrt_trunc(energy as f64 * effective as f64 / colonists_per_resource as f64);
        (yield_, 0)
    } else {
        let factories = i64::from(env.rules()?.operable_factories(planet, race));
        let output = i64::from(race.factory_output);
        (effective / colonists_per_resource, (factories * output + 9) / 10)
    };

    let resources = (from_population + from_factories).max(1);

    tracing::trace!(
        "resources of {} for {}: {} (effective population {} of capacity {})",
        planet.id,
        player.id,
        resources,
        effective,
        capacity
    );

    Ok(PlanetResources {
        planet: planet.id,
        max_population: capacity,
        effective_population: effective,
        from_population,
        from_factories,
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{OracleSnapshot, OrbitalCapacityTable, SnapshotOracleBundle};
    use crate::error::{ErrorKind, GameError};
    use crate::state::{
        DesignSlot, Environment, HullId, PlayerId, PrimaryTrait, Race, ShipDesign, TechLevels,
    };

    fn oracles() -> OracleSnapshot {
        OracleSnapshot {
            orbital: OrbitalCapacityTable::from_capacities(&[2_000]),
            ..OracleSnapshot::default()
        }
    }

    fn planet(population: u32, factories: u32) -> Planet {
        Planet::new(PlanetId(1), Environment::default())
            .owned_by(PlayerId(0), population)
            .with_factories(factories)
    }

    fn super_stealth() -> Race {
        Race {
            primary_trait: PrimaryTrait::SuperStealth,
            ..Race::default()
        }
    }

    #[test]
    fn unpopulated_planet_yields_nothing() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let player = Player::new(PlayerId(0), super_stealth());
        let out = planet_resources(&planet(0, 50), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.resources, 0);
    }

    #[test]
    fn factories_round_up_per_ten() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let player = Player::new(PlayerId(0), super_stealth());
        // 8000 colonists run 8 factories: 8 + (8 * 10 + 9) / 10 = 16.
        let out = planet_resources(&planet(8_000, 12), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.from_population, 8);
        assert_eq!(out.from_factories, 8);
        assert_eq!(out.resources, 16);

        let race = Race {
            factory_output: 7,
            ..super_stealth()
        };
        let player = Player::new(PlayerId(0), race);
        // (8 * 7 + 9) / 10 = 6
        let out = planet_resources(&planet(8_000, 12), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.from_factories, 6);
    }

    #[test]
    fn overcrowding_counts_at_half() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let player = Player::new(PlayerId(0), super_stealth());
        let out = planet_resources(&planet(14_000, 0), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.max_population, 10_000);
        assert_eq!(out.effective_population, 12_000);
        assert_eq!(out.resources, 12);
    }

    #[test]
    fn tiny_colony_yields_at_least_one() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let player = Player::new(PlayerId(0), super_stealth());
        let out = planet_resources(&planet(100, 0), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.resources, 1);
    }

    #[test]
    fn alternate_reality_uses_energy_tech() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let race = Race {
            primary_trait: PrimaryTrait::AlternateReality,
            ..Race::default()
        };
        let player = Player::new(PlayerId(0), race)
            .with_tech(TechLevels::new([9, 0, 0, 0, 0, 0]))
            .with_design(DesignSlot(0), ShipDesign::new(HullId(0x20)));
        let home = planet(1_000, 500).with_starbase(DesignSlot(0));
        // sqrt(9 * 1000 / 1000) = 3; factories do nothing.
        let out = planet_resources(&home, &player, &bundle.as_env()).unwrap();
        assert_eq!(out.resources, 3);
        assert_eq!(out.from_factories, 0);

        // No starbase: capacity 0, so half the colonists count. Energy 0 counts as 1.
        let player = player.with_tech(TechLevels::default());
        let out = planet_resources(&planet(1_000, 0), &player, &bundle.as_env()).unwrap();
        assert_eq!(out.max_population, 0);
        assert_eq!(out.effective_population, 500);
        assert_eq!(out.resources, 1);
    }

    #[test]
    fn zero_colonists_per_resource_is_degenerate() {
        let snapshot = oracles();
        let bundle = SnapshotOracleBundle::new(&snapshot);
        let race = Race {
            colonists_per_resource: 0,
            ..super_stealth()
        };
        let player = Player::new(PlayerId(0), race);
        let err = planet_resources(&planet(1_000, 0), &player, &bundle.as_env()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArithmeticDegenerate);
    }
}
