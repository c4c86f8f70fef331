//! Maximum population a planet supports for a race.

use super::error::EvalError;
use super::habitability::planet_habitability;
use crate::env::{OracleError, TablesOracle};
use crate::state::{LesserTraits, Planet, Player, PrimaryTrait};

/// Capacity floor for marginal and hostile planets.
const MIN_CAPACITY: i64 = 500;
/// Habitability below which the floor applies.
const MARGINAL_HABITABILITY: i64 = 5;
/// Colonists per habitability percent.
const COLONISTS_PER_PERCENT: i64 = 100;

/// Computes the colonist capacity of `planet` for `player`.
///
/// Alternate Reality races live in orbit: capacity comes from the orbital table
/// entry of the starbase hull and is zero without an owned starbase. Every
/// other race scales with habitability, adjusted by Hyper-Expansion (halved)
/// or Jack-of-all-Trades (plus a fifth). Only Basic Remote Mining adds a tenth
/// last, for every race.
///
/// # Errors
///
/// Propagates habitability errors, an unresolvable starbase design slot, and a
/// missing orbital table entry.
pub fn max_population<T>(planet: &Planet, player: &Player, tables: &T) -> Result<i64, EvalError>
where
    T: TablesOracle + ?Sized,
{
    let race = &player.race;

    let mut capacity = if race.primary_trait.is_alternate_reality() {
        let Some(slot) = planet.starbase.filter(|_| planet.is_owned_by(player.id)) else {
            return Ok(0);
        };
        let design = player
            .design(slot)
            .ok_or(EvalError::DesignSlotOutOfRange {
                player: player.id,
                slot,
            })?;
        tables
            .orbital_capacity(design.hull)
            .ok_or(OracleError::OrbitalEntryNotFound(design.hull))?
    } else {
        let habitability = i64::from(planet_habitability(planet, player)?);
        let base = if habitability < MARGINAL_HABITABILITY {
            MIN_CAPACITY
        } else {
            habitability * COLONISTS_PER_PERCENT
        };
        match race.primary_trait {
            PrimaryTrait::HyperExpansion => base - base / 2,
            PrimaryTrait::JackOfAllTrades => base + base / 5,
            _ => base,
        }
    };

    if race.has_trait(LesserTraits::ONLY_BASIC_REMOTE_MINING) {
        capacity += capacity / 10;
    }

    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::OrbitalCapacityTable;
    use crate::eval::Degenerate;
    use crate::state::{
        AxisTolerance, DesignSlot, Environment, HullId, PlanetId, PlayerId, Race, ShipDesign,
    };

    fn race(primary_trait: PrimaryTrait) -> Race {
        Race {
            primary_trait,
            ..Race::default()
        }
    }

    fn planet(g: i16) -> Planet {
        Planet::new(PlanetId(4), Environment::new(g, 50, 50))
    }

    fn table() -> OrbitalCapacityTable {
        OrbitalCapacityTable::from_capacities(&[250_000, 500_000])
    }

    #[test]
    fn scales_with_habitability_and_primary_trait() {
        let ideal = planet(50);
        let se = Player::new(PlayerId(0), race(PrimaryTrait::SuperStealth));
        let he = Player::new(PlayerId(0), race(PrimaryTrait::HyperExpansion));
        let joat = Player::new(PlayerId(0), race(PrimaryTrait::JackOfAllTrades));
        assert_eq!(max_population(&ideal, &se, &table()), Ok(10_000));
        assert_eq!(max_population(&ideal, &he, &table()), Ok(5_000));
        assert_eq!(max_population(&ideal, &joat, &table()), Ok(12_000));
    }

    #[test]
    fn marginal_planets_get_the_floor() {
        let se = Player::new(PlayerId(0), race(PrimaryTrait::SuperStealth));
        assert_eq!(max_population(&planet(1), &se, &table()), Ok(500));
        let he = Player::new(PlayerId(0), race(PrimaryTrait::HyperExpansion));
        assert_eq!(max_population(&planet(1), &he, &table()), Ok(250));
    }

    #[test]
    fn remote_mining_trait_adds_a_tenth_last() {
        let mut joat = race(PrimaryTrait::JackOfAllTrades);
        joat.lesser_traits = LesserTraits::ONLY_BASIC_REMOTE_MINING;
        let player = Player::new(PlayerId(0), joat);
        assert_eq!(max_population(&planet(50), &player, &table()), Ok(13_200));
    }

    #[test]
    fn alternate_reality_needs_an_owned_starbase() {
        let player = Player::new(PlayerId(2), race(PrimaryTrait::AlternateReality))
            .with_design(DesignSlot(3), ShipDesign::new(HullId(0x21)));

        let bare = planet(50).owned_by(PlayerId(2), 1000);
        assert_eq!(max_population(&bare, &player, &table()), Ok(0));

        let foreign = planet(50)
            .owned_by(PlayerId(1), 1000)
            .with_starbase(DesignSlot(3));
        assert_eq!(max_population(&foreign, &player, &table()), Ok(0));

        let home = planet(50)
            .owned_by(PlayerId(2), 1000)
            .with_starbase(DesignSlot(3));
        assert_eq!(max_population(&home, &player, &table()), Ok(500_000));
    }

    #[test]
    fn alternate_reality_ignores_habitability() {
        let mut ar = race(PrimaryTrait::AlternateReality);
        ar.tolerances[0] = AxisTolerance::new(85, 15, 85);
        let player = Player::new(PlayerId(2), ar)
            .with_design(DesignSlot(0), ShipDesign::new(HullId(0x20)));
        // Ideal on the upper bound would be degenerate for a planet-bound race.
        let home = planet(85).owned_by(PlayerId(2), 1).with_starbase(DesignSlot(0));
        assert_eq!(max_population(&home, &player, &table()), Ok(250_000));
    }

    #[test]
    fn missing_orbital_entry_is_an_invalid_reference() {
        let player = Player::new(PlayerId(2), race(PrimaryTrait::AlternateReality))
            .with_design(DesignSlot(0), ShipDesign::new(HullId(0x30)));
        let home = planet(50).owned_by(PlayerId(2), 1).with_starbase(DesignSlot(0));
        assert_eq!(
            max_population(&home, &player, &table()),
            Err(EvalError::Oracle(OracleError::OrbitalEntryNotFound(HullId(0x30))))
        );
    }

    #[test]
    fn degenerate_habitability_propagates() {
        let mut se = race(PrimaryTrait::SuperStealth);
        se.tolerances[0] = AxisTolerance::new(50, 15, 50);
        let player = Player::new(PlayerId(0), se);
        let err = max_population(&planet(50), &player, &table()).unwrap_err();
        assert!(matches!(
            err,
            EvalError::ArithmeticDegenerate {
                degenerate: Degenerate::ToleranceRangeHalf { .. },
                ..
            }
        ));
    }
}
