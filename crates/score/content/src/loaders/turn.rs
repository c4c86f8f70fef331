//! Turn snapshot loader.
//!
//! Turn files list only the design slots and fleet stacks that are in use. The
//! loader expands them into the fixed-size tables of [`TurnState`].

use std::path::Path;

use score_core::{
    DesignFlags, DesignSlot, Fleet, FleetId, HardwareSlot, HullId, Planet, Player, PlayerId, Race,
    ScoreConfig, ShipDesign, TechLevels, TurnState,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Turn structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TurnRon {
    #[serde(default)]
    year: u16,
    players: Vec<PlayerRon>,
    #[serde(default)]
    planets: Vec<Planet>,
    #[serde(default)]
    fleets: Vec<FleetRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRon {
    id: PlayerId,
    race: Race,
    #[serde(default)]
    tech: TechLevels,
    #[serde(default)]
    eliminated: bool,
    #[serde(default)]
    designs: Vec<DesignRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesignRon {
    slot: DesignSlot,
    hull: HullId,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    hardware: Vec<HardwareSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FleetRon {
    id: FleetId,
    owner: PlayerId,
    #[serde(default)]
    in_transit: bool,
    ships: Vec<(DesignSlot, u32)>,
}

/// Loader for turn snapshots from RON files.
pub struct TurnLoader;

impl TurnLoader {
    pub fn load(path: &Path) -> LoadResult<TurnState> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a turn file into a [`TurnState`].
    ///
    /// Only the file layout is checked here: slots must be in range, each slot
    /// listed once, and loadouts must fit. Game-level consistency is left to
    /// [`TurnState::validate`].
    pub fn parse(content: &str) -> LoadResult<TurnState> {
        let data: TurnRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse turn RON: {}", e))?;

        let mut state = TurnState::new(data.year);
        for player in data.players {
            state.players.push(build_player(player)?);
        }
        state.planets = data.planets;
        for fleet in data.fleets {
            state.fleets.push(build_fleet(fleet)?);
        }

        tracing::debug!(
            "turn {}: {} players, {} planets, {} fleets",
            state.year,
            state.players.len(),
            state.planets.len(),
            state.fleets.len()
        );
        Ok(state)
    }
}

fn build_player(data: PlayerRon) -> LoadResult<Player> {
    let mut player = Player::new(data.id, data.race).with_tech(data.tech);
    if data.eliminated {
        player = player.eliminated();
    }

    let mut filled = [false; ScoreConfig::MAX_DESIGNS];
    for entry in data.designs {
        let slot = entry.slot;
        if !slot.is_valid() {
            anyhow::bail!("Player {}: design {} out of range", data.id, slot);
        }
        if std::mem::replace(&mut filled[slot.index()], true) {
            anyhow::bail!("Player {}: design {} listed twice", data.id, slot);
        }

        let mut design = ShipDesign::new(entry.hull);
        if entry.deleted {
            design.flags.insert(DesignFlags::DELETED);
        }
        for hardware in entry.hardware {
            design.try_add_slot(hardware).map_err(|_| {
                anyhow::anyhow!(
                    "Player {}: design {} has more than {} hardware slots",
                    data.id,
                    slot,
                    ScoreConfig::MAX_HARDWARE_SLOTS
                )
            })?;
        }
        player.designs[slot.index()] = design;
    }
    Ok(player)
}

fn build_fleet(data: FleetRon) -> LoadResult<Fleet> {
    let mut fleet = Fleet::new(data.id, data.owner);
    if data.in_transit {
        fleet = fleet.in_transit();
    }
    for (slot, count) in data.ships {
        if !slot.is_valid() {
            anyhow::bail!("{}: design {} out of range", data.id, slot);
        }
        let stack = &mut fleet.ships[slot.index()];
        *stack = stack.saturating_add(count);
    }
    Ok(fleet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_core::{EnvAxis, LesserTraits, PartCategory, PartId, PlanetId, PrimaryTrait};

    const TURN: &str = r#"(
        year: 2431,
        players: [
            (
                id: 2,
                race: (
                    tolerances: (
                        (ideal: 50, min: 15, max: 85),
                        (ideal: 50, min: -1, max: -1),
                        (ideal: 40, min: 20, max: 60),
                    ),
                    primary_trait: AlternateReality,
                    lesser_traits: "ONLY_BASIC_REMOTE_MINING",
                    colonists_per_resource: 700,
                    factory_output: 12,
                    factories_operated: 15,
                ),
                tech: (3, 4, 5, 6, 7, 8),
                designs: [
                    (slot: 0, hull: 5, hardware: [(category: Beam, part: 1, count: 2)]),
                    (slot: 7, hull: 33),
                    (slot: 9, hull: 5, deleted: true),
                ],
            ),
        ],
        planets: [
            (id: 11, owner: Some(2), population: 4000, environment: (30, 60, 90), starbase: Some(7)),
            (id: 12, owner: None, population: 0, environment: (50, 50, 50)),
        ],
        fleets: [
            (id: 1, owner: 2, ships: [(0, 4), (0, 1)]),
            (id: 2, owner: 2, in_transit: true, ships: [(0, 9)]),
        ],
    )"#;

    #[test]
    fn expands_sparse_turn_file() {
        let state = TurnLoader::parse(TURN).unwrap();
        assert_eq!(state.year, 2431);
        state.validate().unwrap();

        let player = state.player(PlayerId(2)).unwrap();
        assert_eq!(player.race.primary_trait, PrimaryTrait::AlternateReality);
        assert!(player.race.tolerance(EnvAxis::Temperature).is_immune());
        assert_eq!(player.race.lesser_traits, LesserTraits::ONLY_BASIC_REMOTE_MINING);
        assert_eq!(player.tech.iter().sum::<u16>(), 33);

        let gun = player.design(DesignSlot(0)).unwrap();
        assert_eq!(
            gun.installed().copied().collect::<Vec<_>>(),
            vec![HardwareSlot::new(PartCategory::Beam, PartId(1), 2)]
        );
        assert!(!player.design(DesignSlot(7)).unwrap().is_deleted());
        assert!(player.design(DesignSlot(9)).unwrap().is_deleted());
        assert!(player.design(DesignSlot(1)).unwrap().is_deleted());

        let planet = state.planet(PlanetId(11)).unwrap();
        assert_eq!(planet.starbase, Some(DesignSlot(7)));
        assert_eq!(planet.factories, 0);

        assert_eq!(state.fleets[0].ships[0], 5);
        assert!(state.fleets[1].is_in_transit());
    }

    #[test]
    fn lesser_traits_are_written_as_flag_names() {
        let turn = r#"(players: [(id: 1, race: (
            tolerances: ((ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85)),
            primary_trait: HyperExpansion,
            lesser_traits: "ONLY_BASIC_REMOTE_MINING | CHEAP_ENGINES",
            colonists_per_resource: 1000, factory_output: 10, factories_operated: 10,
        ))])"#;
        let state = TurnLoader::parse(turn).unwrap();
        let race = &state.player(PlayerId(1)).unwrap().race;
        assert_eq!(
            race.lesser_traits,
            LesserTraits::ONLY_BASIC_REMOTE_MINING | LesserTraits::CHEAP_ENGINES
        );

        let wrapped = turn.replace(
            r#""ONLY_BASIC_REMOTE_MINING | CHEAP_ENGINES""#,
            r#"LesserTraits("CHEAP_ENGINES")"#,
        );
        assert!(TurnLoader::parse(&wrapped).is_err());
    }

    #[test]
    fn rejects_duplicate_design_slots() {
        let turn = r#"(players: [(id: 0, race: (
            tolerances: ((ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85)),
            primary_trait: JackOfAllTrades,
            colonists_per_resource: 1000, factory_output: 10, factories_operated: 10,
        ), designs: [(slot: 3, hull: 1), (slot: 3, hull: 2)])])"#;
        let err = TurnLoader::parse(turn).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn rejects_overfull_hardware_loadout() {
        let hardware = vec!["(category: Armor, part: 1, count: 1)"; ScoreConfig::MAX_HARDWARE_SLOTS + 1];
        let turn = format!(
            r#"(players: [(id: 0, race: (
            tolerances: ((ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85), (ideal: 50, min: 15, max: 85)),
            primary_trait: JackOfAllTrades,
            colonists_per_resource: 1000, factory_output: 10, factories_operated: 10,
        ), designs: [(slot: 0, hull: 1, hardware: [{}])])])"#,
            hardware.join(", ")
        );
        let err = TurnLoader::parse(&turn).unwrap_err();
        assert!(err.to_string().contains("more than 16 hardware slots"));
    }

    #[test]
    fn rejects_fleet_slot_out_of_range() {
        let turn = r#"(players: [], fleets: [(id: 4, owner: 0, ships: [(16, 1)])])"#;
        let err = TurnLoader::parse(turn).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
