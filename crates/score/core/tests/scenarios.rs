use score_core::{
    AxisTolerance, DesignSlot, EnvAxis, Environment, HardwareSlot, HullId, OracleSnapshot,
    PartCategory, PartDefinition, PartId, PartsSnapshot, Planet, PlanetId, Player, PlayerId,
    PrimaryTrait, Race, RulesSnapshot, ShipClass, ShipDesign, SnapshotOracleBundle, design_power,
    planet_habitability, planet_resources,
};

fn standard_player() -> Player {
    Player::new(PlayerId(0), Race::default())
}

fn habitability(gravity: i16, temperature: i16, radiation: i16, player: &Player) -> i16 {
    let planet = Planet::new(
        PlanetId(1),
        Environment::new(gravity, temperature, radiation),
    );
    planet_habitability(&planet, player).unwrap()
}

#[test]
fn ideal_planet_is_fully_habitable() {
    assert_eq!(habitability(50, 50, 50, &standard_player()), 100);
}

#[test]
fn one_axis_just_outside_tolerance() {
    assert_eq!(habitability(1, 50, 50, &standard_player()), -14);
}

#[test]
fn axis_penalty_is_capped_at_fifteen() {
    assert_eq!(habitability(100, 50, 50, &standard_player()), -15);
}

#[test]
fn penalties_add_across_axes() {
    assert_eq!(habitability(1, 100, 50, &standard_player()), -29);
}

#[test]
fn tolerance_edges_are_still_habitable() {
    // Distance equals the half-range: no comfort, modifier halved.
    assert_eq!(habitability(15, 50, 50, &standard_player()), 40);
    assert_eq!(habitability(85, 50, 50, &standard_player()), 40);
    // Every axis on an edge leaves nothing to scale.
    assert_eq!(habitability(15, 85, 15, &standard_player()), 0);
}

#[test]
fn immune_axis_ignores_environment() {
    let mut race = Race::default();
    race.tolerances[EnvAxis::Gravity.index()] = AxisTolerance::IMMUNE;
    let player = Player::new(PlayerId(0), race);
    assert_eq!(habitability(1, 50, 50, &player), 100);
}

#[test]
fn population_and_factories_both_yield_resources() {
    let race = Race {
        primary_trait: PrimaryTrait::SuperStealth,
        colonists_per_resource: 1000,
        factory_output: 10,
        // Enough operators that all ten factories run on 5,000 colonists.
        factories_operated: 25,
        ..Race::default()
    };
    let player = Player::new(PlayerId(0), race);
    let planet = Planet::new(PlanetId(1), Environment::default())
        .owned_by(PlayerId(0), 5_000)
        .with_factories(10);

    let snapshot = OracleSnapshot::default();
    let bundle = SnapshotOracleBundle::new(&snapshot);
    let resources = planet_resources(&planet, &player, &bundle.as_env()).unwrap();

    assert_eq!(resources.from_population, 5);
    assert_eq!(resources.from_factories, 10);
    assert_eq!(resources.resources, 15);
}

#[test]
fn single_beam_design_is_an_escort() {
    const LASER: PartId = PartId(0x01);
    let snapshot = OracleSnapshot {
        parts: PartsSnapshot::new(vec![PartDefinition::beam(LASER, 10, 1)]),
        rules: RulesSnapshot::default(),
        ..OracleSnapshot::default()
    };
    let bundle = SnapshotOracleBundle::new(&snapshot);
    let env = bundle.as_env();

    let design =
        ShipDesign::new(HullId(1)).with_slot(HardwareSlot::new(PartCategory::Beam, LASER, 2));
    let player = standard_player().with_design(DesignSlot(0), design.clone());

    let power = design_power(
        &player,
        DesignSlot(0),
        &design,
        env.parts().unwrap(),
        env.rules().unwrap(),
    )
    .unwrap();

    assert_eq!(power.beam, 20);
    assert_eq!(power.speed, 4);
    assert_eq!(power.speed_bonus, 0);
    assert_eq!(power.total(), 20);
    assert_eq!(power.class(), ShipClass::Escort);
}
