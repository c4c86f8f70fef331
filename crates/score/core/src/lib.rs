//! Deterministic player evaluation for Stars! turns.
//!
//! `score-core` rates planets, ship designs and whole empires from a read-only
//! turn snapshot. Evaluators are pure functions over borrowed state and
//! oracles; [`engine::ScoreEngine`] runs them in order and produces a
//! [`eval::Score`] per player. Game data that is not part of the turn (hull and
//! part tables, the orbital capacity table, movement rules) is reached through
//! the oracle traits in [`env`].
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod eval;
pub mod state;

pub use config::{FailurePolicy, ScoreConfig};
pub use engine::{DesignRating, Ranking, ScoreEngine, ScoreReport, ScoreSheet, Substitution};
pub use env::{
    DesignSpeed, Env, HullDefinition, HullOracle, HullsSnapshot, OracleError, OracleSnapshot,
    OrbitalCapacityTable, PackOracle, PackedCount, PartDefinition, PartFlags, PartOracle,
    PartsSnapshot, RulesOracle, RulesSnapshot, SaturatingPack, ScoreEnv, SnapshotOracleBundle,
    TablesOracle,
};
pub use error::{ErrorKind, ErrorSeverity, GameError};
pub use eval::{
    Degenerate, EvalError, PlanetResources, PowerBreakdown, Score, ScoreRecord, ShipClass,
    ShipCounts, ShipTally, design_power, max_population, planet_habitability, planet_resources,
    tech_points,
};
pub use state::{
    AxisTolerance, DesignFlags, DesignSlot, EnvAxis, Environment, Fleet, FleetFlags, FleetId,
    HardwareSlot, HullId, LesserTraits, PartCategory, PartId, Planet, PlanetId, Player,
    PlayerFlags, PlayerId, PrimaryTrait, Race, ShipDesign, StateError, TechField,
    TechLevels, TurnState,
};
