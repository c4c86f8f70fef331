mod common;
mod design;
mod fleet;
mod planet;
mod player;

pub use common::{DesignSlot, FleetId, HullId, PartId, PlanetId, PlayerId};
pub use design::{DesignFlags, HardwareSlot, Loadout, PartCategory, ShipDesign};
pub use fleet::{Fleet, FleetFlags};
pub use planet::{EnvAxis, Environment, Planet};
pub use player::{
    AxisTolerance, LesserTraits, Player, PlayerFlags, PrimaryTrait, Race, TechField,
    TechLevels,
};
