//! Pure evaluators, layered leaf-first.
//!
//! # Architecture
//!
//! ```text
//! [ Habitability (environment vs. race tolerances) ]
//!      ↓
//! [ Population capacity (habitability, or AR orbital table) ]
//!      ↓
//! [ Resource production (capacity, factories, energy tech) ]
//!
//! [ Ship power rating (parts, capacitors, speed) ]      independent of the above
//!      ↓
//! [ Score aggregation (engine::ScoreEngine) ]
//! ```
//!
//! Every evaluator is a free function over borrowed state and oracles. Integer
//! arithmetic truncates toward zero; the two square roots are the only floating
//! point and go through [`arith::sqrt_trunc`].

pub mod arith;
mod error;
mod habitability;
mod population;
mod power;
mod resources;
mod score;

pub use error::{Degenerate, EvalError};
pub use habitability::planet_habitability;
pub use population::max_population;
pub use power::{PowerBreakdown, ShipClass, design_power};
pub use resources::{PlanetResources, planet_resources};
pub use score::{Score, ScoreRecord, ShipCounts, ShipTally, tech_points};
