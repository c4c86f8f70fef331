//! Data-driven game tables and turn snapshots.
//!
//! This crate turns RON/TOML data files into the inputs `score-core` evaluates:
//! - Hull and part catalogs (RON)
//! - Orbital capacity table and movement rules (RON)
//! - Turn snapshots: players, planets, fleets (RON)
//! - Scoring configuration (TOML)
//!
//! Loaders deserialize straight into score-core types where the file layout
//! matches; turn files use a sparse layout and are expanded on load.

pub mod loaders;

pub use loaders::{ConfigLoader, ContentFactory, HullLoader, PartLoader, TablesLoader, TurnLoader};
