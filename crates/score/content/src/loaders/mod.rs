//! Content loaders for reading game data from files.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod tables;
pub mod turn;

pub use catalog::{HullLoader, PartLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use tables::TablesLoader;
pub use turn::TurnLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!("loading {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
