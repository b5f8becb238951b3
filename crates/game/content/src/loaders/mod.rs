//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into horror-core
//! values.

pub mod circuit;
pub mod config;
pub mod factory;
pub mod motion;

pub use circuit::CircuitLayoutLoader;
pub use config::{ConfigLoader, Tuning};
pub use factory::ContentFactory;
pub use motion::MotionPresetLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
