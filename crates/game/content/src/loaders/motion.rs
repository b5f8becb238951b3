//! Motion preset loader.

use std::path::Path;

use horror_core::motion::MotionPresetSpec;
use serde::{Deserialize, Serialize};

use crate::MotionLibrary;
use crate::loaders::{LoadResult, read_file};

/// Preset catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionCatalog {
    pub presets: Vec<MotionPresetSpec>,
}

/// Loader for motion presets from RON files.
pub struct MotionPresetLoader;

impl MotionPresetLoader {
    /// Load a motion preset catalog from a RON file.
    ///
    /// A later preset for the same profile replaces an earlier one.
    pub fn load(path: &Path) -> LoadResult<MotionLibrary> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse motion preset RON {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> LoadResult<MotionLibrary> {
        let catalog: MotionCatalog = ron::from_str(content)?;
        let library: MotionLibrary = catalog.presets.into_iter().collect();
        tracing::debug!(presets = library.len(), "motion presets loaded");
        Ok(library)
    }
}
