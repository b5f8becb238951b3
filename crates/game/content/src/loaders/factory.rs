//! Content factory for loading everything a session needs from one directory.

use std::path::{Path, PathBuf};

use horror_core::circuit::CircuitPuzzle;

use crate::MotionLibrary;
use crate::loaders::{CircuitLayoutLoader, ConfigLoader, LoadResult, MotionPresetLoader, Tuning};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── motion.ron
/// └── circuits/
///     ├── fuse_box.ron
///     └── generator.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load tuning from `config.toml`, or defaults if the file is absent.
    pub fn load_tuning(&self) -> LoadResult<Tuning> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no tuning file, using defaults");
            return Ok(Tuning::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load motion presets from `motion.ron`.
    pub fn load_motion(&self) -> LoadResult<MotionLibrary> {
        MotionPresetLoader::load(&self.data_dir.join("motion.ron"))
    }

    /// Load and build the circuit from `circuits/{name}.ron`.
    pub fn load_circuit(&self, name: &str) -> LoadResult<CircuitPuzzle> {
        let path = self.data_dir.join("circuits").join(format!("{name}.ron"));
        CircuitLayoutLoader::load_puzzle(&path)
    }
}
