//! Tuning loader.

use std::path::Path;

use horror_core::config::{CircuitConfig, MotionConfig, PlayerConfig};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// All tunable parameters of a session.
///
/// Every section is optional in the file; missing sections and fields fall
/// back to the horror-core defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerConfig,
    pub motion: MotionConfig,
    pub circuit: CircuitConfig,
}

/// Loader for tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load tuning from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing [`Tuning`] sections
    pub fn load(path: &Path) -> LoadResult<Tuning> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Tuning> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let tuning = ConfigLoader::parse(
            r#"
            [player]
            run_speed = 7.5

            [circuit]
            disable_when_connected = true
            "#,
        )
        .unwrap();

        assert_eq!(tuning.player.run_speed, 7.5);
        assert_eq!(tuning.player.walk_speed, PlayerConfig::default().walk_speed);
        assert_eq!(tuning.motion, MotionConfig::default());
        assert!(tuning.circuit.disable_when_connected);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), Tuning::default());
    }
}
