//! Simulation configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Content directory holding `config.toml`, `motion.ron` and `circuits/`.
    pub data_dir: PathBuf,
    /// Seconds per simulated frame.
    pub frame_dt: f32,
    /// Default frame count for player runs.
    pub frames: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("crates/game/content/data"),
            frame_dt: 1.0 / 60.0,
            frames: 600,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HORROR_DATA_DIR` - Content directory (default: `crates/game/content/data`)
    /// - `HORROR_FRAME_RATE` - Simulated frames per second (default: 60)
    /// - `HORROR_FRAMES` - Frames per player run (default: 600)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HORROR_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(rate) = read_env::<f32>("HORROR_FRAME_RATE")
            && rate > 0.0
        {
            config.frame_dt = 1.0 / rate;
        }

        if let Some(frames) = read_env::<u64>("HORROR_FRAMES") {
            config.frames = frames.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
