//! Run a scripted player session headlessly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use horror_content::{ConfigLoader, ContentFactory, MotionPresetLoader};
use horror_core::oracle::RecordingTransform;
use horror_core::player::PlayerStateKey;
use horror_runtime::{PlayerScript, PlayerSessionBuilder};

use crate::config::SimConfig;

/// Drive the player state machine and motion blender for a number of frames
#[derive(Parser)]
pub struct PlayerCmd {
    /// Motion preset catalog (RON)
    #[arg(value_name = "PRESETS")]
    presets: PathBuf,

    /// Frames to simulate; the script repeats until this many have run
    #[arg(short, long, value_name = "N")]
    frames: Option<u64>,

    /// Tuning file (TOML); defaults to `config.toml` in the data directory
    #[arg(short, long, value_name = "PATH")]
    tuning: Option<PathBuf>,

    /// Input script (RON); defaults to the built-in walk/run/jump script
    #[arg(short, long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// State the player starts in
    #[arg(long, value_name = "STATE", default_value = "idle", value_parser = parse_state)]
    start: PlayerStateKey,
}

impl PlayerCmd {
    pub fn execute(self, config: &SimConfig) -> Result<()> {
        let library = MotionPresetLoader::load(&self.presets)?;
        let tuning = match &self.tuning {
            Some(path) => ConfigLoader::load(path)?,
            None => ContentFactory::new(&config.data_dir).load_tuning()?,
        };
        let mut script = match &self.script {
            Some(path) => load_script(path)?,
            None => PlayerScript::demo(),
        };
        if self.script.is_none() {
            script.dt = config.frame_dt;
        }

        let mut session = PlayerSessionBuilder::new(self.start)
            .player_config(tuning.player)
            .motion_config(tuning.motion)
            .library(library)
            .build(RecordingTransform::default())?;

        let frames = self.frames.unwrap_or(config.frames);
        let outcome = script.run(&mut session, Some(frames))?;

        println!("frames:       {}", outcome.frames);
        println!("final state:  {}", outcome.final_state);
        println!("preset swaps: {}", outcome.preset_swaps);
        println!("peak offset:  {:.4}", outcome.peak_offset);
        println!("transitions:");
        for (from, to) in &outcome.transitions {
            println!("  {from} -> {to}");
        }
        if let Some(last) = session.sink().last() {
            println!(
                "last offset:  position {:?} rotation {:?}",
                last.position.to_array(),
                last.rotation.to_array()
            );
        }

        Ok(())
    }
}

fn parse_state(value: &str) -> Result<PlayerStateKey, String> {
    value
        .parse()
        .map_err(|_| format!("unknown player state `{value}`"))
}

fn load_script(path: &Path) -> Result<PlayerScript> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    ron::from_str(&content).with_context(|| format!("Failed to parse script: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn script_phases_default_to_standing_still() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(dt: 0.02, phases: [(label: "wait", frames: 10), (frames: 5)])"#
        )
        .unwrap();

        let script = load_script(file.path()).unwrap();
        assert_eq!(script.dt, 0.02);
        assert_eq!(script.total_frames(), 15);
        assert_eq!(script.phases[1].label, "");
        assert!(script.phases[0].physics.grounded);
    }

    #[test]
    fn start_state_parses_by_name() {
        assert_eq!(parse_state("crouch"), Ok(PlayerStateKey::Crouch));
        assert!(parse_state("flying").is_err());
    }

    #[test]
    fn unreadable_script_names_the_path() {
        let err = load_script(Path::new("no/such/script.ron")).unwrap_err();
        assert!(format!("{err}").contains("no/such/script.ron"));
    }
}
