//! Scripted input for headless player sessions.
//!
//! A script is a list of phases, each holding one input and physics sample
//! for a number of frames. One-shot presses only fire on a phase's first
//! frame, the way a host would report them.

use glam::{Vec2, Vec3};
use horror_core::oracle::{InputActions, InputSnapshot, PhysicsSnapshot, TransformSink};
use horror_core::player::PlayerStateKey;
use serde::{Deserialize, Serialize};
use state_machine::Step;
use tracing::debug;

use crate::api::Result;
use crate::session::PlayerSession;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptPhase {
    #[serde(default)]
    pub label: String,
    pub frames: u32,
    #[serde(default)]
    pub input: InputSnapshot,
    #[serde(default)]
    pub physics: PhysicsSnapshot,
}

impl ScriptPhase {
    pub fn new(label: impl Into<String>, frames: u32) -> Self {
        Self {
            label: label.into(),
            frames,
            input: InputSnapshot::default(),
            physics: PhysicsSnapshot::default(),
        }
    }

    pub fn with_input(mut self, input: InputSnapshot) -> Self {
        self.input = input;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsSnapshot) -> Self {
        self.physics = physics;
        self
    }

    /// Input for the `index`-th frame of this phase.
    fn input_at(&self, index: u32) -> InputSnapshot {
        let mut input = self.input;
        if index > 0 {
            input.pressed = InputActions::empty();
        }
        input
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerScript {
    /// Seconds per frame.
    pub dt: f32,
    pub phases: Vec<ScriptPhase>,
}

/// Summary of a script run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptOutcome {
    pub frames: u64,
    pub transitions: Vec<(PlayerStateKey, PlayerStateKey)>,
    pub preset_swaps: usize,
    pub final_state: PlayerStateKey,
    /// Largest combined offset magnitude seen over the run.
    pub peak_offset: f32,
}

impl PlayerScript {
    pub const DEFAULT_DT: f32 = 1.0 / 60.0;

    pub fn new(phases: Vec<ScriptPhase>) -> Self {
        Self {
            dt: Self::DEFAULT_DT,
            phases,
        }
    }

    /// Stand, walk, run, jump and land.
    pub fn demo() -> Self {
        let walk_input = InputSnapshot {
            move_axis: Vec2::Y,
            ..InputSnapshot::default()
        };
        let walking = PhysicsSnapshot {
            velocity: Vec3::new(0.0, 0.0, 3.0),
            ..PhysicsSnapshot::default()
        };
        let run_input = InputSnapshot {
            held: InputActions::RUN,
            ..walk_input
        };
        let running = PhysicsSnapshot {
            velocity: Vec3::new(0.0, 0.0, 5.5),
            ..PhysicsSnapshot::default()
        };
        let airborne = PhysicsSnapshot {
            grounded: false,
            velocity: Vec3::new(0.0, 2.0, 5.5),
            ..PhysicsSnapshot::default()
        };

        Self::new(vec![
            ScriptPhase::new("stand", 30),
            ScriptPhase::new("walk", 90)
                .with_input(walk_input)
                .with_physics(walking),
            ScriptPhase::new("run", 90)
                .with_input(run_input)
                .with_physics(running),
            ScriptPhase::new("take off", 1)
                .with_input(InputSnapshot {
                    pressed: InputActions::JUMP,
                    ..run_input
                })
                .with_physics(running),
            ScriptPhase::new("airborne", 40)
                .with_input(run_input)
                .with_physics(airborne),
            ScriptPhase::new("land", 60),
        ])
    }

    pub fn total_frames(&self) -> u64 {
        self.phases.iter().map(|phase| u64::from(phase.frames)).sum()
    }

    /// Frame inputs in order, repeating the script until `limit` frames.
    pub fn frames(&self, limit: u64) -> impl Iterator<Item = (InputSnapshot, PhysicsSnapshot)> + '_ {
        self.phases
            .iter()
            .flat_map(|phase| (0..phase.frames).map(move |i| (phase.input_at(i), phase.physics)))
            .cycle()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
    }

    /// Runs `limit` frames against `session`, or the whole script once when
    /// `limit` is `None`.
    pub fn run<S: TransformSink>(
        &self,
        session: &mut PlayerSession<S>,
        limit: Option<u64>,
    ) -> Result<ScriptOutcome> {
        let limit = limit.unwrap_or_else(|| self.total_frames());
        let mut outcome = ScriptOutcome {
            frames: 0,
            transitions: Vec::new(),
            preset_swaps: 0,
            final_state: session.active(),
            peak_offset: 0.0,
        };

        for (input, physics) in self.frames(limit) {
            let report = session.step(input, physics, self.dt)?;
            if let Step::Transitioned { from, to } = report.step {
                outcome.transitions.push((from, to));
            }
            if report.preset_swapped {
                outcome.preset_swaps += 1;
            }
            outcome.peak_offset = outcome.peak_offset.max(report.offset.magnitude());
            outcome.frames += 1;
        }

        outcome.final_state = session.active();
        debug!(
            target: "player",
            frames = outcome.frames,
            transitions = outcome.transitions.len(),
            "script finished"
        );
        Ok(outcome)
    }
}

impl Default for PlayerScript {
    fn default() -> Self {
        Self::demo()
    }
}
