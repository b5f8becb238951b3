//! Frame-stepped player session.
//!
//! Ties the player state machine to the motion blender: every frame the
//! machine ticks, the motion preset follows the profile requested by the
//! active state, and the blended offset is written to the host's transform.

use std::fmt;

use horror_content::MotionLibrary;
use horror_core::config::{MotionConfig, PlayerConfig};
use horror_core::motion::{MotionBlender, MotionInput, MotionOffset, MotionProfile};
use horror_core::oracle::{
    CollisionOracle, InputSnapshot, NoCollisions, PhysicsSnapshot, TransformSink,
};
use horror_core::player::{
    PlayerContext, PlayerEvent, PlayerStateKey, PlayerStateMachine, StateData,
};
use state_machine::Step;
use tracing::{debug, info};

use crate::api::Result;

/// Session configuration shared by the machine and the blender.
#[derive(Debug, Clone)]
pub struct PlayerSessionConfig {
    pub player: PlayerConfig,
    pub motion: MotionConfig,
    pub initial_state: PlayerStateKey,
}

impl PlayerSessionConfig {
    /// Default tuning starting in `initial_state`.
    pub fn new(initial_state: PlayerStateKey) -> Self {
        Self {
            player: PlayerConfig::default(),
            motion: MotionConfig::default(),
            initial_state,
        }
    }
}

/// What one [`PlayerSession::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    pub step: Step<PlayerStateKey>,
    pub profile: MotionProfile,
    /// `true` when this frame installed a different motion preset.
    pub preset_swapped: bool,
    pub offset: MotionOffset,
    pub events: Vec<PlayerEvent>,
}

/// Player state machine, context and motion blender driven as one unit.
pub struct PlayerSession<S> {
    machine: PlayerStateMachine,
    ctx: PlayerContext,
    blender: MotionBlender,
    library: MotionLibrary,
    profile: MotionProfile,
    sink: S,
    time: f32,
    frame: u64,
}

impl<S: TransformSink> PlayerSession<S> {
    /// Runs one frame.
    ///
    /// Order: install samples, tick the machine, swap presets if the motion
    /// profile changed, update the blender, write the offset to the sink.
    pub fn step(
        &mut self,
        input: InputSnapshot,
        physics: PhysicsSnapshot,
        dt: f32,
    ) -> Result<FrameReport> {
        self.ctx.begin_frame(input, physics, dt);
        let step = self.machine.tick(&mut self.ctx)?;
        let preset_swapped = self.sync_motion_profile();

        self.time += self.ctx.dt;
        self.frame += 1;
        let motion_input = MotionInput::from_snapshots(&self.ctx.input, &self.ctx.physics, self.time);
        let offset = self.blender.update(&motion_input, self.ctx.dt);
        self.blender.apply(&mut self.sink);

        Ok(FrameReport {
            step,
            profile: self.profile,
            preset_swapped,
            offset,
            events: self.ctx.drain_events(),
        })
    }

    /// Requests a scripted transition (ladder, hiding spot, zipline, ...).
    ///
    /// On error nothing changes; on success the motion preset follows the new
    /// state immediately.
    pub fn request(
        &mut self,
        target: PlayerStateKey,
        data: Option<StateData>,
    ) -> Result<Step<PlayerStateKey>> {
        let step = self.machine.request(target, data, &mut self.ctx)?;
        self.sync_motion_profile();
        Ok(step)
    }

    /// Installs the preset for the context's motion profile if it changed.
    ///
    /// The dead profile also suppresses the blender so the camera settles.
    fn sync_motion_profile(&mut self) -> bool {
        let profile = self.ctx.motion_profile();
        if profile == self.profile {
            return false;
        }

        let preset = self.library.build(profile);
        info!(
            target: "motion",
            from = %self.profile,
            to = %profile,
            preset = %preset.name,
            "motion preset swapped"
        );
        self.blender.swap_modules(preset.modules);
        if profile == MotionProfile::Dead {
            self.blender.suppress();
        } else {
            self.blender.resume();
        }
        self.profile = profile;
        true
    }

    #[inline]
    pub fn active(&self) -> PlayerStateKey {
        self.machine.active()
    }

    #[inline]
    pub fn profile(&self) -> MotionProfile {
        self.profile
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn machine(&self) -> &PlayerStateMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut PlayerStateMachine {
        &mut self.machine
    }

    pub fn context(&self) -> &PlayerContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut PlayerContext {
        &mut self.ctx
    }

    pub fn blender(&self) -> &MotionBlender {
        &self.blender
    }

    /// Mutable access for hosts that push forces or kick impulses.
    pub fn blender_mut(&mut self) -> &mut MotionBlender {
        &mut self.blender
    }

    pub fn library(&self) -> &MotionLibrary {
        &self.library
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> fmt::Debug for PlayerSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerSession")
            .field("machine", &self.machine)
            .field("profile", &self.profile)
            .field("blender", &self.blender)
            .field("time", &self.time)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PlayerSession`].
pub struct PlayerSessionBuilder {
    config: PlayerSessionConfig,
    library: MotionLibrary,
    collision: Option<Box<dyn CollisionOracle>>,
}

impl PlayerSessionBuilder {
    /// The machine has no implicit start state; hosts name it here.
    pub fn new(initial_state: PlayerStateKey) -> Self {
        Self {
            config: PlayerSessionConfig::new(initial_state),
            library: MotionLibrary::default(),
            collision: None,
        }
    }

    /// Override session configuration
    pub fn config(mut self, config: PlayerSessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_config(mut self, player: PlayerConfig) -> Self {
        self.config.player = player;
        self
    }

    pub fn motion_config(mut self, motion: MotionConfig) -> Self {
        self.config.motion = motion;
        self
    }

    /// Motion presets, one per profile. Profiles without a preset get no
    /// procedural motion.
    pub fn library(mut self, library: MotionLibrary) -> Self {
        self.library = library;
        self
    }

    /// Collision queries used by headroom, pushing and ledge checks.
    ///
    /// Defaults to an empty world.
    pub fn collision(mut self, collision: impl CollisionOracle + 'static) -> Self {
        self.collision = Some(Box::new(collision));
        self
    }

    /// Builds the session, enters the initial state and installs its preset.
    pub fn build<S: TransformSink>(self, sink: S) -> Result<PlayerSession<S>> {
        let collision = self
            .collision
            .unwrap_or_else(|| Box::new(NoCollisions) as Box<dyn CollisionOracle>);
        let mut ctx = PlayerContext::new(self.config.player, collision);
        let mut machine = PlayerStateMachine::new(self.config.initial_state)?;
        let initial = machine.start(&mut ctx)?;

        let profile = ctx.motion_profile();
        let preset = self.library.build(profile);
        debug!(
            target: "motion",
            %profile,
            modules = ?preset.module_names(),
            "installed initial motion preset"
        );
        let blender = MotionBlender::with_modules(self.config.motion, preset.modules);

        info!(target: "player", state = %initial, %profile, "player session ready");
        Ok(PlayerSession {
            machine,
            ctx,
            blender,
            library: self.library,
            profile,
            sink,
            time: 0.0,
            frame: 0,
        })
    }
}
