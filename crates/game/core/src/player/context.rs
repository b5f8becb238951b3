use std::fmt;

use glam::Vec3;

use crate::config::PlayerConfig;
use crate::motion::MotionProfile;
use crate::oracle::{CollisionOracle, InputSnapshot, NoCollisions, PhysicsSnapshot};

use super::{DisabledSystems, PlayerSettings, PlayerStateKey, StateData};

/// Notification emitted by player states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    StateEntered(PlayerStateKey),
    StateExited(PlayerStateKey),
}

/// Everything player states read and write.
///
/// The host fills `input` and `physics` each frame through
/// [`begin_frame`](Self::begin_frame) and consumes `motion` (velocity for the
/// character mover) and `position` (scripted placement) afterwards.
pub struct PlayerContext {
    pub config: PlayerConfig,
    pub settings: PlayerSettings,
    pub disabled: DisabledSystems,
    pub input: InputSnapshot,
    pub physics: PhysicsSnapshot,
    pub collision: Box<dyn CollisionOracle>,
    pub position: Vec3,
    pub motion: Vec3,
    pub health: f32,
    pub crouched: bool,
    /// Set by scripted states once their movement has finished.
    pub exit_requested: bool,
    pub dt: f32,
    state_data: Option<StateData>,
    motion_profile: MotionProfile,
    events: Vec<PlayerEvent>,
}

impl PlayerContext {
    pub const DEFAULT_HEALTH: f32 = 100.0;

    pub fn new(config: PlayerConfig, collision: Box<dyn CollisionOracle>) -> Self {
        Self {
            config,
            settings: PlayerSettings::default(),
            disabled: DisabledSystems::empty(),
            input: InputSnapshot::default(),
            physics: PhysicsSnapshot::default(),
            collision,
            position: Vec3::ZERO,
            motion: Vec3::ZERO,
            health: Self::DEFAULT_HEALTH,
            crouched: false,
            exit_requested: false,
            dt: 0.0,
            state_data: None,
            motion_profile: MotionProfile::Idle,
            events: Vec::new(),
        }
    }

    /// Installs this frame's samples.
    pub fn begin_frame(&mut self, input: InputSnapshot, physics: PhysicsSnapshot, dt: f32) {
        self.input = input;
        self.physics = physics;
        self.dt = dt.max(0.0);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }

    pub fn revive(&mut self, health: f32) {
        self.health = health.max(0.0);
    }

    pub fn is_disabled(&self, systems: DisabledSystems) -> bool {
        self.disabled.intersects(systems)
    }

    /// Profile requested by the active state.
    pub fn motion_profile(&self) -> MotionProfile {
        self.motion_profile
    }

    pub fn state_data(&self) -> Option<&StateData> {
        self.state_data.as_ref()
    }

    pub(crate) fn set_state_data(&mut self, data: Option<StateData>) {
        self.state_data = data;
    }

    pub(crate) fn take_state_data(&mut self) -> Option<StateData> {
        self.state_data.take()
    }

    pub(crate) fn entered(&mut self, key: PlayerStateKey) {
        self.motion_profile = key.motion_profile();
        self.exit_requested = false;
        self.events.push(PlayerEvent::StateEntered(key));
    }

    pub(crate) fn exited(&mut self, key: PlayerStateKey) {
        self.exit_requested = false;
        self.events.push(PlayerEvent::StateExited(key));
    }

    pub fn pending_events(&self) -> &[PlayerEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Horizontal movement wish from the input axis, in world space.
    pub fn wish_direction(&self) -> Vec3 {
        if self.is_disabled(DisabledSystems::MOVEMENT) {
            return Vec3::ZERO;
        }
        let axis = self.input.move_axis.clamp_length_max(1.0);
        Vec3::new(axis.x, 0.0, axis.y)
    }
}

impl Default for PlayerContext {
    fn default() -> Self {
        Self::new(PlayerConfig::default(), Box::new(NoCollisions))
    }
}

impl fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerContext")
            .field("settings", &self.settings)
            .field("disabled", &self.disabled)
            .field("position", &self.position)
            .field("motion", &self.motion)
            .field("health", &self.health)
            .field("motion_profile", &self.motion_profile)
            .finish_non_exhaustive()
    }
}
