use glam::Vec3;

use crate::config::MotionConfig;

use super::{MotionOffset, Spring, SpringSettings, move_towards};

/// Activity of a motion module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::AsRefStr)]
pub enum ModuleState {
    /// Not contributing; decaying towards zero.
    #[default]
    Idle,
    /// Springing towards its computed target.
    Active,
    /// Forced off by the owner; decaying towards zero.
    Suppressed,
}

/// Authoring parameters of a [`MotionChannel`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelSettings {
    pub spring: SpringSettings,
    pub weight: f32,
    /// Pins the decay rate. `None` follows [`MotionConfig::module_reset_speed`]
    /// of the blender the module is installed into.
    pub reset_speed: Option<f32>,
}

impl ChannelSettings {
    pub fn build(&self) -> MotionChannel {
        let channel = MotionChannel::new(self.spring, self.weight);
        match self.reset_speed {
            Some(reset_speed) => channel.with_reset_speed(reset_speed),
            None => channel,
        }
    }
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            spring: SpringSettings::default(),
            weight: 1.0,
            reset_speed: None,
        }
    }
}

/// Running output shared by every module.
///
/// Active channels spring towards the weighted target. Idle and suppressed
/// channels drop spring velocity and move towards zero by at most
/// `reset_speed * dt` per frame, so the output shrinks monotonically and
/// reaches exactly zero.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionChannel {
    position: Spring,
    rotation: Spring,
    spring: SpringSettings,
    weight: f32,
    reset_speed: f32,
    reset_speed_pinned: bool,
    state: ModuleState,
    suppressed: bool,
}

impl MotionChannel {
    pub fn new(spring: SpringSettings, weight: f32) -> Self {
        Self {
            position: Spring::default(),
            rotation: Spring::default(),
            spring,
            weight,
            reset_speed: MotionConfig::DEFAULT_MODULE_RESET_SPEED,
            reset_speed_pinned: false,
            state: ModuleState::Idle,
            suppressed: false,
        }
    }

    /// Pins the decay rate (builder pattern).
    #[must_use]
    pub fn with_reset_speed(mut self, reset_speed: f32) -> Self {
        self.reset_speed = reset_speed.max(0.0);
        self.reset_speed_pinned = true;
        self
    }

    /// Takes the owner's decay rate unless one was pinned.
    pub fn inherit_reset_speed(&mut self, reset_speed: f32) {
        if !self.reset_speed_pinned {
            self.reset_speed = reset_speed.max(0.0);
        }
    }

    pub fn output(&self) -> MotionOffset {
        MotionOffset::new(self.position.value, self.rotation.value)
    }

    pub fn state(&self) -> ModuleState {
        self.state
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }

    pub fn reset_speed(&self) -> f32 {
        self.reset_speed
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    /// Springs towards `target` scaled by the channel weight.
    pub fn drive(&mut self, target: MotionOffset, dt: f32) {
        self.state = ModuleState::Active;
        let target = target * self.weight;
        self.position.step(target.position, &self.spring, dt);
        self.rotation.step(target.rotation, &self.spring, dt);
    }

    /// Pulls the output towards zero without overshooting.
    pub fn decay(&mut self, dt: f32) {
        self.state = if self.suppressed {
            ModuleState::Suppressed
        } else {
            ModuleState::Idle
        };
        let max_delta = self.reset_speed * dt.max(0.0);
        self.position.velocity = Vec3::ZERO;
        self.rotation.velocity = Vec3::ZERO;
        self.position.value = move_towards(self.position.value, Vec3::ZERO, max_delta);
        self.rotation.value = move_towards(self.rotation.value, Vec3::ZERO, max_delta);
    }

    /// Zeroes the output instantly. The suppression flag is kept.
    pub fn reset(&mut self) {
        self.position.reset();
        self.rotation.reset();
        self.state = if self.suppressed {
            ModuleState::Suppressed
        } else {
            ModuleState::Idle
        };
    }
}

impl Default for MotionChannel {
    fn default() -> Self {
        Self::new(SpringSettings::default(), 1.0)
    }
}
