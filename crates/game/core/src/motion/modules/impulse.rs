use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// What fires an [`ImpulseModule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpulseTrigger {
    /// Leaving the ground with upward velocity.
    Jump,
    /// Touching down after being airborne.
    Land,
    /// Only [`ImpulseModule::kick`].
    Manual,
}

/// One-shot offset kick that fades out over `duration`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpulseSettings {
    pub trigger: ImpulseTrigger,
    pub offset: MotionOffset,
    pub duration: f32,
    /// Landing kicks scale with fall speed divided by this value.
    pub reference_fall_speed: f32,
    pub channel: ChannelSettings,
}

impl Default for ImpulseSettings {
    fn default() -> Self {
        Self {
            trigger: ImpulseTrigger::Manual,
            offset: MotionOffset::ZERO,
            duration: 0.25,
            reference_fall_speed: 6.0,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ImpulseModule {
    settings: ImpulseSettings,
    channel: MotionChannel,
    was_grounded: Option<bool>,
    last_fall_speed: f32,
    remaining: f32,
    scale: f32,
}

impl ImpulseModule {
    pub fn new(settings: ImpulseSettings) -> Self {
        let channel = settings.channel.build();
        Self {
            settings,
            channel,
            was_grounded: None,
            last_fall_speed: 0.0,
            remaining: 0.0,
            scale: 0.0,
        }
    }

    pub fn trigger(&self) -> ImpulseTrigger {
        self.settings.trigger
    }

    /// Starts the impulse with the configured offset scaled by `scale`.
    pub fn kick(&mut self, scale: f32) {
        self.scale = scale;
        self.remaining = self.settings.duration;
    }

    pub fn is_playing(&self) -> bool {
        self.remaining > 0.0
    }

    fn detect(&mut self, input: &MotionInput) {
        let grounded = input.grounded;
        if let Some(was_grounded) = self.was_grounded {
            match self.settings.trigger {
                ImpulseTrigger::Jump if was_grounded && !grounded && input.velocity.y > 0.0 => {
                    self.kick(1.0);
                }
                ImpulseTrigger::Land if !was_grounded && grounded => {
                    let reference = self.settings.reference_fall_speed.max(f32::EPSILON);
                    self.kick((self.last_fall_speed / reference).min(1.0));
                }
                _ => {}
            }
        }

        if !grounded {
            self.last_fall_speed = (-input.velocity.y).max(0.0);
        }
        self.was_grounded = Some(grounded);
    }
}

impl MotionModule for ImpulseModule {
    fn name(&self) -> &'static str {
        match self.settings.trigger {
            ImpulseTrigger::Jump => "jump",
            ImpulseTrigger::Land => "land",
            ImpulseTrigger::Manual => "impulse",
        }
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        self.detect(input);
        if self.remaining <= 0.0 {
            return None;
        }

        let duration = self.settings.duration.max(f32::EPSILON);
        let fade = (self.remaining / duration).clamp(0.0, 1.0);
        self.remaining -= dt;
        Some(self.settings.offset * (self.scale * fade))
    }

    fn clear_running_state(&mut self) {
        self.remaining = 0.0;
        self.scale = 0.0;
        self.last_fall_speed = 0.0;
        self.was_grounded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn land_settings() -> ImpulseSettings {
        ImpulseSettings {
            trigger: ImpulseTrigger::Land,
            offset: MotionOffset::from_position(Vec3::NEG_Y * 0.1),
            ..ImpulseSettings::default()
        }
    }

    #[test]
    fn landing_fires_once() {
        let mut module = ImpulseModule::new(land_settings());
        let falling = MotionInput {
            grounded: false,
            velocity: Vec3::new(0.0, -6.0, 0.0),
            ..MotionInput::default()
        };
        let landed = MotionInput {
            grounded: true,
            ..MotionInput::default()
        };

        module.motion_update(&falling, 0.016);
        assert!(!module.is_playing());
        module.motion_update(&landed, 0.016);
        assert!(module.is_playing());
        assert_eq!(module.name(), "land");
    }

    #[test]
    fn impulse_finishes_after_duration() {
        let mut module = ImpulseModule::new(ImpulseSettings {
            offset: MotionOffset::from_position(Vec3::X),
            duration: 0.1,
            ..ImpulseSettings::default()
        });
        module.kick(1.0);
        for _ in 0..10 {
            module.motion_update(&MotionInput::default(), 0.02);
        }
        assert!(!module.is_playing());
    }
}
