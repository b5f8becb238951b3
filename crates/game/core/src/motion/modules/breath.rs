use std::f32::consts::TAU;

use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Slow idle breathing while standing still.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BreathSettings {
    pub position_amplitude: Vec3,
    pub rotation_amplitude: Vec3,
    /// Breaths per second.
    pub frequency: f32,
    /// Breathing stops above this speed.
    pub max_speed: f32,
    pub channel: ChannelSettings,
}

impl Default for BreathSettings {
    fn default() -> Self {
        Self {
            position_amplitude: Vec3::new(0.0, 0.008, 0.0),
            rotation_amplitude: Vec3::new(0.3, 0.0, 0.0),
            frequency: 0.25,
            max_speed: 0.5,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BreathModule {
    settings: BreathSettings,
    channel: MotionChannel,
    elapsed: f32,
}

impl BreathModule {
    pub fn new(settings: BreathSettings) -> Self {
        let channel = settings.channel.build();
        Self {
            settings,
            channel,
            elapsed: 0.0,
        }
    }
}

impl MotionModule for BreathModule {
    fn name(&self) -> &'static str {
        "breath"
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        if input.horizontal_speed() > self.settings.max_speed {
            return None;
        }

        self.elapsed += dt;
        let wave = (self.elapsed * self.settings.frequency * TAU).sin();
        Some(MotionOffset::new(
            self.settings.position_amplitude * wave,
            self.settings.rotation_amplitude * wave,
        ))
    }

    fn clear_running_state(&mut self) {
        self.elapsed = 0.0;
    }
}
