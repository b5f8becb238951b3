use std::f32::consts::TAU;

use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Head bob driven by horizontal speed while grounded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BobSettings {
    pub position_amplitude: Vec3,
    pub rotation_amplitude: Vec3,
    /// Steps per second at `reference_speed`.
    pub frequency: f32,
    pub reference_speed: f32,
    /// Below this speed the bob fades out.
    pub min_speed: f32,
    pub channel: ChannelSettings,
}

impl Default for BobSettings {
    fn default() -> Self {
        Self {
            position_amplitude: Vec3::new(0.03, 0.04, 0.0),
            rotation_amplitude: Vec3::new(0.6, 0.0, 0.4),
            frequency: 1.8,
            reference_speed: 3.0,
            min_speed: 0.1,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BobModule {
    settings: BobSettings,
    channel: MotionChannel,
    phase: f32,
}

impl BobModule {
    pub fn new(settings: BobSettings) -> Self {
        let channel = settings.channel.build();
        Self {
            settings,
            channel,
            phase: 0.0,
        }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl MotionModule for BobModule {
    fn name(&self) -> &'static str {
        "bob"
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        let speed = input.horizontal_speed();
        if !input.grounded || speed < self.settings.min_speed {
            return None;
        }

        let rate = speed / self.settings.reference_speed.max(f32::EPSILON);
        self.phase = (self.phase + TAU * self.settings.frequency * rate * dt) % TAU;

        let side = self.phase.sin();
        let vertical = (2.0 * self.phase).sin();
        let position = self.settings.position_amplitude * Vec3::new(side, vertical, 0.0);
        let rotation = self.settings.rotation_amplitude * Vec3::new(vertical, 0.0, side);
        Some(MotionOffset::new(position, rotation))
    }

    fn clear_running_state(&mut self) {
        self.phase = 0.0;
    }
}
