use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Peeking around corners.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LeanSettings {
    /// Sideways camera shift at full lean.
    pub distance: f32,
    /// Roll in degrees at full lean.
    pub angle: f32,
    pub channel: ChannelSettings,
}

impl Default for LeanSettings {
    fn default() -> Self {
        Self {
            distance: 0.35,
            angle: 12.0,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LeanModule {
    settings: LeanSettings,
    channel: MotionChannel,
}

impl LeanModule {
    pub fn new(settings: LeanSettings) -> Self {
        let channel = settings.channel.build();
        Self { settings, channel }
    }
}

impl MotionModule for LeanModule {
    fn name(&self) -> &'static str {
        "lean"
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, _dt: f32) -> Option<MotionOffset> {
        let lean = input.lean.clamp(-1.0, 1.0);
        if lean.abs() <= f32::EPSILON {
            return None;
        }

        Some(MotionOffset::new(
            Vec3::new(lean * self.settings.distance, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -lean * self.settings.angle),
        ))
    }
}
