use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Roll and shift into sideways movement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrafeSettings {
    pub roll_angle: f32,
    pub offset: f32,
    pub channel: ChannelSettings,
}

impl Default for StrafeSettings {
    fn default() -> Self {
        Self {
            roll_angle: 2.0,
            offset: 0.01,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StrafeModule {
    settings: StrafeSettings,
    channel: MotionChannel,
}

impl StrafeModule {
    pub fn new(settings: StrafeSettings) -> Self {
        let channel = settings.channel.build();
        Self { settings, channel }
    }
}

impl MotionModule for StrafeModule {
    fn name(&self) -> &'static str {
        "strafe"
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, _dt: f32) -> Option<MotionOffset> {
        let strafe = input.move_axis.x.clamp(-1.0, 1.0);
        if !input.grounded || strafe.abs() <= f32::EPSILON {
            return None;
        }

        Some(MotionOffset::new(
            Vec3::new(-strafe * self.settings.offset, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -strafe * self.settings.roll_angle),
        ))
    }
}
