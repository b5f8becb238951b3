use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Weapon/camera lag behind the look direction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwaySettings {
    /// Degrees of pitch/yaw per unit of look delta.
    pub amount: f32,
    /// Degrees of roll per unit of horizontal look delta.
    pub roll_amount: f32,
    pub max_angle: f32,
    pub channel: ChannelSettings,
}

impl Default for SwaySettings {
    fn default() -> Self {
        Self {
            amount: 0.6,
            roll_amount: 0.3,
            max_angle: 4.0,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SwayModule {
    settings: SwaySettings,
    channel: MotionChannel,
}

impl SwayModule {
    pub fn new(settings: SwaySettings) -> Self {
        let channel = settings.channel.build();
        Self { settings, channel }
    }
}

impl MotionModule for SwayModule {
    fn name(&self) -> &'static str {
        "sway"
    }

    channel_accessors!();

    fn evaluate(&mut self, input: &MotionInput, _dt: f32) -> Option<MotionOffset> {
        let look = input.look_delta;
        if look.length_squared() <= f32::EPSILON {
            return None;
        }

        let rotation = Vec3::new(
            -look.y * self.settings.amount,
            look.x * self.settings.amount,
            -look.x * self.settings.roll_amount,
        )
        .clamp_length_max(self.settings.max_angle);
        Some(MotionOffset::from_rotation(rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn sway_is_clamped() {
        let mut sway = SwayModule::new(SwaySettings::default());
        let input = MotionInput {
            look_delta: Vec2::new(100.0, -50.0),
            ..MotionInput::default()
        };
        let target = sway.evaluate(&input, 0.016).unwrap();
        assert!(target.rotation.length() <= 4.0 + 1e-4);
        assert!(sway.evaluate(&MotionInput::default(), 0.016).is_none());
    }
}
