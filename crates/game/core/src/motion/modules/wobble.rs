use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// Damped roll oscillation, e.g. after bumping into something.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WobbleSettings {
    pub frequency: f32,
    /// Exponential decay rate of the amplitude per second.
    pub damping: f32,
    /// Amplitude below which the wobble stops.
    pub threshold: f32,
    pub axis: Vec3,
    pub channel: ChannelSettings,
}

impl Default for WobbleSettings {
    fn default() -> Self {
        Self {
            frequency: 3.0,
            damping: 4.0,
            threshold: 0.01,
            axis: Vec3::Z,
            channel: ChannelSettings::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WobbleModule {
    settings: WobbleSettings,
    channel: MotionChannel,
    amplitude: f32,
    phase: f32,
}

impl WobbleModule {
    pub fn new(settings: WobbleSettings) -> Self {
        let channel = settings.channel.build();
        Self {
            settings,
            channel,
            amplitude: 0.0,
            phase: 0.0,
        }
    }

    /// Adds `strength` degrees to the current amplitude.
    pub fn wobble(&mut self, strength: f32) {
        self.amplitude += strength.abs();
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
}

impl MotionModule for WobbleModule {
    fn name(&self) -> &'static str {
        "wobble"
    }

    channel_accessors!();

    fn evaluate(&mut self, _input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        if self.amplitude < self.settings.threshold {
            self.amplitude = 0.0;
            return None;
        }

        self.phase = (self.phase + std::f32::consts::TAU * self.settings.frequency * dt)
            % std::f32::consts::TAU;
        let value = self.amplitude * self.phase.sin();
        self.amplitude *= (-self.settings.damping * dt).exp();
        Some(MotionOffset::from_rotation(self.settings.axis * value))
    }

    fn clear_running_state(&mut self) {
        self.amplitude = 0.0;
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wobble_dies_out() {
        let mut module = WobbleModule::new(WobbleSettings::default());
        module.wobble(5.0);
        for _ in 0..600 {
            module.motion_update(&MotionInput::default(), 1.0 / 60.0);
        }
        assert_eq!(module.amplitude(), 0.0);
    }
}
