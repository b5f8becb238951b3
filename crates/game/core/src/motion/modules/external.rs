use std::fmt;

use glam::Vec3;

use crate::motion::{ChannelSettings, MotionChannel, MotionInput, MotionModule, MotionOffset};

/// A transient offset pushed into an [`ExternalModule`] by gameplay code
/// (explosions, hits, scripted shakes).
pub trait ForceContributor: Send {
    /// Offset for this frame; advances the force's own clock by `dt`.
    fn evaluate(&mut self, dt: f32) -> MotionOffset;

    fn is_finished(&self) -> bool;
}

/// Constant offset that fades linearly over its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedForce {
    offset: MotionOffset,
    duration: f32,
    remaining: f32,
}

impl TimedForce {
    pub fn new(offset: MotionOffset, duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            offset,
            duration,
            remaining: duration,
        }
    }
}

impl ForceContributor for TimedForce {
    fn evaluate(&mut self, dt: f32) -> MotionOffset {
        if self.remaining <= 0.0 {
            return MotionOffset::ZERO;
        }
        let fade = self.remaining / self.duration.max(f32::EPSILON);
        self.remaining -= dt;
        self.offset * fade
    }

    fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }
}

/// Decaying oscillating rotation shake.
#[derive(Clone, Debug, PartialEq)]
pub struct ShakeForce {
    amplitude: Vec3,
    frequency: f32,
    duration: f32,
    elapsed: f32,
}

impl ShakeForce {
    pub fn new(amplitude: Vec3, frequency: f32, duration: f32) -> Self {
        Self {
            amplitude,
            frequency,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }
}

impl ForceContributor for ShakeForce {
    fn evaluate(&mut self, dt: f32) -> MotionOffset {
        if self.is_finished() {
            return MotionOffset::ZERO;
        }
        self.elapsed += dt;
        let envelope = (1.0 - self.elapsed / self.duration.max(f32::EPSILON)).max(0.0);
        let phase = self.elapsed * self.frequency * std::f32::consts::TAU;
        let wave = Vec3::new(phase.sin(), (phase * 1.3).cos(), (phase * 0.7).sin());
        MotionOffset::from_rotation(self.amplitude * wave * envelope)
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Sums externally supplied forces.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExternalSettings {
    pub channel: ChannelSettings,
}

pub struct ExternalModule {
    channel: MotionChannel,
    forces: Vec<Box<dyn ForceContributor>>,
}

impl ExternalModule {
    pub fn new(settings: ExternalSettings) -> Self {
        Self {
            channel: settings.channel.build(),
            forces: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: impl ForceContributor + 'static) {
        self.forces.push(Box::new(force));
    }

    pub fn active_forces(&self) -> usize {
        self.forces.len()
    }
}

impl fmt::Debug for ExternalModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalModule")
            .field("channel", &self.channel)
            .field("forces", &self.forces.len())
            .finish()
    }
}

impl MotionModule for ExternalModule {
    fn name(&self) -> &'static str {
        "external"
    }

    channel_accessors!();

    fn evaluate(&mut self, _input: &MotionInput, dt: f32) -> Option<MotionOffset> {
        if self.forces.is_empty() {
            return None;
        }

        let total = self.forces.iter_mut().map(|force| force.evaluate(dt)).sum();
        self.forces.retain(|force| !force.is_finished());
        Some(total)
    }

    fn clear_running_state(&mut self) {
        self.forces.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records its id each time it is evaluated.
    struct Tagged {
        id: u8,
        remaining: f32,
        log: Arc<Mutex<Vec<u8>>>,
    }

    impl ForceContributor for Tagged {
        fn evaluate(&mut self, dt: f32) -> MotionOffset {
            self.log.lock().unwrap().push(self.id);
            self.remaining -= dt;
            MotionOffset::from_position(Vec3::X)
        }

        fn is_finished(&self) -> bool {
            self.remaining <= 0.0
        }
    }

    #[test]
    fn finished_forces_are_dropped() {
        let mut module = ExternalModule::new(ExternalSettings::default());
        assert!(module.evaluate(&MotionInput::default(), 0.1).is_none());

        module.add_force(TimedForce::new(MotionOffset::from_position(Vec3::Y), 0.15));
        module.add_force(ShakeForce::new(Vec3::ONE, 10.0, 1.0));
        assert!(module.evaluate(&MotionInput::default(), 0.1).is_some());
        assert_eq!(module.active_forces(), 2);
        module.evaluate(&MotionInput::default(), 0.1);
        assert_eq!(module.active_forces(), 1);
    }

    #[test]
    fn reset_clears_forces() {
        let mut module = ExternalModule::new(ExternalSettings::default());
        module.add_force(TimedForce::new(MotionOffset::from_position(Vec3::Y), 5.0));
        module.motion_update(&MotionInput::default(), 0.1);
        module.reset();
        assert_eq!(module.active_forces(), 0);
        assert!(module.output().is_zero());
    }

    #[test]
    fn compaction_keeps_survivor_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut module = ExternalModule::new(ExternalSettings::default());
        for (id, lifetime) in [(1, 1.0), (2, 0.15), (3, 1.0), (4, 0.05)] {
            module.add_force(Tagged {
                id,
                remaining: lifetime,
                log: Arc::clone(&log),
            });
        }

        module.evaluate(&MotionInput::default(), 0.1);
        module.evaluate(&MotionInput::default(), 0.1);
        assert_eq!(module.active_forces(), 2);

        log.lock().unwrap().clear();
        let total = module.evaluate(&MotionInput::default(), 0.1).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![1, 3]);
        assert_eq!(total.position, Vec3::new(2.0, 0.0, 0.0));
    }
}
