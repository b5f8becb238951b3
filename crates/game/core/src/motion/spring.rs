use glam::Vec3;

/// Spring-damper coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringSettings {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringSettings {
    /// Largest integration step; longer frames are sub-stepped.
    pub const MAX_STEP: f32 = 1.0 / 120.0;

    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Damping that makes the spring settle without oscillating.
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        Self::new(stiffness, 2.0 * (stiffness * mass).sqrt(), mass)
    }
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self::new(120.0, 18.0, 1.0)
    }
}

/// A 3D value pulled towards a target by a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Spring {
    pub value: Vec3,
    pub velocity: Vec3,
}

impl Spring {
    /// Advances the spring by `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, target: Vec3, settings: &SpringSettings, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let mass = settings.mass.max(f32::EPSILON);
        let steps = (dt / SpringSettings::MAX_STEP).ceil().max(1.0);
        let h = dt / steps;
        for _ in 0..steps as u32 {
            let force = (target - self.value) * settings.stiffness - self.velocity * settings.damping;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
