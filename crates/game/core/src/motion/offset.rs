use std::ops::{Add, AddAssign, Mul};

use glam::Vec3;

/// Moves `current` towards `target` by at most `max_delta`, never past it.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + delta / distance * max_delta
    }
}

/// Positional and rotational (Euler degrees) offset.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionOffset {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl MotionOffset {
    pub const ZERO: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub const fn from_rotation(rotation: Vec3) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.position == Vec3::ZERO && self.rotation == Vec3::ZERO
    }

    /// Largest of the position and rotation magnitudes.
    pub fn magnitude(&self) -> f32 {
        self.position.length().max(self.rotation.length())
    }

    /// Steps both parts towards `target` by at most `max_delta` each.
    pub fn move_towards(self, target: Self, max_delta: f32) -> Self {
        Self {
            position: move_towards(self.position, target.position, max_delta),
            rotation: move_towards(self.rotation, target.rotation, max_delta),
        }
    }
}

impl Add for MotionOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            position: self.position + rhs.position,
            rotation: self.rotation + rhs.rotation,
        }
    }
}

impl AddAssign for MotionOffset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for MotionOffset {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            position: self.position * rhs,
            rotation: self.rotation * rhs,
        }
    }
}

impl std::iter::Sum for MotionOffset {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_towards_never_overshoots() {
        let start = Vec3::new(3.0, 4.0, 0.0);
        let step = move_towards(start, Vec3::ZERO, 1.0);
        assert!((step.length() - 4.0).abs() < 1e-5);
        assert_eq!(move_towards(start, Vec3::ZERO, 10.0), Vec3::ZERO);
    }

    #[test]
    fn offsets_sum_componentwise() {
        let a = MotionOffset::new(Vec3::X, Vec3::Y);
        let b = MotionOffset::from_position(Vec3::Z);
        let total: MotionOffset = [a, b].into_iter().sum();
        assert_eq!(total.position, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(total.rotation, Vec3::Y);
    }
}
