use glam::Vec3;

/// Physics state sampled once per frame by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsSnapshot {
    pub grounded: bool,
    pub velocity: Vec3,
    /// Surface normal under the player, `Vec3::Y` when airborne.
    pub ground_normal: Vec3,
}

impl PhysicsSnapshot {
    /// Angle between the ground and the horizontal plane, in degrees.
    pub fn slope_angle(&self) -> f32 {
        self.ground_normal
            .normalize_or_zero()
            .angle_between(Vec3::Y)
            .to_degrees()
    }

    /// Downhill direction along the ground, or zero on flat ground.
    pub fn downhill(&self) -> Vec3 {
        let normal = self.ground_normal.normalize_or_zero();
        (Vec3::NEG_Y - normal * normal.dot(Vec3::NEG_Y)).normalize_or_zero()
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

impl Default for PhysicsSnapshot {
    fn default() -> Self {
        Self {
            grounded: true,
            velocity: Vec3::ZERO,
            ground_normal: Vec3::Y,
        }
    }
}

/// Result of a cast against world geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// Read-only collision queries answered by the host physics engine.
pub trait CollisionOracle: Send + Sync {
    /// Sweeps a sphere along `direction` and reports the first hit.
    fn sphere_cast(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Vec3,
        distance: f32,
    ) -> Option<RaycastHit>;

    /// Returns `true` if the box overlaps any collider.
    fn check_box(&self, center: Vec3, half_extents: Vec3) -> bool;
}

/// An empty world.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCollisions;

impl CollisionOracle for NoCollisions {
    fn sphere_cast(&self, _: Vec3, _: f32, _: Vec3, _: f32) -> Option<RaycastHit> {
        None
    }

    fn check_box(&self, _: Vec3, _: Vec3) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ground_has_no_slope() {
        let physics = PhysicsSnapshot::default();
        assert!(physics.slope_angle().abs() < 1e-4);
        assert_eq!(physics.downhill(), Vec3::ZERO);
    }

    #[test]
    fn tilted_ground_points_downhill() {
        let normal = Vec3::new(1.0, 1.0, 0.0).normalize();
        let physics = PhysicsSnapshot {
            ground_normal: normal,
            ..PhysicsSnapshot::default()
        };
        assert!((physics.slope_angle() - 45.0).abs() < 1e-3);
        let downhill = physics.downhill();
        assert!(downhill.x > 0.0 && downhill.y < 0.0);
    }
}
