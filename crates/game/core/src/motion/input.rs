use glam::{Vec2, Vec3};

use crate::oracle::{InputSnapshot, PhysicsSnapshot};

/// External inputs every module may read during an update.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MotionInput {
    pub velocity: Vec3,
    pub look_delta: Vec2,
    pub move_axis: Vec2,
    pub grounded: bool,
    /// Lean axis, -1 left to 1 right.
    pub lean: f32,
    /// Seconds since the session started.
    pub time: f32,
}

impl MotionInput {
    pub fn from_snapshots(input: &InputSnapshot, physics: &PhysicsSnapshot, time: f32) -> Self {
        Self {
            velocity: physics.velocity,
            look_delta: input.look_delta,
            move_axis: input.move_axis,
            grounded: physics.grounded,
            lean: input.lean(),
            time,
        }
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}
