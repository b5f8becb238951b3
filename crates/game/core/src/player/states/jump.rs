use glam::Vec3;
use state_machine::{State, Transition};

use crate::player::{PlayerContext, PlayerStateKey};

use super::{PlayerTransition, to_death};

/// Airborne: launched by a jump or walking off a ledge.
pub struct JumpState {
    transitions: Vec<PlayerTransition>,
}

impl JumpState {
    pub fn new() -> Self {
        Self {
            transitions: vec![
                to_death(),
                Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| {
                    ctx.physics.grounded && ctx.motion.y <= 0.0
                }),
            ],
        }
    }
}

impl Default for JumpState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for JumpState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Jump
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        ctx.motion.y = if ctx.physics.grounded {
            (-2.0 * ctx.config.gravity * ctx.config.jump_height).max(0.0).sqrt()
        } else {
            ctx.motion.y.min(0.0)
        };
        ctx.entered(PlayerStateKey::Jump);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        let air = ctx.wish_direction() * ctx.config.walk_speed;
        ctx.motion = Vec3::new(air.x, ctx.motion.y + ctx.config.gravity * ctx.dt, air.z);
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        ctx.motion.y = 0.0;
        ctx.exited(PlayerStateKey::Jump);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
