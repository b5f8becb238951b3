use glam::Vec3;
use state_machine::{State, Transition};

use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey};

use super::ground::{on_steep_slope, wants_jump};
use super::{PlayerTransition, SavedSettings, to_death};

/// Sliding down slopes steeper than the configured limit.
pub struct SlidingState {
    transitions: Vec<PlayerTransition>,
    velocity: Vec3,
    saved: Option<SavedSettings>,
}

impl SlidingState {
    pub fn new() -> Self {
        Self {
            transitions: vec![
                to_death(),
                Transition::new(PlayerStateKey::Jump, wants_jump),
                Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| {
                    !on_steep_slope(ctx)
                }),
            ],
            velocity: Vec3::ZERO,
            saved: None,
        }
    }
}

impl Default for SlidingState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for SlidingState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Sliding
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        self.saved = Some(SavedSettings::capture(ctx));
        self.velocity = Vec3::new(ctx.physics.velocity.x, 0.0, ctx.physics.velocity.z);
        ctx.disabled |= DisabledSystems::CROUCH;
        ctx.entered(PlayerStateKey::Sliding);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        let downhill = ctx.physics.downhill();
        self.velocity = (self.velocity + downhill * ctx.config.slide_acceleration * ctx.dt)
            .clamp_length_max(ctx.config.slide_max_speed);
        ctx.motion = self.velocity;
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        self.velocity = Vec3::ZERO;
        ctx.exited(PlayerStateKey::Sliding);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
