use glam::Vec3;
use state_machine::{State, Transition};

use crate::oracle::InputActions;
use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey};

use super::{PlayerTransition, to_death};

/// Height above the feet probed before standing up from a crouch.
const STAND_PROBE_HEIGHT: f32 = 1.4;
const STAND_PROBE_EXTENTS: Vec3 = Vec3::new(0.3, 0.3, 0.3);

fn is_moving(ctx: &PlayerContext) -> bool {
    ctx.wish_direction().length_squared() > f32::EPSILON
}

fn wants_run(ctx: &PlayerContext) -> bool {
    ctx.input.is_held(InputActions::RUN)
}

fn wants_crouch(ctx: &PlayerContext) -> bool {
    ctx.input.is_held(InputActions::CROUCH) && !ctx.is_disabled(DisabledSystems::CROUCH)
}

fn has_headroom(ctx: &PlayerContext) -> bool {
    !ctx.collision.check_box(
        ctx.position + Vec3::Y * STAND_PROBE_HEIGHT,
        STAND_PROBE_EXTENTS,
    )
}

pub(super) fn wants_jump(ctx: &PlayerContext) -> bool {
    ctx.physics.grounded
        && !ctx.is_disabled(DisabledSystems::JUMP)
        && ctx.input.pressed_once(InputActions::JUMP)
}

fn falling(ctx: &PlayerContext) -> bool {
    !ctx.physics.grounded
}

pub(super) fn on_steep_slope(ctx: &PlayerContext) -> bool {
    ctx.physics.grounded && ctx.physics.slope_angle() > ctx.config.slide_slope_limit
}

/// Idle, walk, run and crouch: free movement on the ground.
pub struct GroundState {
    key: PlayerStateKey,
    transitions: Vec<PlayerTransition>,
}

impl GroundState {
    pub fn idle() -> Self {
        Self::with_exits(
            PlayerStateKey::Idle,
            true,
            [
                Transition::new(PlayerStateKey::Crouch, wants_crouch),
                Transition::new(PlayerStateKey::Walk, is_moving),
            ],
        )
    }

    pub fn walk() -> Self {
        Self::with_exits(
            PlayerStateKey::Walk,
            true,
            [
                Transition::new(PlayerStateKey::Crouch, wants_crouch),
                Transition::new(PlayerStateKey::Run, |ctx: &PlayerContext| {
                    is_moving(ctx) && wants_run(ctx)
                }),
                Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| !is_moving(ctx)),
            ],
        )
    }

    pub fn run() -> Self {
        Self::with_exits(
            PlayerStateKey::Run,
            true,
            [
                Transition::new(PlayerStateKey::Crouch, wants_crouch),
                Transition::new(PlayerStateKey::Walk, |ctx: &PlayerContext| {
                    is_moving(ctx) && !wants_run(ctx)
                }),
                Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| !is_moving(ctx)),
            ],
        )
    }

    pub fn crouch() -> Self {
        Self::with_exits(
            PlayerStateKey::Crouch,
            false,
            [
                Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| {
                    !wants_crouch(ctx) && has_headroom(ctx) && !is_moving(ctx)
                }),
                Transition::new(PlayerStateKey::Walk, |ctx: &PlayerContext| {
                    !wants_crouch(ctx) && has_headroom(ctx) && is_moving(ctx)
                }),
            ],
        )
    }

    fn with_exits(
        key: PlayerStateKey,
        can_jump: bool,
        exits: impl IntoIterator<Item = PlayerTransition>,
    ) -> Self {
        let mut transitions = vec![to_death()];
        if can_jump {
            transitions.push(Transition::new(PlayerStateKey::Jump, wants_jump));
        }
        transitions.push(Transition::new(PlayerStateKey::Sliding, on_steep_slope));
        transitions.push(Transition::new(PlayerStateKey::Jump, falling));
        transitions.extend(exits);
        Self { key, transitions }
    }

    fn speed(&self, ctx: &PlayerContext) -> f32 {
        match self.key {
            PlayerStateKey::Walk => ctx.config.walk_speed,
            PlayerStateKey::Run => ctx.config.run_speed,
            PlayerStateKey::Crouch => ctx.config.crouch_speed,
            _ => 0.0,
        }
    }
}

impl State<PlayerStateKey, PlayerContext> for GroundState {
    fn key(&self) -> PlayerStateKey {
        self.key
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        if self.key == PlayerStateKey::Crouch {
            ctx.crouched = true;
        }
        ctx.entered(self.key);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        let horizontal = ctx.wish_direction() * self.speed(ctx);
        ctx.motion = Vec3::new(horizontal.x, 0.0, horizontal.z);
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if self.key == PlayerStateKey::Crouch {
            ctx.crouched = false;
        }
        ctx.exited(self.key);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
