use glam::Vec3;
use state_machine::{EnterRejected, State};

use crate::oracle::InputActions;
use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey, PushingData, StateData};

use super::{PlayerTransition, SavedSettings, to_death, to_idle_when_finished};

/// Pushing or pulling an object along a fixed axis.
pub struct PushingState {
    transitions: Vec<PlayerTransition>,
    push: Option<PushingData>,
    saved: Option<SavedSettings>,
}

impl PushingState {
    pub fn new() -> Self {
        Self {
            transitions: vec![to_death(), to_idle_when_finished()],
            push: None,
            saved: None,
        }
    }

    /// Current position of the pushed object.
    pub fn object_position(&self) -> Option<Vec3> {
        self.push.map(|push| push.object)
    }
}

impl Default for PushingState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for PushingState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Pushing
    }

    fn can_enter(&self, ctx: &PlayerContext) -> Result<(), EnterRejected> {
        match ctx.state_data() {
            Some(StateData::Pushing(_)) => Ok(()),
            _ => Err(EnterRejected::new("pushing state requires pushing data")),
        }
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        if let Some(StateData::Pushing(push)) = ctx.take_state_data() {
            self.push = Some(push);
        }
        self.saved = Some(SavedSettings::capture(ctx));

        ctx.disabled |= DisabledSystems::JUMP
            | DisabledSystems::CROUCH
            | DisabledSystems::ITEMS
            | DisabledSystems::LEAN;
        ctx.settings.items_usable = false;
        ctx.settings.mouse_sensitivity *= ctx.config.push_sensitivity_scale;
        ctx.motion = Vec3::ZERO;
        ctx.entered(PlayerStateKey::Pushing);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        ctx.motion = Vec3::ZERO;
        if ctx.input.pressed_once(InputActions::USE) {
            ctx.exit_requested = true;
            return;
        }

        let Some(push) = self.push.as_mut() else {
            return;
        };
        let amount = ctx.input.move_axis.y * ctx.config.push_speed * ctx.dt;
        if amount.abs() <= f32::EPSILON {
            return;
        }

        let direction = push.direction.normalize_or_zero() * amount.signum();
        let distance = amount.abs();
        if ctx
            .collision
            .sphere_cast(push.object, push.radius, direction, distance)
            .is_some()
        {
            return;
        }

        let step = direction * distance;
        push.object += step;
        ctx.position += step;
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        self.push = None;
        ctx.exited(PlayerStateKey::Pushing);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
