use glam::Vec3;
use state_machine::{EnterRejected, State};

use crate::oracle::InputActions;
use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey, StateData};

use super::{PlayerTransition, SavedSettings, to_death, to_idle_when_finished};

/// Hidden in a closet or under a bed. The player is moved into the spot and
/// returned to where they stood on exit.
pub struct HidingState {
    transitions: Vec<PlayerTransition>,
    saved: Option<SavedSettings>,
    return_position: Option<Vec3>,
}

impl HidingState {
    pub fn new() -> Self {
        Self {
            transitions: vec![to_death(), to_idle_when_finished()],
            saved: None,
            return_position: None,
        }
    }
}

impl Default for HidingState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for HidingState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Hiding
    }

    fn can_enter(&self, ctx: &PlayerContext) -> Result<(), EnterRejected> {
        match ctx.state_data() {
            Some(StateData::Hiding(_)) => Ok(()),
            _ => Err(EnterRejected::new("hiding state requires hiding data")),
        }
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        self.saved = Some(SavedSettings::capture(ctx));
        self.return_position = Some(ctx.position);

        if let Some(StateData::Hiding(hiding)) = ctx.take_state_data() {
            ctx.position = hiding.spot;
            ctx.settings.look_limits = hiding.look_limits;
        }
        ctx.disabled |= DisabledSystems::MOVEMENT
            | DisabledSystems::JUMP
            | DisabledSystems::CROUCH
            | DisabledSystems::ITEMS
            | DisabledSystems::LEAN;
        ctx.settings.items_usable = false;
        ctx.settings.mouse_sensitivity *= ctx.config.hiding_sensitivity_scale;
        ctx.motion = Vec3::ZERO;
        ctx.entered(PlayerStateKey::Hiding);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        ctx.motion = Vec3::ZERO;
        if ctx.input.pressed_once(InputActions::USE) {
            ctx.exit_requested = true;
        }
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(position) = self.return_position.take() {
            ctx.position = position;
        }
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        ctx.exited(PlayerStateKey::Hiding);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
