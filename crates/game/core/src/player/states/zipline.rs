use glam::Vec3;
use state_machine::{EnterRejected, State};

use crate::motion::move_towards;
use crate::oracle::InputActions;
use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey, StateData, ZiplineData};

use super::{PlayerTransition, SavedSettings, to_death, to_idle_when_finished};

/// Riding a zipline from its start to its end.
pub struct ZiplineState {
    transitions: Vec<PlayerTransition>,
    line: Option<ZiplineData>,
    saved: Option<SavedSettings>,
}

impl ZiplineState {
    pub fn new() -> Self {
        Self {
            transitions: vec![to_death(), to_idle_when_finished()],
            line: None,
            saved: None,
        }
    }
}

impl Default for ZiplineState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for ZiplineState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Zipline
    }

    fn can_enter(&self, ctx: &PlayerContext) -> Result<(), EnterRejected> {
        match ctx.state_data() {
            Some(StateData::Zipline(_)) => Ok(()),
            _ => Err(EnterRejected::new("zipline state requires zipline data")),
        }
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        if let Some(StateData::Zipline(line)) = ctx.take_state_data() {
            ctx.position = line.start;
            self.line = Some(line);
        }
        self.saved = Some(SavedSettings::capture(ctx));

        ctx.disabled |= DisabledSystems::MOVEMENT
            | DisabledSystems::JUMP
            | DisabledSystems::CROUCH
            | DisabledSystems::ITEMS;
        ctx.settings.items_usable = false;
        ctx.motion = Vec3::ZERO;
        ctx.entered(PlayerStateKey::Zipline);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        let Some(line) = self.line else {
            return;
        };
        ctx.motion = Vec3::ZERO;

        if ctx.input.pressed_once(InputActions::JUMP) {
            ctx.exit_requested = true;
            return;
        }

        ctx.position = move_towards(ctx.position, line.end, ctx.config.zipline_speed * ctx.dt);
        if ctx.position.distance(line.end) <= ctx.config.arrive_distance {
            ctx.exit_requested = true;
        }
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        self.line = None;
        ctx.exited(PlayerStateKey::Zipline);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
