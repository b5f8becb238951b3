use glam::Vec3;
use state_machine::{State, Transition};

use crate::player::{DisabledSystems, PlayerContext, PlayerStateKey};

use super::{PlayerTransition, SavedSettings};

/// Terminal state while health is depleted. Reachable even when the machine
/// is disabled.
pub struct DeathState {
    transitions: Vec<PlayerTransition>,
    saved: Option<SavedSettings>,
}

impl DeathState {
    pub fn new() -> Self {
        Self {
            transitions: vec![Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| {
                !ctx.is_dead()
            })],
            saved: None,
        }
    }
}

impl Default for DeathState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for DeathState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Death
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        self.saved = Some(SavedSettings::capture(ctx));
        ctx.disabled = DisabledSystems::all();
        ctx.settings.items_usable = false;
        ctx.motion = Vec3::ZERO;
        ctx.entered(PlayerStateKey::Death);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        ctx.motion = Vec3::ZERO;
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        ctx.exited(PlayerStateKey::Death);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }

    fn can_transition_when_disabled(&self) -> bool {
        true
    }
}
