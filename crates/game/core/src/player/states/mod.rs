//! Concrete player states.
//!
//! Every state lists the death transition first so dying pre-empts any other
//! mode logic. Scripted states (ladder, pushing, zipline, hiding) capture the
//! player settings on enter and restore them verbatim on exit.
mod death;
mod ground;
mod hiding;
mod jump;
mod ladder;
mod pushing;
mod sliding;
mod zipline;

pub use death::DeathState;
pub use ground::GroundState;
pub use hiding::HidingState;
pub use jump::JumpState;
pub use ladder::LadderState;
pub use pushing::PushingState;
pub use sliding::SlidingState;
pub use zipline::ZiplineState;

use state_machine::{State, Transition};

use super::{DisabledSystems, PlayerContext, PlayerSettings, PlayerStateKey};

pub type PlayerTransition = Transition<PlayerStateKey, PlayerContext>;
pub type BoxedPlayerState = Box<dyn State<PlayerStateKey, PlayerContext>>;

/// One instance of every player state.
pub fn default_states() -> Vec<BoxedPlayerState> {
    vec![
        Box::new(GroundState::idle()),
        Box::new(GroundState::walk()),
        Box::new(GroundState::run()),
        Box::new(GroundState::crouch()),
        Box::new(JumpState::new()),
        Box::new(DeathState::new()),
        Box::new(LadderState::new()),
        Box::new(PushingState::new()),
        Box::new(SlidingState::new()),
        Box::new(ZiplineState::new()),
        Box::new(HidingState::new()),
    ]
}

fn to_death() -> PlayerTransition {
    Transition::new(PlayerStateKey::Death, PlayerContext::is_dead)
}

fn to_idle_when_finished() -> PlayerTransition {
    Transition::new(PlayerStateKey::Idle, |ctx: &PlayerContext| ctx.exit_requested)
}

/// Settings snapshot taken on enter and written back on exit.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SavedSettings {
    settings: PlayerSettings,
    disabled: DisabledSystems,
}

impl SavedSettings {
    fn capture(ctx: &PlayerContext) -> Self {
        Self {
            settings: ctx.settings,
            disabled: ctx.disabled,
        }
    }

    fn restore(self, ctx: &mut PlayerContext) {
        ctx.settings = self.settings;
        ctx.disabled = self.disabled;
    }
}
