use glam::Vec3;
use state_machine::{EnterRejected, State};
use tracing::debug;

use crate::motion::move_towards;
use crate::oracle::InputActions;
use crate::player::{
    DisabledSystems, LadderData, MinMax, PlayerContext, PlayerStateKey, StateData,
};

use super::{PlayerTransition, SavedSettings, to_death, to_idle_when_finished};

/// Yaw range while on a ladder, relative to facing it.
const LADDER_YAW: MinMax = MinMax::new(-80.0, 80.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LadderPhase {
    /// Moving onto the ladder line.
    Mount,
    Climb,
    /// Moving from the top onto the exit point.
    Dismount,
}

/// Scripted climbing: position is interpolated along the ladder segment.
pub struct LadderState {
    transitions: Vec<PlayerTransition>,
    ladder: Option<LadderData>,
    saved: Option<SavedSettings>,
    phase: LadderPhase,
}

impl LadderState {
    pub fn new() -> Self {
        Self {
            transitions: vec![to_death(), to_idle_when_finished()],
            ladder: None,
            saved: None,
            phase: LadderPhase::Mount,
        }
    }

    pub fn phase(&self) -> LadderPhase {
        self.phase
    }

    fn climb(ctx: &mut PlayerContext, ladder: &LadderData) -> bool {
        let axis = ladder.top - ladder.bottom;
        let length = axis.length();
        let t = (ctx.position - ladder.bottom).dot(axis) / (length * length);

        let input = ctx.input.move_axis.y;
        let t = (t + input * ctx.config.ladder_climb_speed * ctx.dt / length).clamp(0.0, 1.0);
        ctx.position = ladder.bottom + axis * t;

        if t <= 0.0 && input < 0.0 {
            ctx.exit_requested = true;
        }
        t >= 1.0 && input > 0.0
    }
}

impl Default for LadderState {
    fn default() -> Self {
        Self::new()
    }
}

impl State<PlayerStateKey, PlayerContext> for LadderState {
    fn key(&self) -> PlayerStateKey {
        PlayerStateKey::Ladder
    }

    fn can_enter(&self, ctx: &PlayerContext) -> Result<(), EnterRejected> {
        match ctx.state_data() {
            Some(StateData::Ladder(_)) => Ok(()),
            _ => Err(EnterRejected::new("ladder state requires ladder data")),
        }
    }

    fn on_enter(&mut self, ctx: &mut PlayerContext) {
        if let Some(StateData::Ladder(ladder)) = ctx.take_state_data() {
            self.ladder = Some(ladder);
        }
        self.saved = Some(SavedSettings::capture(ctx));
        self.phase = LadderPhase::Mount;

        ctx.disabled |= DisabledSystems::JUMP
            | DisabledSystems::CROUCH
            | DisabledSystems::ITEMS
            | DisabledSystems::LEAN;
        ctx.settings.items_usable = false;
        ctx.settings.look_limits.yaw = LADDER_YAW;
        ctx.motion = Vec3::ZERO;
        ctx.entered(PlayerStateKey::Ladder);
    }

    fn on_update(&mut self, ctx: &mut PlayerContext) {
        let Some(ladder) = self.ladder else {
            return;
        };
        ctx.motion = Vec3::ZERO;
        let step = ctx.config.ladder_mount_speed * ctx.dt;

        match self.phase {
            LadderPhase::Mount => {
                let axis = ladder.top - ladder.bottom;
                let t = ((ctx.position - ladder.bottom).dot(axis) / axis.length_squared())
                    .clamp(0.0, 1.0);
                let target = ladder.bottom + axis * t;
                ctx.position = move_towards(ctx.position, target, step);
                if ctx.position.distance(target) <= ctx.config.arrive_distance {
                    debug!(target: "player", "ladder mounted");
                    self.phase = LadderPhase::Climb;
                }
            }
            LadderPhase::Climb => {
                if ctx.input.pressed_once(InputActions::JUMP) {
                    ctx.exit_requested = true;
                } else if Self::climb(ctx, &ladder) {
                    self.phase = LadderPhase::Dismount;
                }
            }
            LadderPhase::Dismount => {
                ctx.position = move_towards(ctx.position, ladder.exit, step);
                if ctx.position.distance(ladder.exit) <= ctx.config.arrive_distance {
                    ctx.exit_requested = true;
                }
            }
        }
    }

    fn on_exit(&mut self, ctx: &mut PlayerContext) {
        if let Some(saved) = self.saved.take() {
            saved.restore(ctx);
        }
        self.ladder = None;
        ctx.exited(PlayerStateKey::Ladder);
    }

    fn transitions(&self) -> &[PlayerTransition] {
        &self.transitions
    }
}
