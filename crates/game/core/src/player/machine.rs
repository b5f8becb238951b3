use state_machine::{MachineError, StateMachine, Step};
use tracing::{debug, info, warn};

use crate::error::{ErrorSeverity, GameError};

use super::states::{self, BoxedPlayerState};
use super::{PlayerContext, PlayerStateKey, StateData, StateDataError};

/// Errors raised by [`PlayerStateMachine`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlayerError {
    #[error(transparent)]
    StateData(#[from] StateDataError),

    #[error(transparent)]
    Machine(#[from] MachineError<PlayerStateKey>),
}

impl GameError for PlayerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StateData(err) => err.severity(),
            Self::Machine(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::StateData(err) => err.error_code(),
            Self::Machine(err) => err.error_code(),
        }
    }
}

/// Player locomotion state machine.
///
/// Wraps the generic [`StateMachine`] with the player state set and a typed
/// entry point for transitions requested by world triggers (ladders, hiding
/// spots, ...).
pub struct PlayerStateMachine {
    machine: StateMachine<PlayerStateKey, PlayerContext>,
}

impl PlayerStateMachine {
    /// Builds the machine with every player state and `initial` as the entry
    /// state.
    pub fn new(initial: PlayerStateKey) -> Result<Self, PlayerError> {
        Self::with_states(initial, states::default_states())
    }

    pub fn with_states(
        initial: PlayerStateKey,
        states: Vec<BoxedPlayerState>,
    ) -> Result<Self, PlayerError> {
        let machine = StateMachine::new(initial, states)?;
        Ok(Self { machine })
    }

    pub fn start(&mut self, ctx: &mut PlayerContext) -> Result<PlayerStateKey, PlayerError> {
        let key = self.machine.start(ctx)?;
        info!(target: "player", state = %key, "player state machine started");
        Ok(key)
    }

    /// Runs one frame.
    pub fn tick(&mut self, ctx: &mut PlayerContext) -> Result<Step<PlayerStateKey>, PlayerError> {
        let step = self.machine.tick(ctx)?;
        if let Step::Transitioned { from, to } = step {
            info!(target: "player", %from, %to, "player state changed");
        }
        Ok(step)
    }

    /// Requests a transition into `target` carrying `data`.
    ///
    /// The payload is checked against what `target` expects before anything
    /// runs. On any error the active state and the context are unchanged.
    pub fn request(
        &mut self,
        target: PlayerStateKey,
        data: Option<StateData>,
        ctx: &mut PlayerContext,
    ) -> Result<Step<PlayerStateKey>, PlayerError> {
        if let Err(err) = StateData::validate_for(target, data.as_ref()) {
            warn!(target: "player", %target, error = %err, "rejected state request");
            return Err(err.into());
        }

        ctx.set_state_data(data);
        let result = self.machine.change_state(target, ctx);
        // Entering states consume their payload; anything left belongs to a
        // failed request.
        ctx.set_state_data(None);

        match result {
            Ok(step) => {
                debug!(target: "player", %target, "state request accepted");
                Ok(step)
            }
            Err(err) => {
                warn!(target: "player", %target, error = %err, "rejected state request");
                Err(err.into())
            }
        }
    }

    #[inline]
    pub fn active(&self) -> PlayerStateKey {
        self.machine.active_key()
    }

    #[inline]
    pub fn previous(&self) -> Option<PlayerStateKey> {
        self.machine.previous_key()
    }

    #[inline]
    pub fn is_in(&self, key: PlayerStateKey) -> bool {
        self.machine.is_in(key)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.machine.is_enabled()
    }

    /// While disabled only the death state stays reachable.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.machine.is_enabled() != enabled {
            debug!(target: "player", enabled, "player state machine toggled");
        }
        self.machine.set_enabled(enabled);
    }

    pub fn inner(&self) -> &StateMachine<PlayerStateKey, PlayerContext> {
        &self.machine
    }
}

impl std::fmt::Debug for PlayerStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerStateMachine")
            .field("active", &self.active())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
