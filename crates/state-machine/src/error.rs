//! Errors raised while configuring or driving a state machine.

use std::borrow::Cow;
use std::fmt;

/// Diagnostic returned by [`State::can_enter`](crate::State::can_enter).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct EnterRejected {
    reason: Cow<'static, str>,
}

impl EnterRejected {
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors surfaced by [`StateMachine`](crate::StateMachine).
///
/// All of these are programming or configuration errors. The machine never
/// mutates any state before returning one of them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MachineError<K: fmt::Debug> {
    #[error("state {0:?} is registered more than once")]
    DuplicateState(K),

    #[error("state {0:?} is not registered")]
    UnknownState(K),

    #[error("state machine has not been started")]
    NotStarted,

    #[error("state machine was already started")]
    AlreadyStarted,

    #[error("cannot enter {state:?} while the machine is disabled")]
    Disabled { state: K },

    #[error("state {state:?} refused entry: {reason}")]
    EnterRejected { state: K, reason: EnterRejected },
}
