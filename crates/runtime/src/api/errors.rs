//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the player machine, the circuit puzzle and snapshot
//! repositories so hosts can bubble them up with consistent context.
use horror_core::circuit::CircuitError;
use horror_core::error::{ErrorSeverity, GameError};
use horror_core::player::PlayerError;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Circuit(#[from] CircuitError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no snapshot stored under '{0}'")]
    SnapshotNotFound(String),
}

impl RuntimeError {
    /// Severity of the underlying core error, `Fatal` for storage failures.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Player(err) => err.severity(),
            Self::Circuit(err) => err.severity(),
            Self::SnapshotNotFound(_) => ErrorSeverity::Recoverable,
            Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }
}
