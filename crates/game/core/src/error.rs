//! Common error infrastructure for horror-core.
//!
//! Domain-specific errors (`CircuitError`, `StateDataError`, ...) are defined
//! in their respective modules and classified through [`GameError`].
//!
//! # Design Principles
//!
//! - **Type Safety**: Each domain has its own error enum with specific variants
//! - **No Partial Mutation**: An operation that returns an error has changed nothing
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Conditions a caller may retry or route around
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable configuration problems
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: `MachineError::Disabled`, `SnapshotError::Missing`.
    Recoverable,

    /// Examples: `CircuitError::CellOutOfBounds`, `StateDataError::Invalid`,
    /// `SnapshotError::MalformedCodes`.
    Validation,

    /// Examples: `StateDataError::Missing`, `MachineError::NotStarted`.
    Internal,

    /// Examples: `CircuitError::DuplicateComponent`, `MachineError::UnknownState`.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or misconfiguration.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all horror-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<K: core::fmt::Debug> GameError for state_machine::MachineError<K> {
    fn severity(&self) -> ErrorSeverity {
        use state_machine::MachineError;

        match self {
            MachineError::Disabled { .. } => ErrorSeverity::Recoverable,
            MachineError::NotStarted | MachineError::AlreadyStarted => ErrorSeverity::Internal,
            MachineError::DuplicateState(_)
            | MachineError::UnknownState(_)
            | MachineError::EnterRejected { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use state_machine::MachineError;

        match self {
            MachineError::DuplicateState(_) => "MACHINE_DUPLICATE_STATE",
            MachineError::UnknownState(_) => "MACHINE_UNKNOWN_STATE",
            MachineError::NotStarted => "MACHINE_NOT_STARTED",
            MachineError::AlreadyStarted => "MACHINE_ALREADY_STARTED",
            MachineError::Disabled { .. } => "MACHINE_DISABLED",
            MachineError::EnterRejected { .. } => "MACHINE_ENTER_REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use state_machine::MachineError;

    use super::*;
    use crate::circuit::{CircuitError, SnapshotError};
    use crate::grid::GridCoord;
    use crate::player::{PlayerStateKey, StateDataError, StateDataKind};

    #[test]
    fn documented_examples_match_their_severity() {
        let coord = GridCoord::new(0, 0);
        let key = || "component_0".to_string();
        let cases: [(&dyn GameError, ErrorSeverity); 8] = [
            (
                &MachineError::Disabled {
                    state: PlayerStateKey::Walk,
                },
                ErrorSeverity::Recoverable,
            ),
            (&SnapshotError::Missing { key: key() }, ErrorSeverity::Recoverable),
            (&CircuitError::CellOutOfBounds { coord }, ErrorSeverity::Validation),
            (
                &StateDataError::Invalid {
                    state: PlayerStateKey::Ladder,
                    reason: "zero-length ladder",
                },
                ErrorSeverity::Validation,
            ),
            (&SnapshotError::MalformedCodes { key: key() }, ErrorSeverity::Validation),
            (
                &StateDataError::Missing {
                    state: PlayerStateKey::Hiding,
                    expected: StateDataKind::Hiding,
                },
                ErrorSeverity::Internal,
            ),
            (&CircuitError::DuplicateComponent { coord }, ErrorSeverity::Fatal),
            (
                &MachineError::UnknownState(PlayerStateKey::Zipline),
                ErrorSeverity::Fatal,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.severity(), expected, "{error}");
        }
        assert!(
            MachineError::<PlayerStateKey>::NotStarted
                .severity()
                .is_internal()
        );
    }
}
