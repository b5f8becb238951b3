use crate::error::{ErrorSeverity, GameError};
use crate::grid::{Direction, GridCoord};

use super::{TerminalId, TerminalKind};

/// Errors raised while building or driving a circuit puzzle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CircuitError {
    #[error("circuit grid has no cells")]
    EmptyGrid,

    #[error("component at {coord} lies outside the grid")]
    ComponentOutOfBounds { coord: GridCoord },

    #[error("cell {coord} has more than one component")]
    DuplicateComponent { coord: GridCoord },

    #[error("component at {coord} has invalid rotation {degrees}")]
    InvalidRotation { coord: GridCoord, degrees: u16 },

    #[error("direction {direction} appears in more than one flow group at {coord}")]
    DirectionShared {
        coord: GridCoord,
        direction: Direction,
    },

    #[error("{kind:?} terminal {id} lies outside the grid at {coord}")]
    TerminalOutOfBounds {
        kind: TerminalKind,
        id: TerminalId,
        coord: GridCoord,
    },

    #[error("terminal id {id} exceeds the terminal alphabet")]
    TerminalIdOutOfRange { id: TerminalId },

    #[error("{kind:?} terminal id {id} is used more than once")]
    DuplicateTerminalId { kind: TerminalKind, id: TerminalId },

    #[error("input {input} requires unknown output {output}")]
    UnknownRequiredOutput {
        input: TerminalId,
        output: TerminalId,
    },

    #[error("cell {coord} lies outside the grid")]
    CellOutOfBounds { coord: GridCoord },
}

impl GameError for CircuitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CellOutOfBounds { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGrid => "CIRCUIT_EMPTY_GRID",
            Self::ComponentOutOfBounds { .. } => "CIRCUIT_COMPONENT_OUT_OF_BOUNDS",
            Self::DuplicateComponent { .. } => "CIRCUIT_DUPLICATE_COMPONENT",
            Self::InvalidRotation { .. } => "CIRCUIT_INVALID_ROTATION",
            Self::DirectionShared { .. } => "CIRCUIT_DIRECTION_SHARED",
            Self::TerminalOutOfBounds { .. } => "CIRCUIT_TERMINAL_OUT_OF_BOUNDS",
            Self::TerminalIdOutOfRange { .. } => "CIRCUIT_TERMINAL_ID_OUT_OF_RANGE",
            Self::DuplicateTerminalId { .. } => "CIRCUIT_DUPLICATE_TERMINAL_ID",
            Self::UnknownRequiredOutput { .. } => "CIRCUIT_UNKNOWN_REQUIRED_OUTPUT",
            Self::CellOutOfBounds { .. } => "CIRCUIT_CELL_OUT_OF_BOUNDS",
        }
    }
}
