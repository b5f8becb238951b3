use crate::grid::GridCoord;

use super::TerminalId;

/// Notifications raised while the circuit is re-evaluated.
///
/// Events are edge-triggered: they are only emitted when the observed state
/// actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CircuitEvent {
    InputConnected(TerminalId),
    InputDisconnected(TerminalId),
    PuzzleConnected,
    PuzzleDisconnected,
    /// Visual powered state of a flow group changed.
    FlowGroupPowered {
        coord: GridCoord,
        group: usize,
        powered: bool,
    },
}
