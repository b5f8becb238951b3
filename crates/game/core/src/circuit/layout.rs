use crate::grid::{Direction, GridCoord, GridSize};

use super::Terminal;

/// Authoring data for one flow group, expressed at rotation zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowGroupSpec {
    pub directions: Vec<Direction>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub handle: Option<u32>,
}

impl FlowGroupSpec {
    pub fn new(directions: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            directions: directions.into_iter().collect(),
            handle: None,
        }
    }
}

/// Authoring data for one grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSpec {
    pub coord: GridCoord,
    /// Initial rotation in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: u16,
    pub flow_groups: Vec<FlowGroupSpec>,
}

impl ComponentSpec {
    pub fn new(x: i32, y: i32, flow_groups: Vec<FlowGroupSpec>) -> Self {
        Self {
            coord: GridCoord::new(x, y),
            rotation: 0,
            flow_groups,
        }
    }

    /// Sets the initial rotation (builder pattern).
    #[must_use]
    pub fn rotated(mut self, degrees: u16) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Plain description of a puzzle, validated by
/// [`CircuitPuzzle::build`](super::CircuitPuzzle::build).
///
/// Cells that no component spec covers become empty cells.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircuitLayout {
    pub size: GridSize,
    pub components: Vec<ComponentSpec>,
    pub terminals: Vec<Terminal>,
}

impl CircuitLayout {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            size: GridSize::new(columns, rows),
            components: Vec::new(),
            terminals: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_component(mut self, component: ComponentSpec) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn with_terminal(mut self, terminal: Terminal) -> Self {
        self.terminals.push(terminal);
        self
    }
}
