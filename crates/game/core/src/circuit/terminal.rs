use std::fmt;

use crate::grid::{Direction, GridCoord};

/// Author-assigned terminal identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalId(pub u8);

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalKind {
    /// Power source.
    Output,
    /// Power sink.
    Input,
}

/// A designated edge of a grid cell that either emits or consumes power.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminal {
    pub kind: TerminalKind,
    pub id: TerminalId,
    pub coord: GridCoord,
    /// Edge of the cell the terminal sits on.
    pub direction: Direction,
    /// Output ids an input must receive. Empty means "the output sharing my id".
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Vec<TerminalId>,
}

impl Terminal {
    pub fn output(id: u8, coord: GridCoord, direction: Direction) -> Self {
        Self {
            kind: TerminalKind::Output,
            id: TerminalId(id),
            coord,
            direction,
            requires: Vec::new(),
        }
    }

    pub fn input(id: u8, coord: GridCoord, direction: Direction) -> Self {
        Self {
            kind: TerminalKind::Input,
            id: TerminalId(id),
            coord,
            direction,
            requires: Vec::new(),
        }
    }

    /// Binds an input to an explicit set of outputs (builder pattern).
    #[must_use]
    pub fn requiring(mut self, outputs: impl IntoIterator<Item = u8>) -> Self {
        self.requires = outputs.into_iter().map(TerminalId).collect();
        self
    }

    #[inline]
    pub fn is_output(&self) -> bool {
        self.kind == TerminalKind::Output
    }

    #[inline]
    pub fn is_input(&self) -> bool {
        self.kind == TerminalKind::Input
    }

    /// Output ids this input has to receive to count as connected.
    pub fn required_outputs(&self) -> Vec<TerminalId> {
        if self.requires.is_empty() {
            vec![self.id]
        } else {
            self.requires.clone()
        }
    }
}
