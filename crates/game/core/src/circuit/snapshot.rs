use std::collections::BTreeMap;

use tracing::{debug, error, warn};

use crate::error::{ErrorSeverity, GameError};
use crate::grid::Direction;

use super::{CircuitPuzzle, FlowDirections, Rotation};

/// Saved rotation and flow directions of one component.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSnapshot {
    /// Rotation in degrees.
    pub rotation: u16,
    /// One digit string per flow group, one digit per direction slot.
    pub directions: Vec<String>,
}

/// Key-value snapshot of a whole puzzle, keyed `component_<index>`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircuitSnapshot {
    pub components: BTreeMap<String, ComponentSnapshot>,
}

impl CircuitSnapshot {
    pub fn key(index: usize) -> String {
        format!("component_{index}")
    }
}

/// Why a saved component could not be restored.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("no saved state for {key}")]
    Missing { key: String },

    #[error("{key}: rotation {rotation} is not a quarter turn")]
    InvalidRotation { key: String, rotation: u16 },

    #[error("{key}: saved {saved} flow groups, component has {live}")]
    ShapeMismatch {
        key: String,
        saved: usize,
        live: usize,
    },

    #[error("{key}: malformed direction codes")]
    MalformedCodes { key: String },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Missing { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "SNAPSHOT_MISSING",
            Self::InvalidRotation { .. } => "SNAPSHOT_INVALID_ROTATION",
            Self::ShapeMismatch { .. } => "SNAPSHOT_SHAPE_MISMATCH",
            Self::MalformedCodes { .. } => "SNAPSHOT_MALFORMED_CODES",
        }
    }
}

/// Outcome of [`CircuitPuzzle::load`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub restored: usize,
    /// Components left at their current state, by linear index.
    pub skipped: Vec<usize>,
    /// One entry per skipped component, in the same order.
    pub errors: Vec<SnapshotError>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, index: usize, error: SnapshotError) {
        self.skipped.push(index);
        self.errors.push(error);
    }
}

impl CircuitPuzzle {
    /// Captures the rotation and flow directions of every component.
    pub fn save(&self) -> CircuitSnapshot {
        let components = self
            .components()
            .iter()
            .enumerate()
            .map(|(index, component)| {
                let snapshot = ComponentSnapshot {
                    rotation: component.rotation().degrees(),
                    directions: component
                        .groups()
                        .iter()
                        .map(|group| group.direction_codes())
                        .collect(),
                };
                (CircuitSnapshot::key(index), snapshot)
            })
            .collect();

        CircuitSnapshot { components }
    }

    /// Restores a snapshot produced by [`CircuitPuzzle::save`].
    ///
    /// Components whose entry is missing or does not match the live shape are
    /// logged and skipped, leaving them as they are. The circuit is always
    /// re-propagated afterwards, even when locked.
    pub fn load(&mut self, snapshot: &CircuitSnapshot) -> LoadReport {
        let mut report = LoadReport::default();

        for (index, component) in self.components_mut().iter_mut().enumerate() {
            let key = CircuitSnapshot::key(index);
            let Some(saved) = snapshot.components.get(&key) else {
                warn!(%key, "no saved state for component");
                report.skip(index, SnapshotError::Missing { key });
                continue;
            };

            let Some(rotation) = Rotation::from_degrees(saved.rotation) else {
                error!(%key, rotation = saved.rotation, "saved rotation is not a quarter turn");
                let rotation = saved.rotation;
                report.skip(index, SnapshotError::InvalidRotation { key, rotation });
                continue;
            };

            if saved.directions.len() != component.groups().len() {
                error!(
                    %key,
                    saved = saved.directions.len(),
                    live = component.groups().len(),
                    "saved flow group count does not match component"
                );
                let (saved, live) = (saved.directions.len(), component.groups().len());
                report.skip(index, SnapshotError::ShapeMismatch { key, saved, live });
                continue;
            }

            let decoded: Option<Vec<FlowDirections>> = saved
                .directions
                .iter()
                .zip(component.groups())
                .map(|(codes, group)| {
                    decode_directions(codes).filter(|dirs| dirs.len() == group.directions().len())
                })
                .collect();

            let Some(directions) = decoded else {
                error!(%key, "saved direction codes are malformed");
                report.skip(index, SnapshotError::MalformedCodes { key });
                continue;
            };

            component.restore(rotation, directions);
            report.restored += 1;
        }

        debug!(
            restored = report.restored,
            skipped = report.skipped.len(),
            "circuit snapshot loaded"
        );
        self.propagate();
        report
    }
}

fn decode_directions(codes: &str) -> Option<FlowDirections> {
    let mut directions = FlowDirections::new();
    for c in codes.chars() {
        let direction = Direction::from_code_char(c)?;
        if directions.contains(&direction) {
            return None;
        }
        directions.try_push(direction).ok()?;
    }
    Some(directions)
}
