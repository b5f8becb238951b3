//! Circuit layout loader.
//!
//! Layouts are authored as compact RON records and turned into a
//! [`CircuitLayout`] plus the puzzle's [`CircuitConfig`]. Validation of the
//! topology itself happens in [`CircuitPuzzle::build`].

use std::path::Path;

use horror_core::circuit::{
    CircuitLayout, CircuitPuzzle, ComponentSpec, FlowGroupSpec, Terminal,
};
use horror_core::config::CircuitConfig;
use horror_core::grid::{Direction, GridCoord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One grid cell in a layout file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComponentRon {
    x: i32,
    y: i32,
    #[serde(default)]
    rotation: u16,
    /// Flow groups, each a list of directions at rotation 0.
    groups: Vec<Vec<Direction>>,
    #[serde(default)]
    handles: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutputRon {
    id: u8,
    x: i32,
    y: i32,
    facing: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InputRon {
    id: u8,
    x: i32,
    y: i32,
    facing: Direction,
    /// Output ids this input needs; empty means the output with its own id.
    #[serde(default)]
    requires: Vec<u8>,
}

/// Layout structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CircuitLayoutRon {
    columns: u32,
    rows: u32,
    #[serde(default)]
    disable_when_connected: bool,
    components: Vec<ComponentRon>,
    #[serde(default)]
    outputs: Vec<OutputRon>,
    #[serde(default)]
    inputs: Vec<InputRon>,
}

impl CircuitLayoutRon {
    fn into_layout(self) -> (CircuitLayout, CircuitConfig) {
        let mut layout = CircuitLayout::new(self.columns, self.rows);

        for component in self.components {
            let groups = component
                .groups
                .into_iter()
                .enumerate()
                .map(|(index, directions)| {
                    let mut group = FlowGroupSpec::new(directions);
                    group.handle = component.handles.get(index).copied();
                    group
                })
                .collect();
            layout = layout.with_component(
                ComponentSpec::new(component.x, component.y, groups).rotated(component.rotation),
            );
        }

        for output in self.outputs {
            layout = layout.with_terminal(Terminal::output(
                output.id,
                GridCoord::new(output.x, output.y),
                output.facing,
            ));
        }

        for input in self.inputs {
            layout = layout.with_terminal(
                Terminal::input(input.id, GridCoord::new(input.x, input.y), input.facing)
                    .requiring(input.requires),
            );
        }

        let config = CircuitConfig {
            disable_when_connected: self.disable_when_connected,
        };
        (layout, config)
    }
}

/// Loader for circuit layouts from RON files.
pub struct CircuitLayoutLoader;

impl CircuitLayoutLoader {
    /// Load a layout and its puzzle configuration from a RON file.
    ///
    /// # Example
    ///
    /// ```ron
    /// (
    ///     columns: 2,
    ///     rows: 2,
    ///     components: [
    ///         (x: 0, y: 0, groups: [[Up, Right]]),
    ///         (x: 1, y: 0, groups: [[Up, Left]]),
    ///     ],
    ///     outputs: [(id: 1, x: 0, y: 0, facing: Up)],
    ///     inputs: [(id: 1, x: 1, y: 0, facing: Up, requires: [1])],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<(CircuitLayout, CircuitConfig)> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse circuit layout RON {}: {}", path.display(), e)
        })
    }

    pub fn parse(content: &str) -> LoadResult<(CircuitLayout, CircuitConfig)> {
        let data: CircuitLayoutRon = ron::from_str(content)?;
        Ok(data.into_layout())
    }

    /// Load a layout and build the puzzle in one step.
    pub fn load_puzzle(path: &Path) -> LoadResult<CircuitPuzzle> {
        let (layout, config) = Self::load(path)?;
        CircuitPuzzle::build(layout, config)
            .map_err(|e| anyhow::anyhow!("Invalid circuit layout {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use horror_core::circuit::TerminalId;

    use super::*;

    const SCENARIO: &str = r#"
        (
            columns: 2,
            rows: 2,
            components: [
                (x: 0, y: 0, groups: [[Up, Right]], handles: [7]),
                (x: 1, y: 0, groups: [[Up, Left]]),
            ],
            outputs: [(id: 1, x: 0, y: 0, facing: Up)],
            inputs: [(id: 1, x: 1, y: 0, facing: Up, requires: [1])],
        )
    "#;

    #[test]
    fn parses_scenario_layout() {
        let (layout, config) = CircuitLayoutLoader::parse(SCENARIO).unwrap();
        assert!(!config.disable_when_connected);
        assert_eq!(layout.components.len(), 2);
        assert_eq!(layout.components[0].flow_groups[0].handle, Some(7));

        let puzzle = CircuitPuzzle::build(layout, config).unwrap();
        assert!(puzzle.is_connected());
        assert_eq!(puzzle.input_connected(TerminalId(1)), Some(true));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(CircuitLayoutLoader::parse("(columns: 2)").is_err());
    }
}
