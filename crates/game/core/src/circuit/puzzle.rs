use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use crate::config::CircuitConfig;
use crate::grid::{Direction, GridCoord, GridSize};

use super::{
    CircuitComponent, CircuitError, CircuitEvent, CircuitLayout, ComponentSpec, FlowDirections,
    FlowGroup, RenderHandle, Rotation, Terminal, TerminalId, TerminalKind,
};

/// Flow groups already flooded during one propagation pass.
type Visited = HashSet<(usize, usize)>;

/// Owns the component grid, the terminal table and the aggregate status.
#[derive(Clone, Debug)]
pub struct CircuitPuzzle {
    size: GridSize,
    config: CircuitConfig,
    components: Vec<CircuitComponent>,
    terminals: Vec<Terminal>,
    input_status: BTreeMap<TerminalId, bool>,
    connected: bool,
    events: Vec<CircuitEvent>,
}

impl CircuitPuzzle {
    /// Validates `layout` and runs the initial propagation.
    ///
    /// A second terminal of the same kind on an already claimed edge is
    /// ignored. Every other inconsistency is a configuration error and no
    /// puzzle is built.
    pub fn build(layout: CircuitLayout, config: CircuitConfig) -> Result<Self, CircuitError> {
        let size = layout.size;
        if size.is_empty() {
            return Err(CircuitError::EmptyGrid);
        }

        let components = Self::place_components(size, layout.components)?;
        let terminals = Self::validate_terminals(size, layout.terminals)?;

        let input_status = terminals
            .iter()
            .filter(|terminal| terminal.is_input())
            .map(|terminal| (terminal.id, false))
            .collect();

        let mut puzzle = Self {
            size,
            config,
            components,
            terminals,
            input_status,
            connected: false,
            events: Vec::new(),
        };
        puzzle.propagate();
        Ok(puzzle)
    }

    fn place_components(
        size: GridSize,
        specs: Vec<ComponentSpec>,
    ) -> Result<Vec<CircuitComponent>, CircuitError> {
        let mut cells: Vec<Option<CircuitComponent>> = vec![None; size.len()];

        for spec in specs {
            let coord = spec.coord;
            let index = size
                .index(coord)
                .ok_or(CircuitError::ComponentOutOfBounds { coord })?;
            if cells[index].is_some() {
                return Err(CircuitError::DuplicateComponent { coord });
            }

            let rotation = Rotation::from_degrees(spec.rotation).ok_or(
                CircuitError::InvalidRotation {
                    coord,
                    degrees: spec.rotation,
                },
            )?;

            let mut seen = Vec::with_capacity(CircuitConfig::MAX_FLOW_DIRECTIONS);
            let mut groups = Vec::with_capacity(spec.flow_groups.len());
            for group in spec.flow_groups {
                let mut directions = FlowDirections::new();
                for direction in group.directions {
                    if seen.contains(&direction) {
                        return Err(CircuitError::DirectionShared { coord, direction });
                    }
                    seen.push(direction);
                    directions.push(direction);
                }
                groups.push(FlowGroup::new(directions, group.handle.map(RenderHandle)));
            }

            cells[index] = Some(CircuitComponent::new(coord, rotation, groups));
        }

        Ok(size
            .coords()
            .zip(cells)
            .map(|(coord, cell)| cell.unwrap_or_else(|| CircuitComponent::empty(coord)))
            .collect())
    }

    fn validate_terminals(
        size: GridSize,
        terminals: Vec<Terminal>,
    ) -> Result<Vec<Terminal>, CircuitError> {
        let mut accepted: Vec<Terminal> = Vec::with_capacity(terminals.len());

        for terminal in terminals {
            if terminal.id.0 > CircuitConfig::MAX_TERMINAL_ID {
                return Err(CircuitError::TerminalIdOutOfRange { id: terminal.id });
            }
            if !size.contains(terminal.coord) {
                return Err(CircuitError::TerminalOutOfBounds {
                    kind: terminal.kind,
                    id: terminal.id,
                    coord: terminal.coord,
                });
            }

            let claimed = accepted.iter().any(|other| {
                other.kind == terminal.kind
                    && other.coord == terminal.coord
                    && other.direction == terminal.direction
            });
            if claimed {
                debug!(
                    id = %terminal.id,
                    coord = %terminal.coord,
                    direction = %terminal.direction,
                    "terminal edge already claimed, ignoring"
                );
                continue;
            }

            if accepted
                .iter()
                .any(|other| other.kind == terminal.kind && other.id == terminal.id)
            {
                return Err(CircuitError::DuplicateTerminalId {
                    kind: terminal.kind,
                    id: terminal.id,
                });
            }

            accepted.push(terminal);
        }

        for input in accepted.iter().filter(|terminal| terminal.is_input()) {
            for output in input.required_outputs() {
                let exists = accepted
                    .iter()
                    .any(|terminal| terminal.is_output() && terminal.id == output);
                if !exists {
                    return Err(CircuitError::UnknownRequiredOutput {
                        input: input.id,
                        output,
                    });
                }
            }
        }

        Ok(accepted)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn config(&self) -> &CircuitConfig {
        &self.config
    }

    pub fn components(&self) -> &[CircuitComponent] {
        &self.components
    }

    pub fn component(&self, coord: GridCoord) -> Option<&CircuitComponent> {
        self.size.index(coord).map(|index| &self.components[index])
    }

    pub(crate) fn components_mut(&mut self) -> &mut [CircuitComponent] {
        &mut self.components
    }

    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter().filter(|terminal| terminal.is_output())
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Terminal> {
        self.terminals.iter().filter(|terminal| terminal.is_input())
    }

    /// True iff there is at least one input and every input is satisfied.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connection state of one input terminal.
    pub fn input_connected(&self, id: TerminalId) -> Option<bool> {
        self.input_status.get(&id).copied()
    }

    /// Ids of all inputs that are currently satisfied.
    pub fn connected_inputs(&self) -> Vec<TerminalId> {
        self.input_status
            .iter()
            .filter_map(|(&id, &connected)| connected.then_some(id))
            .collect()
    }

    /// Whether the puzzle refuses rotations because it is solved and locking.
    pub fn is_locked(&self) -> bool {
        self.config.disable_when_connected && self.connected
    }

    /// Takes every buffered notification.
    pub fn drain_events(&mut self) -> Vec<CircuitEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[CircuitEvent] {
        &self.events
    }

    /// Rotates the component at `coord` and re-evaluates the circuit.
    ///
    /// Returns `Ok(false)` without touching anything while the puzzle is
    /// locked.
    pub fn rotate_at(&mut self, coord: GridCoord) -> Result<bool, CircuitError> {
        let index = self
            .size
            .index(coord)
            .ok_or(CircuitError::CellOutOfBounds { coord })?;

        if self.is_locked() {
            debug!(%coord, "rotation ignored, circuit is locked");
            return Ok(false);
        }

        self.components[index].rotate();
        debug!(
            %coord,
            degrees = self.components[index].rotation().degrees(),
            "component rotated"
        );
        self.reinitialize_circuit();
        Ok(true)
    }

    /// Clears all power, floods from every output and re-checks every input.
    ///
    /// No-op while the puzzle is locked. Returns whether the circuit was
    /// re-evaluated.
    pub fn reinitialize_circuit(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.propagate();
        true
    }

    pub(crate) fn propagate(&mut self) {
        self.remove_all_power_ids();
        self.power_all_outputs();
        self.check_all_inputs();
        self.check_power_states();
    }

    /// Clears the received-id set of every flow group.
    pub fn remove_all_power_ids(&mut self) {
        for component in &mut self.components {
            component.remove_power_ids();
        }
    }

    /// Floods power from every output terminal, one fresh visited set each.
    pub fn power_all_outputs(&mut self) {
        let outputs: Vec<(usize, Direction, TerminalId)> = self
            .terminals
            .iter()
            .filter(|terminal| terminal.is_output())
            .filter_map(|terminal| {
                self.size
                    .index(terminal.coord)
                    .map(|index| (index, terminal.direction, terminal.id))
            })
            .collect();

        for (index, direction, id) in outputs {
            let mut visited = Visited::new();
            self.set_power_flow(index, direction.opposite(), id, &mut visited);
        }
    }

    /// Floods `source` into the component at `index`, travelling in `from`.
    ///
    /// The flow group that owns the entry edge is visited at most once per
    /// pass. Neighbors are flooded before this group records the source.
    fn set_power_flow(
        &mut self,
        index: usize,
        from: Direction,
        source: TerminalId,
        visited: &mut Visited,
    ) {
        let entry = from.opposite();
        let component = &self.components[index];
        let Some(group) = component.group_containing(entry) else {
            return;
        };
        if !visited.insert((index, group)) {
            return;
        }

        let coord = component.coord();
        let exits: FlowDirections = component.groups()[group]
            .directions()
            .iter()
            .copied()
            .filter(|&direction| direction != entry)
            .collect();

        for exit in exits {
            let Some(next) = self.size.index(coord.neighbor(exit)) else {
                continue;
            };
            if self.components[next]
                .group_containing(exit.opposite())
                .is_none()
            {
                continue;
            }
            self.set_power_flow(next, exit, source, visited);
        }

        if self.components[index].receive_power(group, source) {
            self.events.push(CircuitEvent::FlowGroupPowered {
                coord,
                group,
                powered: true,
            });
        }
    }

    /// Re-evaluates every input and the aggregate status.
    pub fn check_all_inputs(&mut self) {
        let statuses: Vec<(TerminalId, bool)> = self
            .inputs()
            .map(|input| (input.id, self.is_satisfied(input)))
            .collect();

        for (id, connected) in statuses {
            let previous = self.input_status.insert(id, connected);
            if previous != Some(connected) {
                debug!(%id, connected, "input changed");
                self.events.push(if connected {
                    CircuitEvent::InputConnected(id)
                } else {
                    CircuitEvent::InputDisconnected(id)
                });
            }
        }

        let connected =
            !self.input_status.is_empty() && self.input_status.values().all(|&value| value);
        if connected != self.connected {
            self.connected = connected;
            if connected {
                info!("circuit connected");
                self.events.push(CircuitEvent::PuzzleConnected);
            } else {
                info!("circuit disconnected");
                self.events.push(CircuitEvent::PuzzleDisconnected);
            }
        }
    }

    /// Switches off the visual state of every flow group without power.
    pub fn check_power_states(&mut self) {
        for component in &mut self.components {
            let coord = component.coord();
            for group in component.refresh_unpowered() {
                self.events.push(CircuitEvent::FlowGroupPowered {
                    coord,
                    group,
                    powered: false,
                });
            }
        }
    }

    fn is_satisfied(&self, input: &Terminal) -> bool {
        let Some(component) = self.component(input.coord) else {
            return false;
        };
        let Some(group) = component
            .group_containing(input.direction)
            .and_then(|index| component.group(index))
        else {
            return false;
        };

        input
            .required_outputs()
            .iter()
            .all(|output| group.received().contains(output))
    }

    /// Looks up a terminal by kind and id.
    pub fn terminal(&self, kind: TerminalKind, id: TerminalId) -> Option<&Terminal> {
        self.terminals
            .iter()
            .find(|terminal| terminal.kind == kind && terminal.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::FlowGroupSpec;
    use Direction::{Down, Left, Right, Up};

    fn two_by_two() -> CircuitLayout {
        CircuitLayout::new(2, 2)
            .with_component(ComponentSpec::new(0, 0, vec![FlowGroupSpec::new([Up, Right])]))
            .with_component(ComponentSpec::new(1, 0, vec![FlowGroupSpec::new([Up, Left])]))
            .with_terminal(Terminal::output(1, GridCoord::new(0, 0), Up))
            .with_terminal(Terminal::input(1, GridCoord::new(1, 0), Up).requiring([1]))
    }

    #[test]
    fn scenario_connects_input() {
        let mut puzzle = CircuitPuzzle::build(two_by_two(), CircuitConfig::new()).unwrap();
        puzzle.power_all_outputs();
        puzzle.check_all_inputs();

        assert_eq!(puzzle.input_connected(TerminalId(1)), Some(true));
        assert!(puzzle.is_connected());
    }

    #[test]
    fn scenario_rotation_disconnects_input() {
        let mut puzzle = CircuitPuzzle::build(two_by_two(), CircuitConfig::new()).unwrap();
        assert!(puzzle.rotate_at(GridCoord::new(0, 0)).unwrap());

        let component = puzzle.component(GridCoord::new(0, 0)).unwrap();
        assert_eq!(component.groups()[0].directions(), &[Right, Down]);
        assert_eq!(puzzle.input_connected(TerminalId(1)), Some(false));
        assert!(!puzzle.is_connected());
    }

    #[test]
    fn build_emits_connection_events_once() {
        let mut puzzle = CircuitPuzzle::build(two_by_two(), CircuitConfig::new()).unwrap();
        let events = puzzle.drain_events();
        assert!(events.contains(&CircuitEvent::InputConnected(TerminalId(1))));
        assert!(events.contains(&CircuitEvent::PuzzleConnected));

        puzzle.reinitialize_circuit();
        assert!(puzzle.drain_events().is_empty());
    }

    #[test]
    fn locked_puzzle_ignores_rotation() {
        let mut puzzle = CircuitPuzzle::build(two_by_two(), CircuitConfig::locking()).unwrap();
        assert!(puzzle.is_locked());
        assert!(!puzzle.rotate_at(GridCoord::new(0, 0)).unwrap());
        assert!(!puzzle.reinitialize_circuit());
        assert_eq!(
            puzzle.component(GridCoord::new(0, 0)).unwrap().rotation(),
            Rotation::ZERO
        );
    }

    #[test]
    fn rotating_outside_grid_is_rejected() {
        let mut puzzle = CircuitPuzzle::build(two_by_two(), CircuitConfig::new()).unwrap();
        assert_eq!(
            puzzle.rotate_at(GridCoord::new(5, 0)),
            Err(CircuitError::CellOutOfBounds {
                coord: GridCoord::new(5, 0)
            })
        );
    }

    #[test]
    fn puzzle_without_inputs_is_never_connected() {
        let layout = CircuitLayout::new(1, 1)
            .with_component(ComponentSpec::new(0, 0, vec![FlowGroupSpec::new([Up, Down])]))
            .with_terminal(Terminal::output(0, GridCoord::ORIGIN, Up));
        let puzzle = CircuitPuzzle::build(layout, CircuitConfig::new()).unwrap();
        assert!(!puzzle.is_connected());
    }

    #[test]
    fn claimed_edge_keeps_first_terminal() {
        let layout = two_by_two().with_terminal(Terminal::output(2, GridCoord::new(0, 0), Up));
        let puzzle = CircuitPuzzle::build(layout, CircuitConfig::new()).unwrap();
        assert_eq!(puzzle.outputs().count(), 1);
        assert!(puzzle.terminal(TerminalKind::Output, TerminalId(2)).is_none());
    }

    #[test]
    fn unknown_required_output_is_rejected() {
        let layout = two_by_two().with_terminal(
            Terminal::input(2, GridCoord::new(1, 1), Down).requiring([9]),
        );
        assert_eq!(
            CircuitPuzzle::build(layout, CircuitConfig::new()).unwrap_err(),
            CircuitError::UnknownRequiredOutput {
                input: TerminalId(2),
                output: TerminalId(9),
            }
        );
    }

    #[test]
    fn layout_errors_are_reported() {
        let shared = CircuitLayout::new(1, 1).with_component(ComponentSpec::new(
            0,
            0,
            vec![FlowGroupSpec::new([Up]), FlowGroupSpec::new([Up, Down])],
        ));
        assert!(matches!(
            CircuitPuzzle::build(shared, CircuitConfig::new()),
            Err(CircuitError::DirectionShared { direction: Up, .. })
        ));

        let rotated =
            CircuitLayout::new(1, 1).with_component(ComponentSpec::new(0, 0, vec![]).rotated(45));
        assert!(matches!(
            CircuitPuzzle::build(rotated, CircuitConfig::new()),
            Err(CircuitError::InvalidRotation { degrees: 45, .. })
        ));

        let outside = CircuitLayout::new(1, 1).with_component(ComponentSpec::new(3, 0, vec![]));
        assert!(matches!(
            CircuitPuzzle::build(outside, CircuitConfig::new()),
            Err(CircuitError::ComponentOutOfBounds { .. })
        ));

        assert_eq!(
            CircuitPuzzle::build(CircuitLayout::new(0, 3), CircuitConfig::new()).unwrap_err(),
            CircuitError::EmptyGrid
        );
    }

    #[test]
    fn terminal_id_must_fit_alphabet() {
        let layout = CircuitLayout::new(1, 1).with_terminal(Terminal::output(
            CircuitConfig::MAX_TERMINAL_ID + 1,
            GridCoord::ORIGIN,
            Up,
        ));
        assert!(matches!(
            CircuitPuzzle::build(layout, CircuitConfig::new()),
            Err(CircuitError::TerminalIdOutOfRange { .. })
        ));
    }
}
