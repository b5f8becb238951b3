use std::collections::BTreeSet;

use arrayvec::ArrayVec;

use crate::config::CircuitConfig;
use crate::grid::{Direction, GridCoord};

use super::TerminalId;

/// Directions conducted by one flow group.
pub type FlowDirections = ArrayVec<Direction, { CircuitConfig::MAX_FLOW_DIRECTIONS }>;

/// Opaque handle the host uses to find the visual for a flow group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderHandle(pub u32);

/// Component rotation in quarter turns (0, 90, 180 or 270 degrees).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rotation(u8);

impl Rotation {
    pub const ZERO: Self = Self(0);

    /// Returns `None` unless `degrees` is a multiple of 90 below 360.
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        if degrees % 90 == 0 && degrees < 360 {
            Some(Self((degrees / 90) as u8))
        } else {
            None
        }
    }

    pub const fn degrees(self) -> u16 {
        self.0 as u16 * 90
    }

    pub const fn quarter_turns(self) -> i32 {
        self.0 as i32
    }

    /// Advances by 90 degrees, wrapping at 360.
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 4)
    }
}

/// A set of directions on one component that conducts power as a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowGroup {
    directions: FlowDirections,
    received: BTreeSet<TerminalId>,
    powered: bool,
    handle: Option<RenderHandle>,
}

impl FlowGroup {
    pub fn new(directions: FlowDirections, handle: Option<RenderHandle>) -> Self {
        Self {
            directions,
            received: BTreeSet::new(),
            powered: false,
            handle,
        }
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    /// Output ids that reached this group during the last propagation.
    pub fn received(&self) -> &BTreeSet<TerminalId> {
        &self.received
    }

    /// Visual state last pushed to the host.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn handle(&self) -> Option<RenderHandle> {
        self.handle
    }

    /// Compact digit string, one digit per direction slot.
    pub fn direction_codes(&self) -> String {
        self.directions
            .iter()
            .map(|direction| char::from(b'0' + direction.code()))
            .collect()
    }
}

/// One cell of the circuit grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitComponent {
    coord: GridCoord,
    rotation: Rotation,
    groups: Vec<FlowGroup>,
}

impl CircuitComponent {
    /// Creates a component whose flow groups are authored at rotation zero
    /// and turned to `rotation`.
    pub fn new(coord: GridCoord, rotation: Rotation, groups: Vec<FlowGroup>) -> Self {
        let mut component = Self {
            coord,
            rotation: Rotation::ZERO,
            groups,
        };
        component.turn_groups(rotation.quarter_turns());
        component.rotation = rotation;
        component
    }

    /// A cell without conductors.
    pub fn empty(coord: GridCoord) -> Self {
        Self::new(coord, Rotation::ZERO, Vec::new())
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn groups(&self) -> &[FlowGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&FlowGroup> {
        self.groups.get(index)
    }

    /// Advances the rotation by 90 degrees and turns every flow group with it.
    pub fn rotate(&mut self) {
        self.turn_groups(1);
        self.rotation = self.rotation.next();
    }

    /// Index of the flow group conducting through `direction`, if any.
    pub fn group_containing(&self, direction: Direction) -> Option<usize> {
        self.groups.iter().position(|group| group.contains(direction))
    }

    /// Records `source` on a flow group and marks it powered.
    ///
    /// Returns `true` when the visual powered state changed.
    pub(crate) fn receive_power(&mut self, group: usize, source: TerminalId) -> bool {
        let Some(group) = self.groups.get_mut(group) else {
            return false;
        };
        group.received.insert(source);
        let changed = !group.powered;
        group.powered = true;
        changed
    }

    /// Clears every received id without touching the visual state.
    pub fn remove_power_ids(&mut self) {
        for group in &mut self.groups {
            group.received.clear();
        }
    }

    /// Switches off the visual of every group left without power.
    ///
    /// Returns the indices of groups whose visual state changed.
    pub(crate) fn refresh_unpowered(&mut self) -> Vec<usize> {
        self.groups
            .iter_mut()
            .enumerate()
            .filter(|(_, group)| group.powered && group.received.is_empty())
            .map(|(index, group)| {
                group.powered = false;
                index
            })
            .collect()
    }

    /// Replaces rotation and flow directions from a save snapshot.
    ///
    /// The caller has already checked that `directions` has one entry per
    /// flow group.
    pub(crate) fn restore(&mut self, rotation: Rotation, directions: Vec<FlowDirections>) {
        debug_assert_eq!(directions.len(), self.groups.len());
        self.rotation = rotation;
        for (group, directions) in self.groups.iter_mut().zip(directions) {
            group.directions = directions;
        }
    }

    fn turn_groups(&mut self, times: i32) {
        for group in &mut self.groups {
            group.directions = group
                .directions
                .iter()
                .map(|direction| direction.rotate(times))
                .collect();
        }
    }
}
