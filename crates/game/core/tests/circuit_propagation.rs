use std::collections::BTreeSet;

use horror_core::circuit::{
    CircuitEvent, CircuitLayout, CircuitPuzzle, ComponentSpec, FlowGroupSpec, Terminal, TerminalId,
};
use horror_core::config::CircuitConfig;
use horror_core::grid::{Direction, GridCoord};
use Direction::{Down, Left, Right, Up};

/// 2x2 ring. The output on (0,0) enters from above and the flood runs
/// clockwise back into (0,0) from below, which belongs to the same group.
fn ring() -> CircuitLayout {
    CircuitLayout::new(2, 2)
        .with_component(ComponentSpec::new(0, 0, vec![FlowGroupSpec::new([Up, Right, Down])]))
        .with_component(ComponentSpec::new(1, 0, vec![FlowGroupSpec::new([Left, Down])]))
        .with_component(ComponentSpec::new(1, 1, vec![FlowGroupSpec::new([Up, Left])]))
        .with_component(ComponentSpec::new(0, 1, vec![FlowGroupSpec::new([Right, Up, Left])]))
        .with_terminal(Terminal::output(1, GridCoord::new(0, 0), Up))
        .with_terminal(Terminal::input(1, GridCoord::new(0, 1), Left))
}

/// Two outputs feeding one input that requires both.
fn two_sources() -> CircuitLayout {
    CircuitLayout::new(3, 1)
        .with_component(ComponentSpec::new(0, 0, vec![FlowGroupSpec::new([Up, Right])]))
        .with_component(ComponentSpec::new(1, 0, vec![FlowGroupSpec::new([Left, Right, Down])]))
        .with_component(ComponentSpec::new(2, 0, vec![FlowGroupSpec::new([Left, Up])]))
        .with_terminal(Terminal::output(1, GridCoord::new(0, 0), Up))
        .with_terminal(Terminal::output(2, GridCoord::new(2, 0), Up))
        .with_terminal(Terminal::input(7, GridCoord::new(1, 0), Down).requiring([1, 2]))
}

fn received_sets(puzzle: &CircuitPuzzle) -> Vec<Vec<BTreeSet<TerminalId>>> {
    puzzle
        .components()
        .iter()
        .map(|component| {
            component
                .groups()
                .iter()
                .map(|group| group.received().clone())
                .collect()
        })
        .collect()
}

#[test]
fn ring_terminates_and_powers_every_group() {
    let puzzle = CircuitPuzzle::build(ring(), CircuitConfig::new()).expect("ring layout is valid");

    for component in puzzle.components() {
        assert_eq!(
            component.groups()[0].received(),
            &BTreeSet::from([TerminalId(1)]),
            "component at {} should carry output #1",
            component.coord()
        );
    }
    assert!(puzzle.is_connected());
}

#[test]
fn propagation_is_idempotent() {
    let mut puzzle =
        CircuitPuzzle::build(two_sources(), CircuitConfig::new()).expect("layout is valid");

    puzzle.power_all_outputs();
    puzzle.check_all_inputs();
    let first = (puzzle.is_connected(), puzzle.connected_inputs(), received_sets(&puzzle));

    puzzle.power_all_outputs();
    puzzle.check_all_inputs();
    let second = (puzzle.is_connected(), puzzle.connected_inputs(), received_sets(&puzzle));

    assert_eq!(first, second);
    assert!(first.0);
    assert_eq!(first.1, vec![TerminalId(7)]);
}

#[test]
fn reset_then_repower_rebuilds_the_same_sets() {
    let mut puzzle =
        CircuitPuzzle::build(two_sources(), CircuitConfig::new()).expect("layout is valid");
    let before = received_sets(&puzzle);

    puzzle.remove_all_power_ids();
    assert!(
        received_sets(&puzzle)
            .iter()
            .flatten()
            .all(BTreeSet::is_empty)
    );

    puzzle.power_all_outputs();
    assert_eq!(received_sets(&puzzle), before);
}

#[test]
fn both_sources_merge_into_shared_group() {
    let puzzle =
        CircuitPuzzle::build(two_sources(), CircuitConfig::new()).expect("layout is valid");
    let middle = puzzle.component(GridCoord::new(1, 0)).expect("cell exists");
    assert_eq!(
        middle.groups()[0].received(),
        &BTreeSet::from([TerminalId(1), TerminalId(2)])
    );
}

#[test]
fn losing_one_source_disconnects_and_notifies() {
    let mut puzzle =
        CircuitPuzzle::build(two_sources(), CircuitConfig::new()).expect("layout is valid");
    puzzle.drain_events();

    assert!(puzzle.rotate_at(GridCoord::new(2, 0)).expect("in bounds"));
    assert!(!puzzle.is_connected());
    assert_eq!(puzzle.input_connected(TerminalId(7)), Some(false));

    let events = puzzle.drain_events();
    assert!(events.contains(&CircuitEvent::InputDisconnected(TerminalId(7))));
    assert!(events.contains(&CircuitEvent::PuzzleDisconnected));
}

#[test]
fn four_rotations_restore_directions() {
    let mut puzzle = CircuitPuzzle::build(ring(), CircuitConfig::new()).expect("valid");
    let coord = GridCoord::new(0, 1);
    let original = puzzle.save();

    for _ in 0..4 {
        puzzle.rotate_at(coord).expect("in bounds");
    }

    assert_eq!(puzzle.save(), original);
    assert!(puzzle.is_connected());
}

#[test]
fn locked_puzzle_ignores_rotation() {
    let mut puzzle = CircuitPuzzle::build(ring(), CircuitConfig::locking()).expect("valid");
    assert!(puzzle.is_locked());

    let before = puzzle.save();
    assert!(!puzzle.rotate_at(GridCoord::new(1, 1)).expect("in bounds"));
    assert!(!puzzle.reinitialize_circuit());
    assert_eq!(puzzle.save(), before);
}
