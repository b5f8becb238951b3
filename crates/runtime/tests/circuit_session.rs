//! Circuit sessions over the shipped layouts, persisted through JSON files.

use std::path::PathBuf;

use horror_content::ContentFactory;
use horror_core::grid::GridCoord;
use horror_runtime::{
    CircuitSession, FileSnapshotRepository, RepositoryError, RuntimeError, TracingListener,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"))
}

fn generator() -> CircuitSession {
    let puzzle = factory().load_circuit("generator").expect("generator layout");
    let mut session = CircuitSession::new(puzzle);
    session.flush();
    session
}

/// Turns the first cell until the circuit closes; returns the turn count.
fn solve(session: &mut CircuitSession) -> usize {
    let mut turns = 0;
    while !session.is_connected() && turns < 4 {
        session.rotate(GridCoord::new(0, 0)).unwrap();
        turns += 1;
    }
    turns
}

#[test]
fn file_round_trip_restores_solution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("generator.json");

    let mut solved = generator();
    assert!(solve(&mut solved) < 4);
    assert!(solved.is_connected());
    solved.save_to(&path).unwrap();

    let mut fresh = generator();
    fresh.add_listener(TracingListener);
    assert!(!fresh.is_connected());

    let report = fresh.load_from(&path).unwrap();
    assert!(report.is_complete());
    assert!(fresh.is_connected());
    assert_eq!(fresh.puzzle().save(), solved.puzzle().save());
}

#[test]
fn corrupt_save_is_reported_and_leaves_puzzle_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut session = generator();
    let before = session.puzzle().save();
    assert!(matches!(
        session.load_from(&path),
        Err(RuntimeError::Repository(RepositoryError::Json(_)))
    ));
    assert_eq!(session.puzzle().save(), before);
}

#[test]
fn repository_slots_hold_independent_puzzles() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSnapshotRepository::new(dir.path()).unwrap();

    let mut solved = generator();
    solve(&mut solved);
    solved.save_into(&repo, "generator").unwrap();

    let fuse_box = CircuitSession::new(factory().load_circuit("fuse_box").unwrap());
    fuse_box.save_into(&repo, "fuse_box").unwrap();

    let mut restored = generator();
    restored.load_from_repo(&repo, "generator").unwrap();
    assert!(restored.is_connected());

    // A snapshot from a different layout is applied component by component;
    // mismatched shapes are skipped.
    let mut mixed = generator();
    let report = mixed.load_from_repo(&repo, "fuse_box").unwrap();
    assert!(report.restored + report.skipped.len() == mixed.puzzle().components().len());
}
