//! Circuit puzzle session.

use std::path::Path;

use horror_core::circuit::{CircuitEvent, CircuitPuzzle, LoadReport};
use horror_core::grid::GridCoord;
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::listener::{CircuitListener, ListenerRegistry};
use crate::repository::{SnapshotRepository, read_snapshot, write_snapshot};

/// Owns a puzzle and routes its notifications to registered listeners.
///
/// Every mutating call drains the puzzle's event buffer and dispatches it
/// before returning, so listeners always observe events in the order the
/// puzzle produced them.
#[derive(Debug)]
pub struct CircuitSession {
    puzzle: CircuitPuzzle,
    listeners: ListenerRegistry,
}

impl CircuitSession {
    /// Wraps an already built puzzle. Events raised while building are
    /// dispatched on the first call to [`flush`](Self::flush).
    pub fn new(puzzle: CircuitPuzzle) -> Self {
        Self {
            puzzle,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn puzzle(&self) -> &CircuitPuzzle {
        &self.puzzle
    }

    pub fn into_puzzle(self) -> CircuitPuzzle {
        self.puzzle
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn add_listener(&mut self, listener: impl CircuitListener + 'static) {
        self.listeners.register(Box::new(listener));
    }

    pub fn remove_listener(&mut self, name: &str) -> usize {
        self.listeners.unregister(name)
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.puzzle.is_connected()
    }

    /// Rotates the component at `coord` by a quarter turn.
    ///
    /// Returns `Ok(false)` when the puzzle is locked. An out-of-bounds
    /// coordinate is an error and leaves the puzzle untouched.
    pub fn rotate(&mut self, coord: GridCoord) -> Result<bool> {
        let rotated = self.puzzle.rotate_at(coord)?;
        if !rotated {
            debug!(target: "circuit", %coord, "rotation rejected, puzzle locked");
        }
        self.flush();
        Ok(rotated)
    }

    /// Applies a batch of rotations, stopping at the first error.
    ///
    /// Returns how many rotations actually turned a component.
    pub fn rotate_all(&mut self, coords: impl IntoIterator<Item = GridCoord>) -> Result<usize> {
        let mut turned = 0;
        for coord in coords {
            if self.rotate(coord)? {
                turned += 1;
            }
        }
        Ok(turned)
    }

    /// Dispatches pending puzzle events; returns them for the caller too.
    pub fn flush(&mut self) -> Vec<CircuitEvent> {
        let events = self.puzzle.drain_events();
        if !events.is_empty() {
            debug!(target: "circuit", count = events.len(), "dispatching circuit events");
            self.listeners.dispatch(&events);
        }
        events
    }

    /// Writes the current snapshot to `path` as JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        write_snapshot(path, &self.puzzle.save())?;
        info!(target: "circuit", path = %path.display(), "circuit saved");
        Ok(())
    }

    /// Restores a JSON snapshot from `path` and dispatches the resulting
    /// events.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadReport> {
        let snapshot = read_snapshot(path)?;
        let report = self.puzzle.load(&snapshot);
        self.report_load(&report);
        Ok(report)
    }

    /// Stores the current snapshot under `key`.
    pub fn save_into(&self, repo: &dyn SnapshotRepository, key: &str) -> Result<()> {
        repo.save(key, &self.puzzle.save())?;
        info!(target: "circuit", key, "circuit saved");
        Ok(())
    }

    /// Restores the snapshot stored under `key`.
    pub fn load_from_repo(&mut self, repo: &dyn SnapshotRepository, key: &str) -> Result<LoadReport> {
        let snapshot = repo
            .load(key)?
            .ok_or_else(|| RuntimeError::SnapshotNotFound(key.to_string()))?;
        let report = self.puzzle.load(&snapshot);
        self.report_load(&report);
        Ok(report)
    }

    fn report_load(&mut self, report: &LoadReport) {
        if report.is_complete() {
            info!(target: "circuit", restored = report.restored, "circuit restored");
        } else {
            warn!(
                target: "circuit",
                restored = report.restored,
                skipped = report.skipped.len(),
                "circuit partially restored"
            );
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use horror_core::circuit::{CircuitLayout, ComponentSpec, FlowGroupSpec, Terminal, TerminalId};
    use horror_core::config::CircuitConfig;
    use horror_core::grid::Direction::*;

    use super::*;
    use crate::repository::InMemorySnapshotRepository;

    /// Output at (0,0) facing up, input at (1,0) facing up; the first cell
    /// starts turned away.
    fn session(config: CircuitConfig) -> CircuitSession {
        let layout = CircuitLayout::new(2, 1)
            .with_component(ComponentSpec::new(0, 0, vec![FlowGroupSpec::new([Up, Right])]).rotated(180))
            .with_component(ComponentSpec::new(1, 0, vec![FlowGroupSpec::new([Up, Left])]))
            .with_terminal(Terminal::output(1, GridCoord::new(0, 0), Up))
            .with_terminal(Terminal::input(1, GridCoord::new(1, 0), Up));
        let mut session = CircuitSession::new(CircuitPuzzle::build(layout, config).unwrap());
        session.flush();
        session
    }

    #[test]
    fn rotations_reach_listeners() {
        let mut session = session(CircuitConfig::new());
        assert!(!session.is_connected());

        assert!(session.rotate(GridCoord::new(0, 0)).unwrap());
        assert!(!session.is_connected());
        assert!(session.rotate(GridCoord::new(0, 0)).unwrap());
        assert!(session.is_connected());
    }

    #[test]
    fn out_of_bounds_rotation_is_an_error() {
        let mut session = session(CircuitConfig::new());
        assert!(matches!(
            session.rotate(GridCoord::new(5, 5)),
            Err(RuntimeError::Circuit(_))
        ));
    }

    #[test]
    fn locked_puzzle_rejects_rotations() {
        let mut session = session(CircuitConfig::locking());
        assert_eq!(session.rotate_all([GridCoord::new(0, 0); 2]).unwrap(), 2);
        assert!(session.is_connected());

        assert!(!session.rotate(GridCoord::new(0, 0)).unwrap());
        assert!(session.is_connected());
    }

    struct Shared(Arc<Mutex<Vec<CircuitEvent>>>);

    impl CircuitListener for Shared {
        fn name(&self) -> &'static str {
            "shared"
        }

        fn accepts(&self, event: &CircuitEvent) -> bool {
            !matches!(event, CircuitEvent::FlowGroupPowered { .. })
        }

        fn on_event(&mut self, event: &CircuitEvent) {
            self.0.lock().unwrap().push(*event);
        }
    }

    #[test]
    fn listener_sees_each_edge_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut session = session(CircuitConfig::new());
        session.add_listener(Shared(Arc::clone(&seen)));

        session.rotate_all([GridCoord::new(0, 0); 2]).unwrap();
        assert!(session.flush().is_empty());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CircuitEvent::InputConnected(TerminalId(1)),
                CircuitEvent::PuzzleConnected
            ]
        );

        seen.lock().unwrap().clear();
        session.rotate(GridCoord::new(0, 0)).unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CircuitEvent::InputDisconnected(TerminalId(1)),
                CircuitEvent::PuzzleDisconnected
            ]
        );
    }

    #[test]
    fn repository_round_trip_restores_rotation() {
        let repo = InMemorySnapshotRepository::new();
        let mut session = session(CircuitConfig::new());
        session.rotate_all([GridCoord::new(0, 0); 2]).unwrap();
        session.save_into(&repo, "slot").unwrap();

        let mut fresh = self::session(CircuitConfig::new());
        assert!(!fresh.is_connected());
        let report = fresh.load_from_repo(&repo, "slot").unwrap();
        assert!(report.is_complete());
        assert!(fresh.is_connected());

        assert!(matches!(
            fresh.load_from_repo(&repo, "missing"),
            Err(RuntimeError::SnapshotNotFound(_))
        ));
    }
}
