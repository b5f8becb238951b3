//! Listener registry for circuit notifications.
//!
//! Hosts register listeners (door locks, lights, audio cues) and the circuit
//! session forwards every drained [`CircuitEvent`] to them in priority order.

use std::fmt;

use horror_core::circuit::CircuitEvent;
use tracing::{debug, info};

/// Receives circuit notifications after each re-evaluation.
pub trait CircuitListener: Send {
    /// Stable name, used for lookup and logging.
    fn name(&self) -> &'static str;

    /// Lower values run first. Defaults to `0`.
    fn priority(&self) -> i32 {
        0
    }

    /// Returns `false` to skip events this listener does not care about.
    fn accepts(&self, _event: &CircuitEvent) -> bool {
        true
    }

    fn on_event(&mut self, event: &CircuitEvent);
}

/// Registry that owns listeners and dispatches events to them.
///
/// Listeners are kept sorted by priority; ties keep registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn CircuitListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, listener: Box<dyn CircuitListener>) {
        debug!(
            target: "circuit",
            listener = listener.name(),
            priority = listener.priority(),
            "registered circuit listener"
        );
        self.listeners.push(listener);
        self.listeners.sort_by_key(|l| l.priority());
    }

    /// Removes every listener named `name`; returns how many were removed.
    pub fn unregister(&mut self, name: &str) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.name() != name);
        before - self.listeners.len()
    }

    /// Forwards each event to every accepting listener, in order.
    pub fn dispatch(&mut self, events: &[CircuitEvent]) {
        for event in events {
            for listener in self.listeners.iter_mut() {
                if listener.accepts(event) {
                    listener.on_event(event);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listener names and priorities in dispatch order (for debugging).
    pub fn listeners(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.listeners.iter().map(|l| (l.name(), l.priority()))
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|l| l.name()))
            .finish()
    }
}

/// Logs connection changes at `info` and flow-group changes at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingListener;

impl CircuitListener for TracingListener {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn priority(&self) -> i32 {
        i32::MIN
    }

    fn on_event(&mut self, event: &CircuitEvent) {
        match *event {
            CircuitEvent::InputConnected(id) => info!(target: "circuit", input = %id, "input connected"),
            CircuitEvent::InputDisconnected(id) => {
                info!(target: "circuit", input = %id, "input disconnected")
            }
            CircuitEvent::PuzzleConnected => info!(target: "circuit", "puzzle connected"),
            CircuitEvent::PuzzleDisconnected => info!(target: "circuit", "puzzle disconnected"),
            CircuitEvent::FlowGroupPowered {
                coord,
                group,
                powered,
            } => debug!(target: "circuit", %coord, group, powered, "flow group power changed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use horror_core::circuit::TerminalId;

    use super::*;

    struct Ordered {
        name: &'static str,
        priority: i32,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl CircuitListener for Ordered {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn accepts(&self, event: &CircuitEvent) -> bool {
            !matches!(event, CircuitEvent::FlowGroupPowered { .. })
        }

        fn on_event(&mut self, _event: &CircuitEvent) {
            self.seen.lock().unwrap().push(self.name);
        }
    }

    #[test]
    fn dispatches_by_priority_and_filter() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        for (name, priority) in [("light", 10), ("door", -5), ("audio", 10)] {
            registry.register(Box::new(Ordered {
                name,
                priority,
                seen: Arc::clone(&seen),
            }));
        }

        registry.dispatch(&[
            CircuitEvent::InputConnected(TerminalId(1)),
            CircuitEvent::FlowGroupPowered {
                coord: horror_core::grid::GridCoord::new(0, 0),
                group: 0,
                powered: true,
            },
        ]);

        assert_eq!(*seen.lock().unwrap(), vec!["door", "light", "audio"]);
    }

    #[test]
    fn unregister_by_name() {
        let mut registry = ListenerRegistry::new();
        registry.register(Box::new(TracingListener));
        registry.register(Box::new(TracingListener));
        assert_eq!(registry.len(), 2);

        assert_eq!(registry.unregister("tracing"), 2);
        assert!(registry.is_empty());
    }
}
