//! In-memory snapshot storage for tests and short-lived sessions.

use std::collections::BTreeMap;
use std::sync::RwLock;

use horror_core::circuit::CircuitSnapshot;

use super::{RepositoryError, Result, SnapshotRepository};

#[derive(Debug, Default)]
pub struct InMemorySnapshotRepository {
    slots: RwLock<BTreeMap<String, CircuitSnapshot>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn save(&self, key: &str, snapshot: &CircuitSnapshot) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.insert(key.to_string(), snapshot.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CircuitSnapshot>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn exists(&self, key: &str) -> bool {
        self.slots
            .read()
            .map(|slots| slots.contains_key(key))
            .unwrap_or(false)
    }

    fn delete(&self, key: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        slots.remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(slots.keys().cloned().collect())
    }
}
