//! Repository contracts for saving and loading puzzle state.

use horror_core::circuit::CircuitSnapshot;

use super::Result;

/// Repository for circuit snapshots keyed by save slot.
///
/// Keys are plain slot names (`"fuse_box"`, `"generator_2"`); implementations
/// decide how a key maps onto storage.
pub trait SnapshotRepository: Send + Sync {
    fn save(&self, key: &str, snapshot: &CircuitSnapshot) -> Result<()>;

    fn load(&self, key: &str) -> Result<Option<CircuitSnapshot>>;

    fn exists(&self, key: &str) -> bool;

    fn delete(&self, key: &str) -> Result<()>;

    /// List all stored keys in ascending order.
    fn list_keys(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
