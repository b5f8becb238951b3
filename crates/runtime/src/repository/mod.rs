//! Snapshot persistence for circuit puzzles.
//!
//! Sessions hand a [`SnapshotRepository`] the serde snapshot produced by the
//! puzzle; the repository only moves bytes.
mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileSnapshotRepository, read_snapshot, write_snapshot};
pub use memory::InMemorySnapshotRepository;
pub use traits::SnapshotRepository;
