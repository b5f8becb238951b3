//! Session orchestration for the horror-game cores.
//!
//! This crate wires the circuit puzzle, the player state machine and the
//! motion blender into frame-stepped sessions a host can drive without
//! touching the cores directly.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts [`PlayerSession`] and [`CircuitSession`]
//! - [`api`] exposes the error types downstream hosts interact with
//! - [`listener`] routes circuit notifications to host listeners
//! - [`repository`] persists circuit snapshots as JSON
//! - [`scenario`] scripts headless player runs
pub mod api;
pub mod listener;
pub mod repository;
pub mod scenario;
pub mod session;

pub use api::{RepositoryError, Result, RuntimeError};
pub use listener::{CircuitListener, ListenerRegistry, TracingListener};
pub use repository::{FileSnapshotRepository, InMemorySnapshotRepository, SnapshotRepository};
pub use scenario::{PlayerScript, ScriptOutcome, ScriptPhase};
pub use session::{
    CircuitSession, FrameReport, PlayerSession, PlayerSessionBuilder, PlayerSessionConfig,
};
