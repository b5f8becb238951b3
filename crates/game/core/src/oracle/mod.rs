//! Boundary contracts for the host engine.
//!
//! The cores never talk to an engine directly. Per-frame input and physics
//! state arrive as plain snapshots; collision queries and transform writes go
//! through the small oracle traits defined here.
mod input;
mod physics;
mod transform;

pub use input::{InputActions, InputSnapshot};
pub use physics::{CollisionOracle, NoCollisions, PhysicsSnapshot, RaycastHit};
pub use transform::{RecordingTransform, TransformSink};
