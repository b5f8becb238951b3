//! Electrical circuit puzzle.
//!
//! A grid of rotatable components, each owning one or more *flow groups*:
//! sets of edges that conduct power together. Output terminals inject their
//! id into the grid; power floods through matching flow groups of adjacent
//! cells, and an input terminal is satisfied once every output id it is
//! paired with reaches the flow group on its edge.
//!
//! Every rotation clears all received ids and re-runs the full propagation, so
//! no stale power survives a topology change.
mod component;
mod error;
mod events;
mod layout;
mod puzzle;
mod snapshot;
mod terminal;

pub use component::{CircuitComponent, FlowDirections, FlowGroup, RenderHandle, Rotation};
pub use error::CircuitError;
pub use events::CircuitEvent;
pub use layout::{CircuitLayout, ComponentSpec, FlowGroupSpec};
pub use puzzle::CircuitPuzzle;
pub use snapshot::{CircuitSnapshot, ComponentSnapshot, LoadReport, SnapshotError};
pub use terminal::{Terminal, TerminalId, TerminalKind};
