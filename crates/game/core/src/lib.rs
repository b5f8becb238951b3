//! Engine-independent cores of a first-person horror game.
//!
//! `horror-core` holds the logic that does not depend on any particular
//! engine:
//!
//! - [`circuit`]: electrical circuit puzzles over a grid of rotatable
//!   components, with cycle-safe power propagation and save snapshots.
//! - [`motion`]: camera/weapon motion modules and the blender that sums them.
//! - [`player`]: player locomotion states driven by a
//!   [`state_machine::StateMachine`].
//!
//! Hosts plug in through the small contracts in [`oracle`]: per-frame input
//! and physics snapshots, collision queries and a transform sink.
pub mod circuit;
pub mod config;
pub mod error;
pub mod grid;
pub mod motion;
pub mod oracle;
pub mod player;

pub use circuit::{
    CircuitComponent, CircuitError, CircuitEvent, CircuitLayout, CircuitPuzzle, CircuitSnapshot,
    ComponentSnapshot, ComponentSpec, FlowGroup, FlowGroupSpec, LoadReport, Rotation,
    SnapshotError, Terminal, TerminalId, TerminalKind,
};
pub use config::{CircuitConfig, MotionConfig, PlayerConfig};
pub use error::{ErrorSeverity, GameError};
pub use grid::{Direction, GridCoord, GridSize};
pub use motion::{
    ModuleSpec, MotionBlender, MotionInput, MotionModule, MotionOffset, MotionPreset,
    MotionPresetSpec, MotionProfile,
};
pub use oracle::{
    CollisionOracle, InputActions, InputSnapshot, NoCollisions, PhysicsSnapshot,
    RecordingTransform, TransformSink,
};
pub use player::{
    DisabledSystems, PlayerContext, PlayerError, PlayerEvent, PlayerSettings, PlayerStateKey,
    PlayerStateMachine, StateData, StateDataError,
};
