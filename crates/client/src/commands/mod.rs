//! Subcommand implementations.
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod circuit;
mod player;

pub use circuit::CircuitCmd;
pub use player::PlayerCmd;
