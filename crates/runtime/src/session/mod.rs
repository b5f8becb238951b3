//! Frame-stepped sessions that own a core and drive it for a host.
mod circuit;
mod player;

pub use circuit::CircuitSession;
pub use player::{FrameReport, PlayerSession, PlayerSessionBuilder, PlayerSessionConfig};
