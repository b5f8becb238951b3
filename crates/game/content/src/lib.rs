//! Data-driven content definitions and loaders.
//!
//! This crate turns authored data files into `horror-core` values:
//! - Circuit puzzle layouts (data-driven via RON)
//! - Motion presets per movement profile (data-driven via RON)
//! - Player, motion and circuit tuning (data-driven via TOML)
//!
//! All loaders use horror-core types directly with serde for RON/TOML
//! deserialization.

pub mod library;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use library::MotionLibrary;

#[cfg(feature = "loaders")]
pub use loaders::{
    CircuitLayoutLoader, ConfigLoader, ContentFactory, LoadResult, MotionPresetLoader, Tuning,
};
