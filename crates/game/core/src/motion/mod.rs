//! Camera/weapon motion compositing.
//!
//! Independent [`MotionModule`]s (bob, sway, noise, impulses, ...) each produce
//! a positional and rotational offset per frame. The [`MotionBlender`] sums
//! them in a fixed order and forwards the result to a
//! [`TransformSink`](crate::oracle::TransformSink).
//!
//! Modules share one contract through [`MotionChannel`]: while active they
//! spring towards their target, while idle or suppressed they decay towards
//! zero at a bounded rate and never overshoot.
mod blender;
mod channel;
mod input;
mod module;
pub mod modules;
mod offset;
mod preset;
mod spring;

pub use blender::MotionBlender;
pub use channel::{ChannelSettings, ModuleState, MotionChannel};
pub use input::MotionInput;
pub use module::MotionModule;
pub use offset::{MotionOffset, move_towards};
pub use preset::{ModuleSpec, MotionPreset, MotionPresetSpec, MotionProfile};
pub use spring::{Spring, SpringSettings};
