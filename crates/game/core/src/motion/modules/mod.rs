//! Concrete motion modules.
//!
//! Every module differs only in how it computes its target offset; the
//! suspend/resume/reset contract comes from [`MotionModule`](super::MotionModule).

/// Implements the channel accessors and `as_any_mut` for a module type.
macro_rules! channel_accessors {
    () => {
        fn channel(&self) -> &crate::motion::MotionChannel {
            &self.channel
        }

        fn channel_mut(&mut self) -> &mut crate::motion::MotionChannel {
            &mut self.channel
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

mod bob;
mod breath;
mod curve;
mod external;
mod impulse;
mod lean;
mod noise;
mod strafe;
mod sway;
mod wobble;

pub use bob::{BobModule, BobSettings};
pub use breath::{BreathModule, BreathSettings};
pub use curve::{Curve, CurveKey, CurveModule, CurveSettings};
pub use external::{ExternalModule, ExternalSettings, ForceContributor, ShakeForce, TimedForce};
pub use impulse::{ImpulseModule, ImpulseSettings, ImpulseTrigger};
pub use lean::{LeanModule, LeanSettings};
pub use noise::{NoiseModule, NoiseSettings};
pub use strafe::{StrafeModule, StrafeSettings};
pub use sway::{SwayModule, SwaySettings};
pub use wobble::{WobbleModule, WobbleSettings};
