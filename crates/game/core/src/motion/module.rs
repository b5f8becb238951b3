use std::any::Any;

use super::{ModuleState, MotionChannel, MotionInput, MotionOffset};

/// A single contributor to the combined camera/weapon offset.
///
/// Implementors only supply [`evaluate`](MotionModule::evaluate); the provided
/// methods implement the shared active/idle/suppressed contract on top of the
/// module's [`MotionChannel`].
pub trait MotionModule: Send {
    /// Stable name, used for lookup and diagnostics.
    fn name(&self) -> &'static str;

    fn channel(&self) -> &MotionChannel;

    fn channel_mut(&mut self) -> &mut MotionChannel;

    /// Computes this frame's target, or `None` when the module has nothing
    /// to contribute.
    fn evaluate(&mut self, input: &MotionInput, dt: f32) -> Option<MotionOffset>;

    /// Clears module-specific running state (phases, timers, queues).
    fn clear_running_state(&mut self) {}

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Updates the module for one frame. Safe to call every frame.
    fn motion_update(&mut self, input: &MotionInput, dt: f32) {
        let target = if self.channel().is_suppressed() {
            None
        } else {
            self.evaluate(input, dt)
        };

        match target {
            Some(target) => self.channel_mut().drive(target, dt),
            None => self.channel_mut().decay(dt),
        }
    }

    /// Zeroes all running state and the output.
    fn reset(&mut self) {
        self.clear_running_state();
        self.channel_mut().reset();
    }

    fn output(&self) -> MotionOffset {
        self.channel().output()
    }

    fn state(&self) -> ModuleState {
        self.channel().state()
    }

    /// Stops contributing; the output decays from the next update on.
    fn suspend(&mut self) {
        self.channel_mut().set_suppressed(true);
    }

    fn resume(&mut self) {
        self.channel_mut().set_suppressed(false);
    }
}
