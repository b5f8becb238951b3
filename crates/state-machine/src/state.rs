//! Core state trait.
//!
//! This module defines the [`State`] trait implemented by every behavior mode
//! driven by a [`StateMachine`](crate::StateMachine). The trait is generic over
//! the key type `K` and a context type `C` shared by all states.

use crate::{EnterRejected, Transition};

/// A single behavior mode of a state machine.
///
/// # Hook contract
///
/// - [`can_enter`](State::can_enter) runs before the previous state exits and
///   must not mutate anything. Rejecting entry abandons the transition.
/// - [`on_enter`](State::on_enter) performs the side-effecting setup.
/// - [`on_exit`](State::on_exit) must undo every side effect of `on_enter`.
pub trait State<K, C>: Send {
    /// Key this state is registered under.
    fn key(&self) -> K;

    /// Checks entry preconditions against the context.
    fn can_enter(&self, _ctx: &C) -> Result<(), EnterRejected> {
        Ok(())
    }

    /// Called once when the state becomes active.
    fn on_enter(&mut self, _ctx: &mut C) {}

    /// Called every frame while the state is active and no transition fired.
    fn on_update(&mut self, _ctx: &mut C) {}

    /// Called once when the state stops being active.
    fn on_exit(&mut self, _ctx: &mut C) {}

    /// Outbound transitions, evaluated top to bottom.
    fn transitions(&self) -> &[Transition<K, C>];

    /// Whether this state stays reachable while the machine is disabled.
    fn can_transition_when_disabled(&self) -> bool {
        false
    }
}

/// Blanket implementation for boxed states.
impl<K, C> State<K, C> for Box<dyn State<K, C>> {
    #[inline]
    fn key(&self) -> K {
        (**self).key()
    }

    #[inline]
    fn can_enter(&self, ctx: &C) -> Result<(), EnterRejected> {
        (**self).can_enter(ctx)
    }

    #[inline]
    fn on_enter(&mut self, ctx: &mut C) {
        (**self).on_enter(ctx)
    }

    #[inline]
    fn on_update(&mut self, ctx: &mut C) {
        (**self).on_update(ctx)
    }

    #[inline]
    fn on_exit(&mut self, ctx: &mut C) {
        (**self).on_exit(ctx)
    }

    #[inline]
    fn transitions(&self) -> &[Transition<K, C>] {
        (**self).transitions()
    }

    #[inline]
    fn can_transition_when_disabled(&self) -> bool {
        (**self).can_transition_when_disabled()
    }
}
