//! Transition predicates.

use std::fmt;

/// Boxed predicate evaluated against the shared context.
pub type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// An outbound edge of a state: move to `target` once `predicate` holds.
///
/// Predicates receive the context by shared reference, so evaluating a
/// transition can never mutate the context.
pub struct Transition<K, C> {
    target: K,
    predicate: Predicate<C>,
}

impl<K: Copy, C> Transition<K, C> {
    /// Creates a transition to `target` guarded by `predicate`.
    pub fn new<F>(target: K, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            target,
            predicate: Box::new(predicate),
        }
    }

    /// Creates a transition that fires unconditionally.
    pub fn always(target: K) -> Self {
        Self::new(target, |_| true)
    }

    /// Returns the key of the state this transition leads to.
    #[inline]
    pub fn target(&self) -> K {
        self.target
    }

    /// Evaluates the guard.
    #[inline]
    pub fn is_satisfied(&self, ctx: &C) -> bool {
        (self.predicate)(ctx)
    }
}

impl<K: fmt::Debug, C> fmt::Debug for Transition<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
