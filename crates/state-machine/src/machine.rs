//! State machine driver.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::{MachineError, State};

/// Outcome of a single [`StateMachine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<K> {
    /// A transition fired; `from` exited before `to` entered.
    Transitioned { from: K, to: K },

    /// No transition fired and the active state's update hook ran.
    Updated(K),

    /// The machine is disabled; nothing ran.
    Suspended(K),
}

impl<K: Copy> Step<K> {
    /// Key of the state that is active after this step.
    pub fn active(&self) -> K {
        match *self {
            Step::Transitioned { to, .. } => to,
            Step::Updated(key) | Step::Suspended(key) => key,
        }
    }

    #[inline]
    pub fn is_transition(&self) -> bool {
        matches!(self, Step::Transitioned { .. })
    }
}

/// Owns a closed set of states and drives the active one.
pub struct StateMachine<K, C> {
    states: Vec<Box<dyn State<K, C>>>,
    lookup: HashMap<K, usize>,
    initial: usize,
    active: usize,
    previous: Option<K>,
    started: bool,
    enabled: bool,
}

impl<K, C> StateMachine<K, C>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    /// Registers `states` and selects `initial` as the state entered by
    /// [`start`](Self::start). There is no implicit default state.
    pub fn new(initial: K, states: Vec<Box<dyn State<K, C>>>) -> Result<Self, MachineError<K>> {
        let mut lookup = HashMap::with_capacity(states.len());
        for (index, state) in states.iter().enumerate() {
            if lookup.insert(state.key(), index).is_some() {
                return Err(MachineError::DuplicateState(state.key()));
            }
        }

        let initial = *lookup
            .get(&initial)
            .ok_or(MachineError::UnknownState(initial))?;

        Ok(Self {
            states,
            lookup,
            initial,
            active: initial,
            previous: None,
            started: false,
            enabled: true,
        })
    }

    /// Enters the initial state.
    pub fn start(&mut self, ctx: &mut C) -> Result<K, MachineError<K>> {
        if self.started {
            return Err(MachineError::AlreadyStarted);
        }

        let state = &mut self.states[self.initial];
        state
            .can_enter(ctx)
            .map_err(|reason| MachineError::EnterRejected {
                state: state.key(),
                reason,
            })?;
        state.on_enter(ctx);

        self.active = self.initial;
        self.started = true;
        Ok(self.active_key())
    }

    /// Runs one frame.
    ///
    /// The active state's transitions are evaluated in declaration order and
    /// the first satisfied one wins. While the machine is disabled only
    /// transitions into states that opt in through
    /// [`State::can_transition_when_disabled`] are considered, and the update
    /// hook is skipped.
    pub fn tick(&mut self, ctx: &mut C) -> Result<Step<K>, MachineError<K>> {
        if !self.started {
            return Err(MachineError::NotStarted);
        }

        let fired = self.states[self.active]
            .transitions()
            .iter()
            .filter(|transition| self.enabled || self.reachable_when_disabled(transition.target()))
            .find(|transition| transition.is_satisfied(ctx))
            .map(|transition| transition.target());

        if let Some(target) = fired {
            return self.change_state(target, ctx);
        }

        if !self.enabled {
            return Ok(Step::Suspended(self.active_key()));
        }

        self.states[self.active].on_update(ctx);
        Ok(Step::Updated(self.active_key()))
    }

    /// Forces a transition to `target`.
    ///
    /// Entry preconditions are checked first; on failure nothing has changed.
    /// Re-entering the active state runs its exit and enter hooks again.
    pub fn change_state(&mut self, target: K, ctx: &mut C) -> Result<Step<K>, MachineError<K>> {
        if !self.started {
            return Err(MachineError::NotStarted);
        }

        let next = *self
            .lookup
            .get(&target)
            .ok_or(MachineError::UnknownState(target))?;

        if !self.enabled && !self.states[next].can_transition_when_disabled() {
            return Err(MachineError::Disabled { state: target });
        }

        self.states[next]
            .can_enter(ctx)
            .map_err(|reason| MachineError::EnterRejected {
                state: target,
                reason,
            })?;

        let from = self.active_key();
        self.states[self.active].on_exit(ctx);
        self.previous = Some(from);
        self.active = next;
        self.states[self.active].on_enter(ctx);

        Ok(Step::Transitioned { from, to: target })
    }

    /// Key of the active state.
    #[inline]
    pub fn active_key(&self) -> K {
        self.states[self.active].key()
    }

    /// Key of the state that was active before the last transition.
    #[inline]
    pub fn previous_key(&self) -> Option<K> {
        self.previous
    }

    #[inline]
    pub fn is_in(&self, key: K) -> bool {
        self.active_key() == key
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` if a state is registered under `key`.
    pub fn contains(&self, key: K) -> bool {
        self.lookup.contains_key(&key)
    }

    /// Looks up a registered state.
    pub fn state(&self, key: K) -> Option<&dyn State<K, C>> {
        self.lookup.get(&key).map(|&index| &*self.states[index])
    }

    /// Iterates registered keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.states.iter().map(|state| state.key())
    }

    fn reachable_when_disabled(&self, key: K) -> bool {
        self.lookup
            .get(&key)
            .is_some_and(|&index| self.states[index].can_transition_when_disabled())
    }
}

impl<K: fmt::Debug + Copy + Eq + Hash, C> fmt::Debug for StateMachine<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("active", &self.active_key())
            .field("previous", &self.previous)
            .field("started", &self.started)
            .field("enabled", &self.enabled)
            .field("states", &self.states.len())
            .finish()
    }
}
