//! Frame-stepped finite state machine with ordered, first-match transitions.
//!
//! The machine owns a closed set of states keyed by a small `Copy` identifier
//! (usually an enum). Exactly one state is active at a time. Every frame the
//! active state's transitions are evaluated in declaration order; the first
//! satisfied predicate wins and the machine performs `exit(old)` followed by
//! `enter(new)`. When no transition fires the active state's update hook runs.
//!
//! - **Synchronous**: every call completes within the calling frame
//! - **Ordered**: transition order is significant and preserved exactly
//! - **Pure predicates**: predicates only see `&C`; side effects belong in hooks
//! - **Fail fast**: entry preconditions are checked before the old state exits
//!
//! # Architecture
//!
//! - [`State`]: Hooks for one behavior mode
//! - [`Transition`]: Target key plus predicate
//! - [`StateMachine`]: Owns the states and drives them
//! - [`Step`]: What a single tick did

pub mod error;
pub mod machine;
pub mod state;
pub mod transition;

pub use error::{EnterRejected, MachineError};
pub use machine::{StateMachine, Step};
pub use state::State;
pub use transition::{Predicate, Transition};
