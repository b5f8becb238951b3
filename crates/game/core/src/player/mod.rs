//! Player locomotion modes.
//!
//! A [`PlayerStateMachine`] drives one active [`PlayerStateKey`] at a time over
//! a shared [`PlayerContext`]. Triggers in the world request scripted modes
//! with a typed [`StateData`] payload that is validated before the current
//! state exits.
mod context;
mod data;
mod key;
mod machine;
mod settings;
pub mod states;

pub use context::{PlayerContext, PlayerEvent};
pub use data::{
    HidingData, LadderData, PushingData, StateData, StateDataError, StateDataKind, ZiplineData,
};
pub use key::PlayerStateKey;
pub use machine::{PlayerError, PlayerStateMachine};
pub use settings::{DisabledSystems, LookLimits, MinMax, PlayerSettings};
