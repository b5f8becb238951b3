use glam::Vec3;

use crate::error::{ErrorSeverity, GameError};

use super::{LookLimits, PlayerStateKey};

/// Discriminant of [`StateData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StateDataKind {
    Ladder,
    Pushing,
    Zipline,
    Hiding,
}

/// Ladder segment to climb.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderData {
    pub bottom: Vec3,
    pub top: Vec3,
    /// Where the player ends up after climbing off the top.
    pub exit: Vec3,
}

/// Object grabbed for pushing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushingData {
    pub object: Vec3,
    /// Axis the object slides along.
    pub direction: Vec3,
    /// Radius used for the collision sweep ahead of the object.
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZiplineData {
    pub start: Vec3,
    pub end: Vec3,
}

/// Hiding spot with its own look limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HidingData {
    pub spot: Vec3,
    pub look_limits: LookLimits,
}

/// Payload handed from the trigger that requests a transition to the entering
/// state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateData {
    Ladder(LadderData),
    Pushing(PushingData),
    Zipline(ZiplineData),
    Hiding(HidingData),
}

impl StateData {
    pub const fn kind(&self) -> StateDataKind {
        match self {
            Self::Ladder(_) => StateDataKind::Ladder,
            Self::Pushing(_) => StateDataKind::Pushing,
            Self::Zipline(_) => StateDataKind::Zipline,
            Self::Hiding(_) => StateDataKind::Hiding,
        }
    }

    /// Checks the payload against what `state` expects.
    pub fn validate_for(
        state: PlayerStateKey,
        data: Option<&StateData>,
    ) -> Result<(), StateDataError> {
        let expected = state.expected_data();
        let data = match (expected, data) {
            (None, None) => return Ok(()),
            (None, Some(data)) => {
                return Err(StateDataError::Unexpected {
                    state,
                    found: data.kind(),
                });
            }
            (Some(expected), None) => return Err(StateDataError::Missing { state, expected }),
            (Some(expected), Some(data)) if data.kind() != expected => {
                return Err(StateDataError::Mismatch {
                    state,
                    expected,
                    found: data.kind(),
                });
            }
            (Some(_), Some(data)) => data,
        };

        let reason = match data {
            Self::Ladder(ladder) if ladder.bottom.distance_squared(ladder.top) <= f32::EPSILON => {
                Some("ladder top and bottom coincide")
            }
            Self::Pushing(push) if push.direction.length_squared() <= f32::EPSILON => {
                Some("push direction is zero")
            }
            Self::Zipline(line) if line.start.distance_squared(line.end) <= f32::EPSILON => {
                Some("zipline start and end coincide")
            }
            Self::Hiding(hiding) if !hiding.look_limits.is_valid() => {
                Some("hiding look limits are inverted")
            }
            _ => None,
        };

        match reason {
            Some(reason) => Err(StateDataError::Invalid { state, reason }),
            None => Ok(()),
        }
    }
}

/// Malformed transition payload.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StateDataError {
    #[error("state {state} requires {expected} data")]
    Missing {
        state: PlayerStateKey,
        expected: StateDataKind,
    },

    #[error("state {state} takes no data, got {found}")]
    Unexpected {
        state: PlayerStateKey,
        found: StateDataKind,
    },

    #[error("state {state} requires {expected} data, got {found}")]
    Mismatch {
        state: PlayerStateKey,
        expected: StateDataKind,
        found: StateDataKind,
    },

    #[error("invalid data for state {state}: {reason}")]
    Invalid {
        state: PlayerStateKey,
        reason: &'static str,
    },
}

impl GameError for StateDataError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Invalid { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "STATE_DATA_MISSING",
            Self::Unexpected { .. } => "STATE_DATA_UNEXPECTED",
            Self::Mismatch { .. } => "STATE_DATA_MISMATCH",
            Self::Invalid { .. } => "STATE_DATA_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> StateData {
        StateData::Ladder(LadderData {
            bottom: Vec3::ZERO,
            top: Vec3::Y * 3.0,
            exit: Vec3::new(0.0, 3.0, 1.0),
        })
    }

    #[test]
    fn payload_shape_is_checked() {
        assert!(StateData::validate_for(PlayerStateKey::Walk, None).is_ok());
        assert!(StateData::validate_for(PlayerStateKey::Ladder, Some(&ladder())).is_ok());

        assert_eq!(
            StateData::validate_for(PlayerStateKey::Ladder, None),
            Err(StateDataError::Missing {
                state: PlayerStateKey::Ladder,
                expected: StateDataKind::Ladder
            })
        );
        assert!(matches!(
            StateData::validate_for(PlayerStateKey::Zipline, Some(&ladder())),
            Err(StateDataError::Mismatch { .. })
        ));
        assert!(matches!(
            StateData::validate_for(PlayerStateKey::Idle, Some(&ladder())),
            Err(StateDataError::Unexpected { .. })
        ));
    }

    #[test]
    fn degenerate_geometry_is_invalid() {
        let zipline = StateData::Zipline(ZiplineData {
            start: Vec3::ONE,
            end: Vec3::ONE,
        });
        let err = StateData::validate_for(PlayerStateKey::Zipline, Some(&zipline)).unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "STATE_DATA_INVALID");
    }
}
