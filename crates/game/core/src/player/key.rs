use crate::motion::MotionProfile;

use super::StateDataKind;

/// Closed set of player behavior modes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PlayerStateKey {
    Idle,
    Walk,
    Run,
    Crouch,
    Jump,
    Death,
    Hiding,
    Ladder,
    Pushing,
    Sliding,
    Zipline,
}

impl PlayerStateKey {
    /// Payload this state requires on entry, if any.
    pub const fn expected_data(self) -> Option<StateDataKind> {
        match self {
            Self::Ladder => Some(StateDataKind::Ladder),
            Self::Pushing => Some(StateDataKind::Pushing),
            Self::Zipline => Some(StateDataKind::Zipline),
            Self::Hiding => Some(StateDataKind::Hiding),
            _ => None,
        }
    }

    /// Grounded locomotion states sharing the basic movement model.
    pub const fn is_grounded_locomotion(self) -> bool {
        matches!(self, Self::Idle | Self::Walk | Self::Run | Self::Crouch)
    }

    pub const fn motion_profile(self) -> MotionProfile {
        match self {
            Self::Idle => MotionProfile::Idle,
            Self::Walk => MotionProfile::Walk,
            Self::Run => MotionProfile::Run,
            Self::Crouch => MotionProfile::Crouch,
            Self::Jump => MotionProfile::Airborne,
            Self::Death => MotionProfile::Dead,
            Self::Hiding => MotionProfile::Hidden,
            Self::Ladder => MotionProfile::Ladder,
            Self::Pushing => MotionProfile::Push,
            Self::Sliding => MotionProfile::Slide,
            Self::Zipline => MotionProfile::Zipline,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for key in PlayerStateKey::iter() {
            assert_eq!(PlayerStateKey::from_str(key.as_ref()), Ok(key));
        }
        assert_eq!(PlayerStateKey::Zipline.to_string(), "zipline");
    }

    #[test]
    fn only_scripted_states_need_data() {
        let keyed: Vec<_> = PlayerStateKey::iter()
            .filter(|key| key.expected_data().is_some())
            .collect();
        assert_eq!(
            keyed,
            [
                PlayerStateKey::Hiding,
                PlayerStateKey::Ladder,
                PlayerStateKey::Pushing,
                PlayerStateKey::Zipline
            ]
        );
    }
}
