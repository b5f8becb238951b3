//! Tunable parameters for the circuit, motion and player systems.
//!
//! Every struct carries `const` defaults so hosts can build a working setup
//! without data files; the content crate overrides them from RON/TOML.

/// Electrical circuit puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CircuitConfig {
    /// Freeze rotation and re-propagation once every input is satisfied.
    pub disable_when_connected: bool,
}

impl CircuitConfig {
    /// Terminal ids are drawn from `0..=MAX_TERMINAL_ID`.
    pub const MAX_TERMINAL_ID: u8 = 25;
    /// A cell edge carries at most one direction slot per flow group.
    pub const MAX_FLOW_DIRECTIONS: usize = 4;

    pub const fn new() -> Self {
        Self {
            disable_when_connected: false,
        }
    }

    pub const fn locking() -> Self {
        Self {
            disable_when_connected: true,
        }
    }
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Motion blender configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Units per second at which a suppressed blender pulls its output to zero.
    pub suppress_reset_speed: f32,
    /// Units per second at which an inactive module decays its output.
    pub module_reset_speed: f32,
}

impl MotionConfig {
    pub const DEFAULT_SUPPRESS_RESET_SPEED: f32 = 4.0;
    pub const DEFAULT_MODULE_RESET_SPEED: f32 = 2.0;

    pub const fn new() -> Self {
        Self {
            suppress_reset_speed: Self::DEFAULT_SUPPRESS_RESET_SPEED,
            module_reset_speed: Self::DEFAULT_MODULE_RESET_SPEED,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Player locomotion tuning shared by every player state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub crouch_speed: f32,
    pub jump_height: f32,
    pub gravity: f32,
    pub ladder_climb_speed: f32,
    /// Speed of the scripted move onto or off a ladder.
    pub ladder_mount_speed: f32,
    pub push_speed: f32,
    /// Mouse sensitivity multiplier applied while pushing.
    pub push_sensitivity_scale: f32,
    /// Slope angle in degrees above which the player starts sliding.
    pub slide_slope_limit: f32,
    pub slide_acceleration: f32,
    pub slide_max_speed: f32,
    pub zipline_speed: f32,
    /// Mouse sensitivity multiplier applied while hiding.
    pub hiding_sensitivity_scale: f32,
    /// Positions closer than this are considered reached.
    pub arrive_distance: f32,
}

impl PlayerConfig {
    pub const fn new() -> Self {
        Self {
            walk_speed: 3.0,
            run_speed: 5.5,
            crouch_speed: 1.5,
            jump_height: 1.0,
            gravity: -9.81,
            ladder_climb_speed: 1.5,
            ladder_mount_speed: 3.0,
            push_speed: 1.0,
            push_sensitivity_scale: 0.5,
            slide_slope_limit: 40.0,
            slide_acceleration: 6.0,
            slide_max_speed: 9.0,
            zipline_speed: 6.0,
            hiding_sensitivity_scale: 0.35,
            arrive_distance: 0.05,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}
