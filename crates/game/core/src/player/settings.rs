use glam::Vec2;

/// Inclusive `[min, max]` range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl MinMax {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn from_vec2(v: Vec2) -> Self {
        Self { min: v.x, max: v.y }
    }

    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.min, self.max)
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Mouse-look limits in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LookLimits {
    pub pitch: MinMax,
    pub yaw: MinMax,
}

impl LookLimits {
    pub const FREE: Self = Self {
        pitch: MinMax::new(-85.0, 85.0),
        yaw: MinMax::new(-180.0, 180.0),
    };

    pub fn is_valid(&self) -> bool {
        self.pitch.is_valid() && self.yaw.is_valid()
    }
}

impl Default for LookLimits {
    fn default() -> Self {
        Self::FREE
    }
}

/// Player-facing settings that states temporarily override.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerSettings {
    pub mouse_sensitivity: f32,
    pub look_limits: LookLimits,
    pub items_usable: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            look_limits: LookLimits::FREE,
            items_usable: true,
        }
    }
}

bitflags::bitflags! {
    /// Player systems a state can switch off while it is active.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DisabledSystems: u8 {
        const MOVEMENT = 1 << 0;
        const LOOK = 1 << 1;
        const JUMP = 1 << 2;
        const CROUCH = 1 << 3;
        const ITEMS = 1 << 4;
        const INTERACT = 1 << 5;
        const LEAN = 1 << 6;
    }
}
