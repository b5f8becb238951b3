use glam::Vec2;

bitflags::bitflags! {
    /// Named input actions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputActions: u16 {
        const JUMP = 1 << 0;
        const RUN = 1 << 1;
        const CROUCH = 1 << 2;
        const USE = 1 << 3;
        const LEAN_LEFT = 1 << 4;
        const LEAN_RIGHT = 1 << 5;
    }
}

/// Input state sampled once per frame by the host.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    /// Movement axis, x = strafe, y = forward. Components in `[-1, 1]`.
    pub move_axis: Vec2,
    /// Mouse/stick look delta for this frame.
    pub look_delta: Vec2,
    /// Actions that went down this frame.
    pub pressed: InputActions,
    /// Actions currently held.
    pub held: InputActions,
}

impl InputSnapshot {
    /// True only on the frame the action was pressed.
    #[inline]
    pub fn pressed_once(&self, action: InputActions) -> bool {
        self.pressed.contains(action)
    }

    #[inline]
    pub fn is_held(&self, action: InputActions) -> bool {
        self.held.contains(action)
    }

    pub fn is_moving(&self) -> bool {
        self.move_axis.length_squared() > f32::EPSILON
    }

    /// Lean axis derived from the lean actions: -1 left, 1 right.
    pub fn lean(&self) -> f32 {
        let left = self.is_held(InputActions::LEAN_LEFT) as i8;
        let right = self.is_held(InputActions::LEAN_RIGHT) as i8;
        f32::from(right - left)
    }

    /// Clears the one-shot `pressed` set; call after a frame is consumed.
    pub fn end_frame(&mut self) {
        self.pressed = InputActions::empty();
        self.look_delta = Vec2::ZERO;
    }
}
