use std::fmt;

/// One of the four edges of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction facing the other way. Involutive.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit offset towards the neighboring cell.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Applies `times` quarter turns clockwise (Up → Right → Down → Left).
    ///
    /// Only `times mod 4` matters; zero or negative counts are the identity.
    pub fn rotate(self, times: i32) -> Self {
        if times <= 0 {
            return self;
        }

        (0..times % 4).fold(self, |direction, _| direction.clockwise())
    }

    /// One quarter turn clockwise.
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Stable digit used by save snapshots.
    pub const fn code(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parses a digit character produced by [`Direction::code`].
    pub fn from_code_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(Self::from_code)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn opposite_is_involutive() {
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn four_turns_is_identity() {
        for direction in Direction::ALL {
            assert_eq!(direction.rotate(4), direction);
            for n in 0..12 {
                assert_eq!(direction.rotate(n), direction.rotate(n % 4));
            }
        }
    }

    #[test]
    fn non_positive_rotation_is_identity() {
        assert_eq!(Direction::Left.rotate(0), Direction::Left);
        assert_eq!(Direction::Left.rotate(-3), Direction::Left);
    }

    #[test]
    fn rotation_is_clockwise() {
        assert_eq!(Direction::Up.rotate(1), Direction::Right);
        assert_eq!(Direction::Up.rotate(2), Direction::Down);
        assert_eq!(Direction::Up.rotate(3), Direction::Left);
    }

    #[test]
    fn deltas_are_row_major() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn codes_parse_back() {
        for direction in Direction::ALL {
            let c = char::from(b'0' + direction.code());
            assert_eq!(Direction::from_code_char(c), Some(direction));
        }
        assert_eq!(Direction::from_code_char('7'), None);
        assert_eq!(Direction::from_code_char('x'), None);
    }
}
