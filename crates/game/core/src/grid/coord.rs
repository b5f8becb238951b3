use std::fmt;

use super::Direction;

/// Cell coordinate on a circuit grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent coordinate in `direction`. May lie outside any grid.
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of cells.
    pub const fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inclusive-exclusive bounds check.
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.columns
            && (coord.y as u32) < self.rows
    }

    /// Row-major linear index, or `None` when out of bounds.
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.columns as usize + coord.x as usize)
    }

    /// Inverse of [`GridSize::index`].
    pub fn coord(&self, index: usize) -> Option<GridCoord> {
        if index >= self.len() {
            return None;
        }
        let columns = self.columns as usize;
        Some(GridCoord::new((index % columns) as i32, (index / columns) as i32))
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.len()).filter_map(|index| self.coord(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive_exclusive() {
        let size = GridSize::new(3, 2);
        assert!(size.contains(GridCoord::new(0, 0)));
        assert!(size.contains(GridCoord::new(2, 1)));
        assert!(!size.contains(GridCoord::new(3, 0)));
        assert!(!size.contains(GridCoord::new(0, 2)));
        assert!(!size.contains(GridCoord::new(-1, 0)));
    }

    #[test]
    fn index_is_row_major() {
        let size = GridSize::new(3, 2);
        assert_eq!(size.index(GridCoord::new(2, 1)), Some(5));
        assert_eq!(size.index(GridCoord::new(1, 0)), Some(1));
        assert_eq!(size.index(GridCoord::new(0, -1)), None);
        assert_eq!(size.coord(4), Some(GridCoord::new(1, 1)));
        assert_eq!(size.coord(6), None);
    }

    #[test]
    fn coords_visit_every_cell_once() {
        let size = GridSize::new(4, 3);
        let coords: Vec<_> = size.coords().collect();
        assert_eq!(coords.len(), 12);
        for (index, coord) in coords.iter().enumerate() {
            assert_eq!(size.index(*coord), Some(index));
        }
    }

    #[test]
    fn neighbor_follows_direction() {
        let origin = GridCoord::new(1, 1);
        assert_eq!(origin.neighbor(Direction::Up), GridCoord::new(1, 0));
        assert_eq!(origin.neighbor(Direction::Right), GridCoord::new(2, 1));
    }
}
