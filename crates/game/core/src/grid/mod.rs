//! Grid coordinates and cardinal directions.
//!
//! Rows grow downward: `Up` is `(0, -1)` and `Down` is `(0, 1)`. Linear cell
//! indices are row-major (`y * columns + x`).
mod coord;
mod direction;

pub use coord::{GridCoord, GridSize};
pub use direction::Direction;
