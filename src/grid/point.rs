use crate::grid::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on a grid. `x` grows to the east and `y` grows to the
/// south, matching the order the layout files are read in, so the top-left
/// cell is `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one step in `direction`.
    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (f64::from(point.x), f64::from(point.y))
    }
}
