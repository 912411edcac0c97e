use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A compass move on the grid. The grid is read top-down, so north is the
/// direction of decreasing `y`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// The `(dx, dy)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn offsets_are_unit_steps() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn displays_as_the_plain_name() {
        assert_eq!(Direction::North.to_string(), "North");
        assert_eq!(Direction::West.to_string(), "West");
    }
}
