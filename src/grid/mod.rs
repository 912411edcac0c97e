mod direction;
mod layout;
mod point;
mod problem;

pub use direction::Direction;
pub use layout::{Layout, LayoutError};
pub use point::Point;
pub use problem::GridPathProblem;
