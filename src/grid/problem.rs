//! This module casts finding a path through a maze as a search problem.

use crate::grid::{Direction, Layout, Point};
use crate::search::{SearchProblem, SpatialProblem, Successor, Successors};
use strum::IntoEnumIterator;

/// The problem of walking from one cell of a [`Layout`] to another. By
/// default the endpoints are the ones marked in the layout, but any pair of
/// passable cells works.
#[derive(Debug, Clone)]
pub struct GridPathProblem<'a> {
    layout: &'a Layout,
    start: Point,
    goal: Point,
}

impl<'a> GridPathProblem<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            start: layout.start(),
            goal: layout.goal(),
        }
    }

    /// The same walls with different endpoints.
    pub fn with_endpoints(layout: &'a Layout, start: Point, goal: Point) -> Self {
        debug_assert!(
            !layout.is_wall(start) && !layout.is_wall(goal),
            "Endpoints must be passable"
        );
        Self {
            layout,
            start,
            goal,
        }
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The summed step cost of following `actions` from the start cell, or
    /// `None` if any step runs into a wall.
    pub fn cost_of_actions(&self, actions: &[Direction]) -> Option<f64> {
        let mut current = self.start;
        let mut total = 0.;
        for action in actions {
            current = current.step(*action);
            if self.layout.is_wall(current) {
                return None;
            }
            total += 1.;
        }
        Some(total)
    }
}

impl SearchProblem for GridPathProblem<'_> {
    type State = Point;
    type Action = Direction;

    fn get_start_state(&self) -> Point {
        self.start
    }

    fn is_goal_state(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn get_successors(&self, state: &Point) -> Successors<Point, Direction> {
        Direction::iter()
            .map(|direction| (state.step(direction), direction))
            .filter(|(next, _)| !self.layout.is_wall(*next))
            .map(|(next, direction)| Successor::new(next, direction, 1.))
            .collect()
    }
}

impl SpatialProblem for GridPathProblem<'_> {
    fn goal_position(&self) -> (f64, f64) {
        self.goal.into()
    }

    fn position(&self, state: &Point) -> (f64, f64) {
        (*state).into()
    }
}
