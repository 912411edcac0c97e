use crate::search::{SearchProblem, SpatialProblem, Successor, Successors};
use std::cell::RefCell;

pub const TINY_MAZE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/tiny.lay"));

pub const MEDIUM_MAZE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/medium.lay"));

pub const OPEN_MAZE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/open.lay"));

pub const CORRIDOR_MAZE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/corridor.lay"));

pub const BLOCKED_MAZE_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/mazes/blocked.lay"));

/// A one-way chain of `length` states, `0` through `length - 1`. State `i`
/// has the single successor `i + 1`, reached by action `E{i + 1}`, and the
/// last state is the goal. With `length` 1 the start state is the goal.
#[derive(Debug)]
pub struct LinearProblem {
    pub length: u32,
}

impl SearchProblem for LinearProblem {
    type State = u32;
    type Action = String;

    fn get_start_state(&self) -> u32 {
        0
    }

    fn is_goal_state(&self, state: &u32) -> bool {
        *state == self.length - 1
    }

    fn get_successors(&self, state: &u32) -> Successors<u32, String> {
        let mut successors = Successors::new();
        if state + 1 < self.length {
            successors.push(Successor::new(state + 1, format!("E{}", state + 1), 1.));
        }
        successors
    }
}

impl SpatialProblem for LinearProblem {
    fn goal_position(&self) -> (f64, f64) {
        (f64::from(self.length - 1), 0.)
    }

    fn position(&self, state: &u32) -> (f64, f64) {
        (f64::from(*state), 0.)
    }
}

/// Wraps a problem and records every state whose successors are requested,
/// which is exactly the set of expanded states.
#[derive(Debug)]
pub struct RecordingProblem<'a, P: SearchProblem> {
    inner: &'a P,
    expanded: RefCell<Vec<P::State>>,
}

impl<'a, P: SearchProblem> RecordingProblem<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self {
            inner,
            expanded: RefCell::new(vec![]),
        }
    }

    /// The recorded states, in expansion order.
    pub fn expanded_states(&self) -> Vec<P::State> {
        self.expanded.borrow().clone()
    }
}

impl<P: SearchProblem> SearchProblem for RecordingProblem<'_, P> {
    type State = P::State;
    type Action = P::Action;

    fn get_start_state(&self) -> P::State {
        self.inner.get_start_state()
    }

    fn is_goal_state(&self, state: &P::State) -> bool {
        self.inner.is_goal_state(state)
    }

    fn get_successors(&self, state: &P::State) -> Successors<P::State, P::Action> {
        self.expanded.borrow_mut().push(state.clone());
        self.inner.get_successors(state)
    }
}

impl<P: SpatialProblem> SpatialProblem for RecordingProblem<'_, P> {
    fn goal_position(&self) -> (f64, f64) {
        self.inner.goal_position()
    }

    fn position(&self, state: &P::State) -> (f64, f64) {
        self.inner.position(state)
    }
}
