use smallvec::SmallVec;
use std::fmt::Debug;
use std::hash::Hash;

/// Typical branching factor, successor lists up to this length stay on the
/// stack.
const TYPICAL_BRANCHING: usize = 4;

/// The successors of a state, as returned by
/// [`SearchProblem::get_successors`].
pub type Successors<S, A> = SmallVec<[Successor<S, A>; TYPICAL_BRANCHING]>;

/// A single outgoing transition of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// The state the transition leads to
    pub state: S,
    /// The action that takes the transition
    pub action: A,
    /// The step cost of the transition
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A state space to search over. This is the whole interface between a search
/// and the domain it runs on: the search never inspects states beyond cloning,
/// hashing and comparing them.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn get_start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`.
    fn get_successors(&self, state: &Self::State) -> Successors<Self::State, Self::Action>;
}

/// A [`SearchProblem`] whose states have a position in the plane. Informed
/// strategies use the positions to estimate remaining distance, uninformed
/// strategies never call these methods.
pub trait SpatialProblem: SearchProblem {
    /// The position of the goal.
    fn goal_position(&self) -> (f64, f64);

    /// The position of `state`.
    fn position(&self, state: &Self::State) -> (f64, f64);
}
