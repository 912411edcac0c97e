//! The search strategies. A strategy never gets to touch the search loop, it
//! only decides the order in which the frontier is popped, by assigning every
//! generated node a g and an h value. The driver in
//! [`graph_search`](crate::search::graph_search) orders the frontier by their
//! sum.

use crate::search::{
    graph_search, SearchNode, SearchProblem, SearchResult, SearchStatistics, SpatialProblem,
};
use ordered_float::OrderedFloat;
use strum_macros::Display;

pub type HeuristicValue = OrderedFloat<f64>;

/// A search strategy, expressed as a pair of cost functions. Both are pure
/// functions of the node, they are evaluated once when the node is generated.
pub trait Strategy<P: SearchProblem> {
    /// Cost of reaching `node` from the start.
    fn g(&self, node: &SearchNode<P::State, P::Action>) -> HeuristicValue;

    /// Estimated cost of reaching the goal from `node`.
    fn h(&self, node: &SearchNode<P::State, P::Action>, problem: &P) -> HeuristicValue;
}

/// Depth-first search. A constant g and an h that rewards depth make the
/// frontier behave like a stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl<P: SearchProblem> Strategy<P> for DepthFirst {
    fn g(&self, _node: &SearchNode<P::State, P::Action>) -> HeuristicValue {
        OrderedFloat(0.)
    }

    fn h(&self, node: &SearchNode<P::State, P::Action>, _problem: &P) -> HeuristicValue {
        OrderedFloat(-f64::from(node.get_depth()))
    }
}

/// Breadth-first search. A g that grows with depth and a constant h make the
/// frontier behave like a queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl<P: SearchProblem> Strategy<P> for BreadthFirst {
    fn g(&self, node: &SearchNode<P::State, P::Action>) -> HeuristicValue {
        OrderedFloat(f64::from(node.get_depth()))
    }

    fn h(&self, _node: &SearchNode<P::State, P::Action>, _problem: &P) -> HeuristicValue {
        OrderedFloat(0.)
    }
}

/// A* search with the straight-line distance to the goal as the heuristic.
/// Only available on problems whose states have a position in the plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl<P: SpatialProblem> Strategy<P> for AStar {
    fn g(&self, node: &SearchNode<P::State, P::Action>) -> HeuristicValue {
        OrderedFloat(f64::from(node.get_depth()))
    }

    fn h(&self, node: &SearchNode<P::State, P::Action>, problem: &P) -> HeuristicValue {
        let (x, y) = problem.position(node.get_state());
        let (goal_x, goal_y) = problem.goal_position();
        OrderedFloat((x - goal_x).hypot(y - goal_y))
    }
}

pub fn depth_first_search<P: SearchProblem>(
    problem: &P,
) -> (SearchResult<P::Action>, SearchStatistics) {
    graph_search(problem, &DepthFirst)
}

pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
) -> (SearchResult<P::Action>, SearchStatistics) {
    graph_search(problem, &BreadthFirst)
}

pub fn a_star_search<P: SpatialProblem>(
    problem: &P,
) -> (SearchResult<P::Action>, SearchStatistics) {
    graph_search(problem, &AStar)
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyName {
    #[clap(name = "dfs", help = "Depth-first search, expands the deepest node first.")]
    DFS,
    #[clap(
        name = "bfs",
        help = "Breadth-first search, expands the shallowest node first."
    )]
    BFS,
    #[clap(
        name = "astar",
        help = "A* search with the straight-line distance to the goal as the heuristic."
    )]
    AStar,
}

impl StrategyName {
    pub fn search<P: SpatialProblem>(
        &self,
        problem: &P,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        match self {
            StrategyName::DFS => depth_first_search(problem),
            StrategyName::BFS => breadth_first_search(problem),
            StrategyName::AStar => a_star_search(problem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{NodeId, SearchTree, Successors};
    use assert_approx_eq::assert_approx_eq;

    /// States are points in the plane and nothing moves, which is all the
    /// cost functions care about.
    struct PlaneProblem {
        goal: (i32, i32),
    }

    impl SearchProblem for PlaneProblem {
        type State = (i32, i32);
        type Action = String;

        fn get_start_state(&self) -> (i32, i32) {
            (0, 0)
        }

        fn is_goal_state(&self, state: &(i32, i32)) -> bool {
            *state == self.goal
        }

        fn get_successors(&self, _state: &(i32, i32)) -> Successors<(i32, i32), String> {
            Successors::new()
        }
    }

    impl SpatialProblem for PlaneProblem {
        fn goal_position(&self) -> (f64, f64) {
            (f64::from(self.goal.0), f64::from(self.goal.1))
        }

        fn position(&self, state: &(i32, i32)) -> (f64, f64) {
            (f64::from(state.0), f64::from(state.1))
        }
    }

    fn tree_with_depth_two() -> (SearchTree<(i32, i32), String>, NodeId) {
        let mut tree = SearchTree::new();
        let root_id = tree.insert_root((0, 0));
        let middle_id = tree.insert_child((1, 0), "a".to_owned(), root_id);
        let leaf_id = tree.insert_child((3, 4), "b".to_owned(), middle_id);
        (tree, leaf_id)
    }

    #[test]
    fn depth_first_rewards_depth() {
        let problem = PlaneProblem { goal: (0, 0) };
        let (tree, leaf_id) = tree_with_depth_two();
        let node = tree.get_node(leaf_id);
        assert_eq!(
            Strategy::<PlaneProblem>::g(&DepthFirst, node),
            OrderedFloat(0.)
        );
        assert_eq!(DepthFirst.h(node, &problem), OrderedFloat(-2.));
    }

    #[test]
    fn breadth_first_penalises_depth() {
        let problem = PlaneProblem { goal: (0, 0) };
        let (tree, leaf_id) = tree_with_depth_two();
        let node = tree.get_node(leaf_id);
        assert_eq!(
            Strategy::<PlaneProblem>::g(&BreadthFirst, node),
            OrderedFloat(2.)
        );
        assert_eq!(BreadthFirst.h(node, &problem), OrderedFloat(0.));
    }

    #[test]
    fn a_star_estimates_straight_line_distance() {
        let problem = PlaneProblem { goal: (0, 0) };
        let (tree, leaf_id) = tree_with_depth_two();
        let node = tree.get_node(leaf_id);
        assert_eq!(Strategy::<PlaneProblem>::g(&AStar, node), OrderedFloat(2.));
        // The leaf sits at (3, 4), a 3-4-5 triangle away from the goal.
        assert_approx_eq!(AStar.h(node, &problem).into_inner(), 5.);
    }

    #[test]
    fn strategy_names_render_lowercase() {
        assert_eq!(StrategyName::DFS.to_string(), "dfs");
        assert_eq!(StrategyName::BFS.to_string(), "bfs");
        assert_eq!(StrategyName::AStar.to_string(), "astar");
    }
}
