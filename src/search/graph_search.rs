//! This module implements the best-first graph search loop that all
//! strategies share.

use crate::search::{
    ExploredSet, HeuristicValue, NodeId, Plan, SearchProblem, SearchStatistics, SearchTree,
    Strategy,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// The outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search reached a goal state, the plan leads there from the start
    /// state
    Solved(Plan<A>),
    /// The search ran out of frontier without reaching a goal state, so no
    /// goal state is reachable from the start state
    Exhausted,
}

impl<A> SearchResult<A> {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchResult::Solved(_))
    }

    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Solved(plan) => Some(plan),
            SearchResult::Exhausted => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Solved(plan) => Some(plan),
            SearchResult::Exhausted => None,
        }
    }
}

/// The frontier of a search, ordered by lowest f-value first. Ties are broken
/// in favour of the longest-waiting node, so two runs over the same problem
/// expand the same nodes in the same order.
struct Frontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    pushed: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, node_id: NodeId, f: HeuristicValue) {
        let arrival = self.pushed;
        self.pushed += 1;
        self.queue.push(node_id, Reverse((f, arrival)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Run a best-first search over `problem`, popping nodes in the order given
/// by `strategy`.
///
/// States are marked as explored when they are generated, not when they are
/// expanded, so every state enters the search tree at most once and the first
/// path found to a state is the one that is kept. Goal states are recognised
/// when they are popped, which lets strategies that find better paths late,
/// such as A*, report the better path.
pub fn graph_search<P, C>(problem: &P, strategy: &C) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: SearchProblem,
    C: Strategy<P>,
{
    let mut statistics = SearchStatistics::new();
    let mut tree = SearchTree::new();
    let mut explored = ExploredSet::new();
    let mut frontier = Frontier::new();

    let start_state = problem.get_start_state();
    explored.add(start_state.clone());
    let root_id = tree.insert_root(start_state);
    open_node(&mut tree, root_id, problem, strategy);
    frontier.push(root_id, tree.get_node(root_id).get_f());
    statistics.increment_generated_nodes();
    statistics.register_frontier_size(frontier.len());

    while let Some(node_id) = frontier.pop() {
        statistics.increment_expanded_nodes();

        if problem.is_goal_state(tree.get_node(node_id).get_state()) {
            statistics.finalise_search();
            return (SearchResult::Solved(tree.extract_plan(node_id)), statistics);
        }

        for successor in problem.get_successors(tree.get_node(node_id).get_state()) {
            if explored.exists(&successor.state) {
                statistics.increment_duplicate_states();
                continue;
            }
            explored.add(successor.state.clone());
            let child_id = tree.insert_child(successor.state, successor.action, node_id);
            open_node(&mut tree, child_id, problem, strategy);
            frontier.push(child_id, tree.get_node(child_id).get_f());
            statistics.increment_generated_nodes();
        }
        statistics.register_frontier_size(frontier.len());
    }

    statistics.finalise_search();
    (SearchResult::Exhausted, statistics)
}

/// Evaluate the cost functions for a freshly inserted node.
fn open_node<P, C>(
    tree: &mut SearchTree<P::State, P::Action>,
    node_id: NodeId,
    problem: &P,
    strategy: &C,
) where
    P: SearchProblem,
    C: Strategy<P>,
{
    let g = strategy.g(tree.get_node(node_id));
    let h = strategy.h(tree.get_node(node_id), problem);
    tree.get_node_mut(node_id).open(g, h);
}
