mod explored;
mod graph_search;
mod node;
mod plan;
mod problem;
mod statistics;
mod strategies;
mod tree;
mod validate;

pub use explored::ExploredSet;
pub use graph_search::{graph_search, SearchResult};
pub use node::SearchNode;
pub use plan::Plan;
pub use problem::{SearchProblem, SpatialProblem, Successor, Successors};
pub use statistics::SearchStatistics;
pub use strategies::{
    a_star_search, breadth_first_search, depth_first_search, AStar, BreadthFirst, DepthFirst,
    HeuristicValue, Strategy, StrategyName,
};
pub use tree::{NodeId, SearchTree, NO_NODE};
pub use validate::{validate, ValidateError};
