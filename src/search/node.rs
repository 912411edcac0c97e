use crate::search::{HeuristicValue, NodeId, NO_NODE};
use ordered_float::Float;

/// A [`SearchNode`] is a node in the search tree. It pairs a problem state
/// with the information the search needs about it, such as the cost values and
/// the parent node.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// The problem state this node wraps
    state: S,
    /// Action that led from the parent to this node, `None` for the root
    action: Option<A>,
    /// Parent node, `NO_NODE` for the root
    parent_id: NodeId,
    /// Number of edges between the root and this node
    depth: u32,
    /// G-value of the node, i.e. the cost to reach this node. What that means
    /// exactly is up to the search strategy.
    g: HeuristicValue,
    /// H-value of the node, i.e. the estimated cost from this node to the
    /// goal. What that means exactly is up to the search strategy.
    h: HeuristicValue,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search tree. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            action: None,
            parent_id: NO_NODE,
            depth: 0,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
        }
    }

    /// Create a new search node with a parent. This should be used for all
    /// nodes that are not the root node. For root nodes see
    /// [`SearchNode::new_without_parent`].
    pub fn new_with_parent(state: S, action: A, parent_id: NodeId, depth: u32) -> Self {
        Self {
            state,
            action: Some(action),
            parent_id,
            depth,
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
        }
    }

    /// Assign the cost values of the node. Both values start out as infinity
    /// and may be assigned exactly once.
    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        debug_assert!(
            self.g.is_infinite() && self.h.is_infinite(),
            "Node costs can only be assigned once"
        );
        self.g = g;
        self.h = h;
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_depth(&self) -> u32 {
        self.depth
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    /// F-value of the node, always the sum of the g and h values.
    pub fn get_f(&self) -> HeuristicValue {
        self.g + self.h
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn new_nodes_have_infinite_costs() {
        let node: SearchNode<i32, String> = SearchNode::new_without_parent(42);
        assert!(node.get_g().is_infinite());
        assert!(node.get_h().is_infinite());
        assert!(node.get_f().is_infinite());
    }

    #[test]
    fn root_node_has_no_parent_and_no_action() {
        let node: SearchNode<i32, String> = SearchNode::new_without_parent(42);
        assert!(node.is_root());
        assert_eq!(node.get_parent_id(), NO_NODE);
        assert_eq!(node.get_action(), None);
        assert_eq!(node.get_depth(), 0);
    }

    #[test]
    fn open_assigns_costs_and_f_is_their_sum() {
        let mut node: SearchNode<i32, String> = SearchNode::new_without_parent(42);
        node.open(OrderedFloat(3.), OrderedFloat(4.));
        assert_eq!(node.get_g(), OrderedFloat(3.));
        assert_eq!(node.get_h(), OrderedFloat(4.));
        assert_eq!(node.get_f(), OrderedFloat(7.));
    }
}
