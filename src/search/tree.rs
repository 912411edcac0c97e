use crate::search::{Plan, SearchNode};
use segvec::{Linear, SegVec};

/// Identifier of a node in a [`SearchTree`], stable for the lifetime of the
/// tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Sentinel id used as the parent of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchTree`] is an arena for the nodes generated during a search. Nodes
/// are only ever appended, so a [`NodeId`] handed out once stays valid and the
/// parent links can be followed back to the root at any point. The tree does
/// not deduplicate states, that is the job of the
/// [`ExploredSet`](crate::search::ExploredSet).
#[derive(Debug)]
pub struct SearchTree<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchTree<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    /// Insert the root node. Must be the first insertion.
    pub fn insert_root(&mut self, state: S) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "Root must be the first node");
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new_without_parent(state));
        node_id
    }

    /// Insert a child of an existing node, its depth is derived from the
    /// parent.
    pub fn insert_child(&mut self, state: S, action: A, parent_id: NodeId) -> NodeId {
        let depth = self.get_node(parent_id).get_depth() + 1;
        let node_id = NodeId(self.nodes.len());
        self.nodes
            .push(SearchNode::new_with_parent(state, action, parent_id, depth));
        node_id
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S, A> {
        self.nodes.get_mut(node_id.0).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the parent links from `node_id` back to the root and return the
    /// `(state, action)` pairs in root-first order. The root pair carries no
    /// action.
    pub fn extract_path(&self, node_id: NodeId) -> Vec<(&S, Option<&A>)> {
        let mut path = vec![];
        let mut current_node = self.get_node(node_id);
        loop {
            path.push((current_node.get_state(), current_node.get_action()));
            if current_node.is_root() {
                break;
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        path.reverse();
        path
    }
}

impl<S, A: Clone> SearchTree<S, A> {
    /// Extract the plan that leads from the root to `node_id`. The root
    /// contributes no action, so the plan of the root itself is empty.
    pub fn extract_plan(&self, node_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(node_id);
        while NO_NODE != current_node.get_parent_id() {
            let action = current_node
                .get_action()
                .expect("Non-root node without an action");
            steps.push(action.clone());
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl<S, A> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of_three() -> (SearchTree<i32, String>, NodeId) {
        let mut tree = SearchTree::new();
        let root_id = tree.insert_root(0);
        let middle_id = tree.insert_child(1, "a".to_owned(), root_id);
        let leaf_id = tree.insert_child(2, "b".to_owned(), middle_id);
        (tree, leaf_id)
    }

    #[test]
    fn depth_is_derived_from_the_parent() {
        let (tree, leaf_id) = chain_of_three();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get_node(leaf_id).get_depth(), 2);
    }

    #[test]
    fn extract_path_is_root_first() {
        let (tree, leaf_id) = chain_of_three();
        let path = tree.extract_path(leaf_id);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], (&0, None));
        assert_eq!(path[1], (&1, Some(&"a".to_owned())));
        assert_eq!(path[2], (&2, Some(&"b".to_owned())));
    }

    #[test]
    fn extract_plan_drops_the_root() {
        let (tree, leaf_id) = chain_of_three();
        let plan = tree.extract_plan(leaf_id);
        assert_eq!(plan.steps(), &["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn extract_plan_of_the_root_is_empty() {
        let mut tree: SearchTree<i32, String> = SearchTree::new();
        let root_id = tree.insert_root(0);
        assert!(tree.extract_plan(root_id).is_empty());
    }

    #[test]
    fn branching_keeps_earlier_paths_intact() {
        let mut tree = SearchTree::new();
        let root_id = tree.insert_root(0);
        let left_id = tree.insert_child(1, "left".to_owned(), root_id);
        let right_id = tree.insert_child(2, "right".to_owned(), root_id);
        assert_eq!(
            tree.extract_plan(left_id).steps(),
            &["left".to_owned()]
        );
        assert_eq!(
            tree.extract_plan(right_id).steps(),
            &["right".to_owned()]
        );
    }
}
