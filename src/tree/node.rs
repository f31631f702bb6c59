use generational_arena::Index;

use crate::layout::GridPos;

/// Handle to a node stored in a [`TreeModel`](super::TreeModel)
///
/// Handles stay valid across rotations and value promotion. Once the node
/// is deleted the handle goes stale and lookups report
/// [`TreeError::StaleNode`](super::TreeError::StaleNode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// A single tree node
#[derive(Debug, Clone)]
pub struct Node {
    pub value: i64,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    /// Grid position from the latest layout, `None` until laid out
    pub pos: Option<GridPos>,
    /// Position before the latest layout (animation baseline)
    pub old_pos: Option<GridPos>,
    /// Children's subtree heights differ by at most one
    pub balanced: bool,
}

impl Node {
    pub(crate) fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            pos: None,
            old_pos: None,
            balanced: true,
        }
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of direct children (0, 1 or 2)
    pub fn child_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_detached_leaf() {
        let node = Node::new(7);
        assert_eq!(node.value, 7);
        assert!(node.is_leaf());
        assert!(node.parent().is_none());
        assert!(node.pos.is_none());
        assert!(node.old_pos.is_none());
        assert_eq!(node.child_count(), 0);
    }
}
