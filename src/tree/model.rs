use generational_arena::Arena;
use log::{debug, warn};

use super::{Node, NodeId, TreeError};

/// Arena-backed binary search tree
///
/// Equal values route left on insert. A clockwise rotation over an equal
/// left child carries the duplicate into the right subtree, so the ordering
/// the tree keeps is that an in-order walk never decreases.
/// The tree is never empty: it is created with a root and refuses to
/// delete its last node.
#[derive(Debug, Clone)]
pub struct TreeModel {
    nodes: Arena<Node>,
    root: NodeId,
    size: usize,
}

impl TreeModel {
    /// Create a single-node tree
    pub fn new(root_value: i64) -> Self {
        let mut nodes = Arena::new();
        let root = NodeId(nodes.insert(Node::new(root_value)));
        Self { nodes, root, size: 1 }
    }

    /// Build a tree from a preset: the first value becomes the root and the
    /// rest are inserted in order
    pub fn from_sequence(values: &[i64]) -> Result<Self, TreeError> {
        let (&first, rest) = values.split_first().ok_or(TreeError::EmptyPreset)?;
        let mut tree = Self::new(first);
        for &value in rest {
            tree.insert(value);
        }
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Look up a node, reporting stale handles as an error
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.get(id).ok_or(TreeError::StaleNode)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.get(id).map(|n| n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.right)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// All live nodes in arena order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().map(|(idx, node)| (NodeId(idx), node))
    }

    /// Distance from the root (root = 0)
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.get(id)?;
        while let Some(parent) = current.parent {
            current = self.get(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Height of the whole tree (a single node has height 1)
    pub fn height(&self) -> usize {
        self.subtree_height(Some(self.root))
    }

    pub fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id.and_then(|id| self.get(id)) {
            None => 0,
            Some(node) => 1 + self.subtree_height(node.left).max(self.subtree_height(node.right)),
        }
    }

    /// Node handles in in-order (sorted) sequence
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = Some(self.root);

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.at(id).left;
            }
            let Some(id) = stack.pop() else { break };
            order.push(id);
            current = self.at(id).right;
        }

        order
    }

    pub fn values_in_order(&self) -> Vec<i64> {
        self.in_order().into_iter().map(|id| self.at(id).value).collect()
    }

    /// Node handles in pre-order (root first, then left, then right)
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.size);
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            order.push(id);
            let node = self.at(id);
            // Right first so the left subtree is visited first
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }

        order
    }

    /// Insert a value as a new leaf and return its handle
    pub fn insert(&mut self, value: i64) -> NodeId {
        let mut current = self.root;
        loop {
            let node = self.at(current);
            let goes_left = value <= node.value;
            let next = if goes_left { node.left } else { node.right };

            match next {
                Some(child) => current = child,
                None => {
                    let child = NodeId(self.nodes.insert(Node::new(value)));
                    if goes_left {
                        self.set_left(current, Some(child));
                    } else {
                        self.set_right(current, Some(child));
                    }
                    self.size += 1;
                    debug!("inserted {} (size {})", value, self.size);
                    self.debug_check();
                    return child;
                }
            }
        }
    }

    /// Delete a node and return the node that now occupies its place
    ///
    /// - leaf: the former parent
    /// - one child: that child
    /// - two children: `id` itself, now carrying its in-order predecessor's
    ///   value (the predecessor node is the one removed)
    ///
    /// Refuses to delete the last node. If the root is spliced out, the
    /// returned node becomes the new root.
    pub fn delete(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        self.node(id)?;
        if self.size == 1 {
            warn!("refusing to delete the last node");
            return Err(TreeError::LastNodeDeletion);
        }

        let replacement = self.unlink(id)?;
        self.size -= 1;
        debug!("deleted node (size {})", self.size);
        self.debug_check();
        Ok(replacement)
    }

    fn unlink(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let node = self.at(id);
        let (left, right, parent) = (node.left, node.right, node.parent);

        match (left, right) {
            (None, None) => {
                // A parentless leaf is the sole node, which delete() refuses
                let parent = parent.ok_or(TreeError::LastNodeDeletion)?;
                self.replace_child(Some(parent), id, None);
                self.nodes.remove(id.0);
                Ok(parent)
            }
            (Some(child), None) | (None, Some(child)) => {
                self.replace_child(parent, id, Some(child));
                self.nodes.remove(id.0);
                Ok(child)
            }
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                let value = self.at(predecessor).value;
                self.at_mut(id).value = value;
                self.unlink(predecessor)?;
                Ok(id)
            }
        }
    }

    //    a     b
    //   /  ->   \
    //  b         a
    /// Rotate `id` down to the right of its left child
    ///
    /// Returns the new subtree root, or `id` unchanged when it has no left
    /// child.
    pub fn rotate_clockwise(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let node = self.node(id)?;
        let Some(pivot) = node.left else {
            return Ok(id);
        };
        let parent = node.parent;
        let inner = self.at(pivot).right;

        self.replace_child(parent, id, Some(pivot));
        self.set_left(id, inner);
        self.set_right(pivot, Some(id));

        debug!("rotated {} clockwise", self.at(id).value);
        self.debug_check();
        Ok(pivot)
    }

    //  a        b
    //   \  ->  /
    //    b    a
    /// Mirror of [`rotate_clockwise`](Self::rotate_clockwise)
    pub fn rotate_counter_clockwise(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let node = self.node(id)?;
        let Some(pivot) = node.right else {
            return Ok(id);
        };
        let parent = node.parent;
        let inner = self.at(pivot).left;

        self.replace_child(parent, id, Some(pivot));
        self.set_right(id, inner);
        self.set_left(pivot, Some(id));

        debug!("rotated {} counter-clockwise", self.at(id).value);
        self.debug_check();
        Ok(pivot)
    }

    /// Check ordering, parent links, root uniqueness and the size counter
    pub fn validate(&self) -> Result<(), TreeError> {
        let root = self
            .get(self.root)
            .ok_or_else(|| TreeError::Corrupt("root handle is stale".into()))?;
        if root.parent.is_some() {
            return Err(TreeError::Corrupt("root has a parent".into()));
        }

        let mut stack = vec![self.root];
        let mut reachable = 0;

        while let Some(id) = stack.pop() {
            let node = self
                .get(id)
                .ok_or_else(|| TreeError::Corrupt("child handle is stale".into()))?;

            reachable += 1;
            if reachable > self.nodes.len() {
                return Err(TreeError::Corrupt("cycle in child links".into()));
            }

            for child in [node.left, node.right].into_iter().flatten() {
                if self.parent(child) != Some(id) {
                    return Err(TreeError::Corrupt(format!(
                        "child of {} does not point back to it",
                        node.value
                    )));
                }
                stack.push(child);
            }
        }

        if reachable != self.size {
            return Err(TreeError::Corrupt(format!(
                "size is {} but {} nodes are reachable",
                self.size, reachable
            )));
        }
        if self.nodes.len() != self.size {
            return Err(TreeError::Corrupt(format!(
                "{} nodes stored for size {}",
                self.nodes.len(),
                self.size
            )));
        }

        // Links are sound past this point, so the walk cannot hit a stale id
        let values = self.values_in_order();
        if let Some(pair) = values.windows(2).find(|pair| pair[0] > pair[1]) {
            return Err(TreeError::Corrupt(format!("value {} out of order", pair[1])));
        }

        Ok(())
    }

    fn debug_check(&self) {
        debug_assert!(self.validate().is_ok(), "{:?}", self.validate());
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.at(id).right {
            id = right;
        }
        id
    }

    /// Access a node through a link the tree maintains itself
    ///
    /// Panics on a stale handle; never call with caller-supplied ids.
    fn at(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn at_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Put `new` where `old` hung under `parent`; with no parent, `new`
    /// becomes the root
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        if let Some(new) = new {
            self.at_mut(new).parent = parent;
        }
        match parent {
            Some(parent) => {
                let parent = self.at_mut(parent);
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
            None => {
                if let Some(new) = new {
                    self.root = new;
                }
            }
        }
    }

    fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.at_mut(parent).left = child;
        if let Some(child) = child {
            self.at_mut(child).parent = Some(parent);
        }
    }

    fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.at_mut(parent).right = child;
        if let Some(child) = child {
            self.at_mut(child).parent = Some(parent);
        }
    }
}
