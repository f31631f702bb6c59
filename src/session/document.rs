use crate::layout::recompute_layout;
use crate::selection::{Direction, SelectionCursor};
use crate::tree::{NodeId, TreeError, TreeModel};

/// The tree being edited and the node focused in it
///
/// Every mutation leaves the selection on a live node.
#[derive(Debug, Clone)]
pub struct Document {
    tree: TreeModel,
    cursor: SelectionCursor,
}

impl Document {
    /// Build a laid-out document from an insertion sequence, selecting the
    /// root
    pub fn from_preset(values: &[i64]) -> Result<Self, TreeError> {
        let mut tree = TreeModel::from_sequence(values)?;
        recompute_layout(&mut tree);
        let cursor = SelectionCursor::new(tree.root());
        Ok(Self { tree, cursor })
    }

    pub fn tree(&self) -> &TreeModel {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn selection(&self) -> NodeId {
        self.cursor.focused()
    }

    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Insert and select the new node
    pub fn insert(&mut self, value: i64) -> NodeId {
        let id = self.tree.insert(value);
        self.cursor = SelectionCursor::new(id);
        id
    }

    /// Delete a node; if that takes the selection with it, select the
    /// node that took its place
    pub fn delete(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let selected = self.cursor.focused();
        let replacement = self.tree.delete(id)?;
        if selected == id || !self.tree.contains(selected) {
            self.cursor = SelectionCursor::new(replacement);
        }
        Ok(replacement)
    }

    /// Rotate clockwise; a rotated selection follows the new subtree root
    pub fn rotate_clockwise(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let pivot = self.tree.rotate_clockwise(id)?;
        self.follow(id, pivot);
        Ok(pivot)
    }

    pub fn rotate_counter_clockwise(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let pivot = self.tree.rotate_counter_clockwise(id)?;
        self.follow(id, pivot);
        Ok(pivot)
    }

    pub fn move_selection(&mut self, direction: Direction) -> NodeId {
        self.cursor.move_in(&self.tree, direction)
    }

    pub fn select(&mut self, id: NodeId) -> Result<(), TreeError> {
        self.cursor.focus(&self.tree, id)
    }

    pub fn relayout(&mut self) {
        recompute_layout(&mut self.tree);
    }

    fn follow(&mut self, from: NodeId, to: NodeId) {
        if self.cursor.focused() == from {
            self.cursor = SelectionCursor::new(to);
        }
    }
}
