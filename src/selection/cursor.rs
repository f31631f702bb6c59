use log::trace;

use crate::tree::{NodeId, TreeError, TreeModel};

/// Navigation intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left child, or up when coming from a right child
    Left,
    /// Parent
    Up,
    /// Right child, or up when coming from a left child
    Right,
    /// The only child, when there is exactly one
    Down,
}

/// The single focused node
///
/// Callers move the cursor to the node returned by a mutation, which
/// keeps it pointing at a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCursor {
    focused: NodeId,
}

impl SelectionCursor {
    pub fn new(focused: NodeId) -> Self {
        Self { focused }
    }

    pub fn focused(&self) -> NodeId {
        self.focused
    }

    /// Focus a specific node, e.g. one picked with the pointer
    pub fn focus(&mut self, tree: &TreeModel, id: NodeId) -> Result<(), TreeError> {
        tree.node(id)?;
        self.focused = id;
        Ok(())
    }

    /// Move along a tree edge; moves that have nowhere to go leave the
    /// cursor where it is
    pub fn move_in(&mut self, tree: &TreeModel, direction: Direction) -> NodeId {
        if let Some(next) = Self::target(tree, self.focused, direction) {
            trace!("selection moved {:?}", direction);
            self.focused = next;
        }
        self.focused
    }

    fn target(tree: &TreeModel, id: NodeId, direction: Direction) -> Option<NodeId> {
        let node = tree.get(id)?;
        let is_child = |side: Option<NodeId>| side == Some(id);

        match direction {
            Direction::Up => node.parent(),
            Direction::Left => node.left().or_else(|| {
                node.parent().filter(|&p| is_child(tree.right(p)))
            }),
            Direction::Right => node.right().or_else(|| {
                node.parent().filter(|&p| is_child(tree.left(p)))
            }),
            Direction::Down => match (node.left(), node.right()) {
                (Some(only), None) | (None, Some(only)) => Some(only),
                _ => None,
            },
        }
    }
}
