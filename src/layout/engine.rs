use log::debug;

use super::GridPos;
use crate::tree::{NodeId, TreeModel};

/// Recompute grid positions and balance flags for the whole tree
///
/// Each node's previous position is kept in `old_pos` as the baseline for
/// the next transition.
pub fn recompute_layout(tree: &mut TreeModel) {
    let centre = tree.len() as f32 / 2.0;
    let root = tree.root();

    let placed = position_walk(tree, Some(root), 0, 0, centre);
    let height = balance_walk(tree, Some(root));

    debug!("layout: {} nodes, height {}", placed, height);
}

// In-order walk. Returns the number of nodes in the subtree.
fn position_walk(
    tree: &mut TreeModel,
    id: Option<NodeId>,
    row: usize,
    col: usize,
    centre: f32,
) -> usize {
    let Some((id, left, right)) = id.and_then(|id| tree.get(id).map(|n| (id, n.left(), n.right())))
    else {
        return 0;
    };

    let left_count = position_walk(tree, left, row + 1, col, centre);
    let right_count = position_walk(tree, right, row + 1, col + left_count + 1, centre);

    if let Some(node) = tree.get_mut(id) {
        node.old_pos = node.pos;
        node.pos = Some(GridPos::new(row as f32, (col + left_count) as f32 - centre));
    }

    left_count + 1 + right_count
}

// Post-order walk. Returns the subtree height.
fn balance_walk(tree: &mut TreeModel, id: Option<NodeId>) -> usize {
    let Some((id, left, right)) = id.and_then(|id| tree.get(id).map(|n| (id, n.left(), n.right())))
    else {
        return 0;
    };

    let left_height = balance_walk(tree, left);
    let right_height = balance_walk(tree, right);

    if let Some(node) = tree.get_mut(id) {
        node.balanced = left_height.abs_diff(right_height) <= 1;
    }

    1 + left_height.max(right_height)
}
