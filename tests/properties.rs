//! Randomised checks that mutations keep the tree and its layout sound

use bst_visualizer::selection::SelectionCursor;
use bst_visualizer::{recompute_layout, Direction, NodeId, TreeError, TreeModel};
use quickcheck::{Arbitrary, Gen};

/// Something to do to the tree. Node-targeting ops pick a node by
/// in-order index, wrapped to the current size.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i8),
    Delete(u8),
    RotateClockwise(u8),
    RotateCounterClockwise(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Delete(u8::arbitrary(g)),
            2 => Op::RotateClockwise(u8::arbitrary(g)),
            3 => Op::RotateCounterClockwise(u8::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

fn pick(tree: &TreeModel, k: u8) -> NodeId {
    let order = tree.in_order();
    order[k as usize % order.len()]
}

fn build(root: i8, xs: &[i8]) -> TreeModel {
    let mut tree = TreeModel::new(root as i64);
    for &x in xs {
        tree.insert(x as i64);
    }
    tree
}

fn layout_consistent(tree: &TreeModel) -> bool {
    let order = tree.in_order();
    let positions: Vec<_> = order.iter().map(|&id| tree.get(id).and_then(|n| n.pos)).collect();
    if positions.iter().any(Option::is_none) {
        return false;
    }
    let positions: Vec<_> = positions.into_iter().flatten().collect();

    let cols_increase = positions.windows(2).all(|w| w[0].col < w[1].col);
    let rows_are_depths = order
        .iter()
        .zip(&positions)
        .all(|(&id, pos)| tree.depth(id).map(|d| d as f32) == Some(pos.row));
    cols_increase && rows_are_depths
}

fn balance_flags_correct(tree: &TreeModel) -> bool {
    tree.iter().all(|(_, node)| {
        let l = tree.subtree_height(node.left());
        let r = tree.subtree_height(node.right());
        node.balanced == (l.abs_diff(r) <= 1)
    })
}

fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort();
    values
}

quickcheck::quickcheck! {
    fn inserts_keep_order(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        let values = tree.values_in_order();
        values.windows(2).all(|w| w[0] <= w[1])
            && values.len() == xs.len() + 1
            && tree.validate().is_ok()
    }
}

quickcheck::quickcheck! {
    fn random_operations_keep_invariants(ops: Vec<Op>) -> bool {
        let mut tree = TreeModel::new(0);

        for op in &ops {
            let before = tree.len();
            match *op {
                Op::Insert(v) => {
                    tree.insert(v as i64);
                    if tree.len() != before + 1 {
                        return false;
                    }
                }
                Op::Delete(k) => match tree.delete(pick(&tree, k)) {
                    Ok(replacement) => {
                        if tree.len() != before - 1 || !tree.contains(replacement) {
                            return false;
                        }
                    }
                    Err(TreeError::LastNodeDeletion) => {
                        if before != 1 {
                            return false;
                        }
                    }
                    Err(_) => return false,
                },
                Op::RotateClockwise(k) => {
                    if tree.rotate_clockwise(pick(&tree, k)).is_err() {
                        return false;
                    }
                }
                Op::RotateCounterClockwise(k) => {
                    if tree.rotate_counter_clockwise(pick(&tree, k)).is_err() {
                        return false;
                    }
                }
            }

            recompute_layout(&mut tree);
            if tree.validate().is_err()
                || !layout_consistent(&tree)
                || !balance_flags_correct(&tree)
                || tree.parent(tree.root()).is_some()
            {
                return false;
            }
        }
        true
    }
}

quickcheck::quickcheck! {
    fn delete_removes_exactly_one_value(root: i8, xs: Vec<i8>, k: u8) -> bool {
        let mut tree = build(root, &xs);
        let target = pick(&tree, k);
        let removed = tree.value(target).unwrap();
        let mut expected = tree.values_in_order();

        match tree.delete(target) {
            Err(TreeError::LastNodeDeletion) => xs.is_empty(),
            Err(_) => false,
            Ok(_) => {
                let at = expected.iter().position(|&v| v == removed).unwrap();
                expected.remove(at);
                tree.values_in_order() == sorted(expected)
            }
        }
    }
}

quickcheck::quickcheck! {
    fn rotation_round_trip_restores_structure(root: i8, xs: Vec<i8>, k: u8) -> bool {
        let mut tree = build(root, &xs);
        let target = pick(&tree, k);
        let shape = |t: &TreeModel| -> Vec<_> {
            t.pre_order()
                .into_iter()
                .map(|id| (id, t.parent(id), t.left(id), t.right(id)))
                .collect()
        };
        let before = shape(&tree);

        let pivot = tree.rotate_clockwise(target).unwrap();
        if tree.left(target).is_none() && pivot == target && shape(&tree) == before {
            // nothing to rotate: a no-op
            return true;
        }
        let back = tree.rotate_counter_clockwise(pivot).unwrap();
        back == target && shape(&tree) == before
    }
}

quickcheck::quickcheck! {
    fn navigation_stays_on_live_nodes(root: i8, xs: Vec<i8>, moves: Vec<u8>) -> bool {
        let tree = build(root, &xs);
        let mut cursor = SelectionCursor::new(tree.root());
        let directions = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

        moves.iter().all(|&m| {
            let at = cursor.move_in(&tree, directions[m as usize % 4]);
            tree.contains(at)
        })
    }
}
