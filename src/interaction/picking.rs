use crate::animation::AnimationController;
use crate::layout::Viewport;
use crate::math::Vec2;
use crate::tree::{NodeId, TreeModel};

/// Hit testing of screen points against drawn node circles
///
/// Tests against displayed positions, so nodes can be picked mid-transition.
#[derive(Debug, Clone, Copy)]
pub struct NodePicker {
    radius: f32,
}

impl NodePicker {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// First node in pre-order whose circle contains `point`
    pub fn pick(
        &self,
        tree: &TreeModel,
        animation: &AnimationController,
        viewport: &Viewport,
        point: Vec2,
        ts: f64,
    ) -> Option<NodeId> {
        tree.pre_order().into_iter().find(|&node| {
            animation
                .position(tree, node, ts)
                .is_some_and(|pos| viewport.to_screen(pos).distance(&point) <= self.radius)
        })
    }
}
