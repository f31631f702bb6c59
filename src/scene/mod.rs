//! Draw list handed to the renderer each frame
//!
//! Everything is in screen pixels at one timestamp, so a frame drawn from
//! a scene is never torn between two layouts.

use crate::animation::FrameClock;
use crate::layout::Viewport;
use crate::math::Vec2;
use crate::session::Session;

/// Floats per node in [`Scene::node_data`]
pub const NODE_STRIDE: usize = 5;
/// Floats per edge in [`Scene::edge_data`]
pub const EDGE_STRIDE: usize = 4;

/// A node circle with its label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSprite {
    pub centre: Vec2,
    pub value: i64,
    pub balanced: bool,
    pub selected: bool,
}

/// A parent-to-child line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Children before parents, so parents are painted on top
    pub nodes: Vec<NodeSprite>,
    pub edges: Vec<EdgeSegment>,
    /// Centre of the selection ring
    pub selection: Option<Vec2>,
    pub selection_radius: f32,
    pub node_radius: f32,
}

impl Scene {
    pub fn capture<C: FrameClock>(session: &Session<C>, viewport: &Viewport, ts: f64) -> Self {
        let tree = session.tree();
        let selected = session.selection();
        let at = |id| session.position(id, ts).map(|p| viewport.to_screen(p));

        let mut scene = Scene {
            selection: at(selected),
            selection_radius: viewport.params.selection_radius,
            node_radius: viewport.params.node_radius,
            ..Default::default()
        };

        // Reverse pre-order puts every child ahead of its parent
        for id in tree.pre_order().into_iter().rev() {
            let (Some(node), Some(centre)) = (tree.get(id), at(id)) else {
                continue;
            };

            for child in [node.left(), node.right()].into_iter().flatten() {
                if let Some(to) = at(child) {
                    scene.edges.push(EdgeSegment { from: centre, to });
                }
            }

            scene.nodes.push(NodeSprite {
                centre,
                value: node.value,
                balanced: node.balanced,
                selected: id == selected,
            });
        }

        scene
    }

    /// `[x, y, value, balanced, selected]` per node
    pub fn node_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.nodes.len() * NODE_STRIDE);

        for n in &self.nodes {
            data.push(n.centre.x);
            data.push(n.centre.y);
            data.push(n.value as f32);
            data.push(if n.balanced { 1.0 } else { 0.0 });
            data.push(if n.selected { 1.0 } else { 0.0 });
        }

        data
    }

    /// `[x1, y1, x2, y2]` per edge
    pub fn edge_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.edges.len() * EDGE_STRIDE);

        for e in &self.edges {
            data.extend_from_slice(&e.from.to_array());
            data.extend_from_slice(&e.to.to_array());
        }

        data
    }
}
