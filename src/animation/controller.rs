//! Transition state machine for layout changes
//!
//! A transition starts after each mutation and covers a fixed window.
//! Starting a new one discards the old one, using whatever was on screen
//! at that moment as the new starting point. Transitions are never queued.

use std::collections::HashMap;

use log::{debug, trace};
use serde::Deserialize;

use super::easing::{ease, Easing};
use crate::layout::GridPos;
use crate::tree::{NodeId, TreeModel};

/// Animation tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Transition length in milliseconds
    pub duration_ms: f64,
    /// Easing applied to elapsed time
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250.0,
            easing: Easing::EaseOutExpo,
        }
    }
}

/// One in-flight transition
#[derive(Debug, Clone)]
pub struct Transition {
    /// Timestamp the transition started at
    pub started_at: f64,
    /// Where each moving node starts; nodes without an entry (newly
    /// inserted ones) sit at their final position for the whole window
    baselines: HashMap<NodeId, GridPos>,
}

impl Transition {
    pub fn baseline(&self, id: NodeId) -> Option<GridPos> {
        self.baselines.get(&id).copied()
    }
}

/// Produces displayed node positions between layouts
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    config: AnimationConfig,
    transition: Option<Transition>,
}

impl AnimationController {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            transition: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Fraction of the window elapsed at `ts`, 1.0 when idle
    pub fn progress(&self, ts: f64) -> f32 {
        match &self.transition {
            None => 1.0,
            Some(t) if self.config.duration_ms <= 0.0 => {
                if ts >= t.started_at {
                    1.0
                } else {
                    0.0
                }
            }
            Some(t) => ((ts - t.started_at) / self.config.duration_ms).clamp(0.0, 1.0) as f32,
        }
    }

    /// Displayed grid position of a node at `ts`
    ///
    /// `None` for stale handles and for nodes that were never laid out.
    pub fn position(&self, tree: &TreeModel, id: NodeId, ts: f64) -> Option<GridPos> {
        let target = tree.get(id)?.pos?;
        let Some(from) = self.transition.as_ref().and_then(|t| t.baseline(id)) else {
            return Some(target);
        };
        let x = ease(self.progress(ts), self.config.easing);
        Some(from.lerp(&target, x))
    }

    /// Displayed positions of every laid-out node at `ts`
    ///
    /// Taken just before a mutation, this becomes the next transition's
    /// baseline.
    pub fn snapshot(&self, tree: &TreeModel, ts: f64) -> HashMap<NodeId, GridPos> {
        tree.iter()
            .filter_map(|(id, _)| self.position(tree, id, ts).map(|p| (id, p)))
            .collect()
    }

    /// Start a transition towards the tree's current layout
    ///
    /// Each node starts from its entry in `displayed`, falling back to its
    /// previous layout position. Any in-flight transition is dropped.
    pub fn begin(&mut self, tree: &TreeModel, displayed: HashMap<NodeId, GridPos>, now: f64) {
        let baselines: HashMap<NodeId, GridPos> = tree
            .iter()
            .filter_map(|(id, node)| {
                displayed
                    .get(&id)
                    .copied()
                    .or(node.old_pos)
                    .map(|p| (id, p))
            })
            .collect();

        if self.transition.is_some() {
            debug!("preempting in-flight transition");
        }
        debug!("transition started at {:.1} ({} moving nodes)", now, baselines.len());

        self.transition = Some(Transition {
            started_at: now,
            baselines,
        });
    }

    /// Frame callback; returns whether more frames are needed
    pub fn tick(&mut self, ts: f64) -> bool {
        let Some(transition) = &self.transition else {
            return false;
        };

        if ts - transition.started_at > self.config.duration_ms {
            trace!("transition finished at {:.1}", ts);
            self.transition = None;
            false
        } else {
            trace!("frame at {:.1}", ts);
            true
        }
    }

    /// Drop any in-flight transition; nodes jump to their final positions
    pub fn cancel(&mut self) {
        self.transition = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::recompute_layout;

    fn laid_out(values: &[i64]) -> TreeModel {
        let mut tree = TreeModel::from_sequence(values).unwrap();
        recompute_layout(&mut tree);
        tree
    }

    fn linear() -> AnimationController {
        AnimationController::new(AnimationConfig {
            duration_ms: 100.0,
            easing: Easing::Linear,
        })
    }

    #[test]
    fn test_idle_position_is_layout() {
        let tree = laid_out(&[2, 1, 3]);
        let anim = AnimationController::default();
        let root = tree.root();
        assert_eq!(anim.position(&tree, root, 0.0), tree.get(root).unwrap().pos);
        assert!(!anim.is_animating());
        assert_eq!(anim.progress(123.0), 1.0);
    }

    #[test]
    fn test_interpolates_from_old_position() {
        let mut tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();
        let root = tree.root();

        let displayed = anim.snapshot(&tree, 0.0);
        tree.insert(4);
        recompute_layout(&mut tree);
        anim.begin(&tree, displayed, 1000.0);

        // root moves from col -0.5 to col -1.0
        let start = anim.position(&tree, root, 1000.0).unwrap();
        let mid = anim.position(&tree, root, 1050.0).unwrap();
        let end = anim.position(&tree, root, 1100.0).unwrap();
        assert!((start.col + 0.5).abs() < 1e-5);
        assert!((mid.col + 0.75).abs() < 1e-5);
        assert!((end.col + 1.0).abs() < 1e-5);
        assert_eq!(mid.row, 0.0);
    }

    #[test]
    fn test_new_node_has_no_entry_animation() {
        let mut tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();

        let displayed = anim.snapshot(&tree, 0.0);
        let added = tree.insert(4);
        recompute_layout(&mut tree);
        anim.begin(&tree, displayed, 0.0);

        let target = tree.get(added).unwrap().pos;
        assert_eq!(anim.position(&tree, added, 0.0), target);
        assert!(anim.transition().unwrap().baseline(added).is_none());
    }

    #[test]
    fn test_tick_terminates_after_duration() {
        let tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();
        anim.begin(&tree, HashMap::new(), 0.0);

        assert!(anim.tick(16.0));
        assert!(anim.tick(100.0));
        assert!(!anim.tick(100.5));
        assert!(!anim.is_animating());
        assert!(!anim.tick(200.0));
    }

    #[test]
    fn test_preemption_uses_displayed_position() {
        let mut tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();
        let root = tree.root();

        let displayed = anim.snapshot(&tree, 0.0);
        tree.insert(4);
        recompute_layout(&mut tree);
        anim.begin(&tree, displayed, 0.0);

        // Halfway through: root shown at col -0.75
        let displayed = anim.snapshot(&tree, 50.0);
        tree.insert(5);
        recompute_layout(&mut tree);
        anim.begin(&tree, displayed, 50.0);

        let restart = anim.position(&tree, root, 50.0).unwrap();
        assert!((restart.col + 0.75).abs() < 1e-5);
        // old_pos alone would have said -1.0
        assert_eq!(tree.get(root).unwrap().old_pos.unwrap().col, -1.0);

        let end = anim.position(&tree, root, 150.0).unwrap();
        assert!((end.col - tree.get(root).unwrap().pos.unwrap().col).abs() < 1e-5);
    }

    #[test]
    fn test_timestamp_before_start_clamps() {
        let mut tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();
        let root = tree.root();

        let displayed = anim.snapshot(&tree, 0.0);
        tree.insert(4);
        recompute_layout(&mut tree);
        anim.begin(&tree, displayed, 500.0);

        let early = anim.position(&tree, root, 400.0).unwrap();
        assert!((early.col + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_cancel_jumps_to_final() {
        let mut tree = laid_out(&[2, 1, 3]);
        let mut anim = linear();
        let root = tree.root();

        tree.insert(0);
        recompute_layout(&mut tree);
        anim.begin(&tree, HashMap::new(), 0.0);
        anim.cancel();

        assert_eq!(anim.position(&tree, root, 10.0), tree.get(root).unwrap().pos);
    }

    #[test]
    fn test_stale_node_has_no_position() {
        let mut tree = laid_out(&[2, 1, 3]);
        let anim = linear();
        let leaf = tree.left(tree.root()).unwrap();
        tree.delete(leaf).unwrap();
        assert!(anim.position(&tree, leaf, 0.0).is_none());
    }
}
