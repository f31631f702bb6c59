use wasm_bindgen::prelude::*;

pub mod animation;
pub mod data;
pub mod input;
pub mod interaction;
pub mod layout;
pub mod logging;
pub mod math;
pub mod scene;
pub mod selection;
pub mod session;
pub mod tree;

pub use animation::{AnimationConfig, AnimationController, FrameClock, ManualClock};
pub use data::{PresetLibrary, VisualizerConfig};
pub use layout::{recompute_layout, GridPos, Viewport};
pub use selection::Direction;
pub use session::{Document, Outcome, Session, SessionError};
pub use tree::{Node, NodeId, TreeError, TreeModel};

use animation::PerformanceClock;
use input::Command;
use math::Vec2;
use scene::Scene;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// What the page should do after a key press
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Redraw,
    Animate,
    /// Prompt for a value, then call `insert_value`
    NeedsValue,
}

impl From<Outcome> for KeyOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ignored => KeyOutcome::Ignored,
            Outcome::Redraw => KeyOutcome::Redraw,
            Outcome::Animate => KeyOutcome::Animate,
            Outcome::NeedsValue => KeyOutcome::NeedsValue,
        }
    }
}

/// Selection movement for pages that bind their own keys
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Left,
    Up,
    Right,
    Down,
}

impl From<NavDirection> for Direction {
    fn from(direction: NavDirection) -> Self {
        match direction {
            NavDirection::Left => Direction::Left,
            NavDirection::Up => Direction::Up,
            NavDirection::Right => Direction::Right,
            NavDirection::Down => Direction::Down,
        }
    }
}

/// Main visualizer state exposed to JavaScript
///
/// The page owns the drawing surface and the `requestAnimationFrame`
/// loop: after a mutation it calls `tick` each frame until it returns
/// false, drawing from `node_data` / `edge_data` / `selection_ring`.
#[wasm_bindgen]
pub struct BstVisualizer {
    session: Session<PerformanceClock>,
    viewport: Viewport,
}

#[wasm_bindgen]
impl BstVisualizer {
    /// Create a visualizer with the default presets and timing
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32) -> Result<BstVisualizer, JsValue> {
        Self::build(VisualizerConfig::default(), width)
    }

    /// Create a visualizer from a YAML configuration
    #[wasm_bindgen]
    pub fn with_config(yaml: &str, width: f32) -> Result<BstVisualizer, JsValue> {
        let config = VisualizerConfig::from_yaml(yaml).map_err(to_js)?;
        Self::build(config, width)
    }

    /// Resize the drawing surface
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32) {
        self.viewport.width = width;
    }

    /// Replace the tree with a numbered preset (0-based)
    #[wasm_bindgen]
    pub fn load_preset(&mut self, index: usize) -> Result<(), JsValue> {
        self.session.load_preset_index(index).map(|_| ()).map_err(to_js)
    }

    /// Validate and insert a typed value; returns false for blank input
    #[wasm_bindgen]
    pub fn insert_value(&mut self, raw: &str) -> Result<bool, JsValue> {
        self.session
            .insert_input(raw)
            .map(|id| id.is_some())
            .map_err(to_js)
    }

    /// Run the command bound to a DOM `keyCode`
    #[wasm_bindgen]
    pub fn handle_key(&mut self, key_code: u32) -> Result<KeyOutcome, JsValue> {
        let Some(command) = Command::from_key_code(key_code) else {
            return Ok(KeyOutcome::Ignored);
        };
        self.session.execute(command).map(Into::into).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn delete_selection(&mut self) -> Result<(), JsValue> {
        self.session.delete_selection().map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn rotate_clockwise(&mut self) -> Result<(), JsValue> {
        self.session.rotate_selection_clockwise().map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn rotate_counter_clockwise(&mut self) -> Result<(), JsValue> {
        self.session
            .rotate_selection_counter_clockwise()
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn move_selection(&mut self, direction: NavDirection) {
        self.session.move_selection(direction.into());
    }

    /// Select the node under a point in surface coordinates
    #[wasm_bindgen]
    pub fn select_at(&mut self, x: f32, y: f32) -> bool {
        self.session.select_at(&self.viewport, Vec2::new(x, y)).is_some()
    }

    /// Frame callback; returns whether another frame is needed
    #[wasm_bindgen]
    pub fn tick(&mut self, ts: f64) -> bool {
        self.session.tick(ts)
    }

    /// Node sprites at `ts`, 5 floats each: x, y, value, balanced, selected
    #[wasm_bindgen]
    pub fn node_data(&self, ts: f64) -> Vec<f32> {
        Scene::capture(&self.session, &self.viewport, ts).node_data()
    }

    /// Edges at `ts`, 4 floats each: x1, y1, x2, y2
    #[wasm_bindgen]
    pub fn edge_data(&self, ts: f64) -> Vec<f32> {
        Scene::capture(&self.session, &self.viewport, ts).edge_data()
    }

    /// Selection ring at `ts` as x, y, radius
    #[wasm_bindgen]
    pub fn selection_ring(&self, ts: f64) -> Vec<f32> {
        let scene = Scene::capture(&self.session, &self.viewport, ts);
        scene
            .selection
            .map(|c| vec![c.x, c.y, scene.selection_radius])
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.session.tree().len()
    }

    #[wasm_bindgen]
    pub fn selected_value(&self) -> Option<f64> {
        let tree = self.session.tree();
        tree.value(self.session.selection()).map(|v| v as f64)
    }

    /// Sorted values currently in the tree
    #[wasm_bindgen]
    pub fn in_order_values(&self) -> js_sys::Array {
        self.session
            .tree()
            .values_in_order()
            .into_iter()
            .map(|v| JsValue::from_f64(v as f64))
            .collect()
    }

    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.session.is_animating()
    }
}

impl BstVisualizer {
    fn build(config: VisualizerConfig, width: f32) -> Result<BstVisualizer, JsValue> {
        let viewport = Viewport::new(width, config.layout);
        let session = Session::new(config, PerformanceClock::new()).map_err(to_js)?;
        Ok(Self { session, viewport })
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(KeyOutcome::from(Outcome::NeedsValue), KeyOutcome::NeedsValue);
        assert_eq!(KeyOutcome::from(Outcome::Animate), KeyOutcome::Animate);
    }

    #[test]
    fn test_nav_direction_mapping() {
        assert_eq!(Direction::from(NavDirection::Up), Direction::Up);
        assert_eq!(Direction::from(NavDirection::Down), Direction::Down);
    }
}
