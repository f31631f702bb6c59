use std::collections::HashMap;

use log::{debug, info};

use super::{Document, SessionError};
use crate::animation::{AnimationController, FrameClock};
use crate::data::VisualizerConfig;
use crate::input::{parse_value, Command};
use crate::interaction::NodePicker;
use crate::layout::{GridPos, Viewport};
use crate::math::Vec2;
use crate::selection::Direction;
use crate::tree::{NodeId, TreeError, TreeModel};

/// What the host should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed, e.g. a move with nowhere to go
    Ignored,
    /// Draw one frame
    Redraw,
    /// A transition started; keep requesting frames until `tick` says stop
    Animate,
    /// Prompt the user for a value and pass it to `insert_input`
    NeedsValue,
}

/// A document plus the animation of its layout changes
///
/// Each mutation captures the positions on screen, mutates, recomputes
/// the layout in full and only then starts a transition, so frames never
/// see a half-updated tree.
pub struct Session<C: FrameClock> {
    document: Document,
    animation: AnimationController,
    clock: C,
    config: VisualizerConfig,
}

impl<C: FrameClock> Session<C> {
    /// Start a session on the configured initial preset
    pub fn new(config: VisualizerConfig, clock: C) -> Result<Self, SessionError> {
        config.validate()?;
        let sequence = config
            .initial_sequence()
            .ok_or(SessionError::UnknownPreset(config.initial_preset))?;
        let document = Document::from_preset(sequence)?;

        Ok(Self {
            document,
            animation: AnimationController::new(config.animation),
            clock,
            config,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tree(&self) -> &TreeModel {
        self.document.tree()
    }

    pub fn selection(&self) -> NodeId {
        self.document.selection()
    }

    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Replace the document with a new tree; no transition
    pub fn load_preset(&mut self, values: &[i64]) -> Result<NodeId, SessionError> {
        self.document = Document::from_preset(values)?;
        self.animation.cancel();
        info!("loaded preset of {} values", values.len());
        Ok(self.document.root())
    }

    pub fn load_preset_index(&mut self, index: usize) -> Result<NodeId, SessionError> {
        let values = self
            .config
            .presets
            .get(index)
            .ok_or(SessionError::UnknownPreset(index))?
            .to_vec();
        self.load_preset(&values)
    }

    pub fn insert(&mut self, value: i64) -> NodeId {
        let (displayed, now) = self.displayed_now();
        let id = self.document.insert(value);
        self.settle(displayed, now);
        id
    }

    /// Validate a typed value and insert it; blank input inserts nothing
    pub fn insert_input(&mut self, raw: &str) -> Result<Option<NodeId>, SessionError> {
        let Some(value) = parse_value(raw, &self.config.input)? else {
            return Ok(None);
        };
        Ok(Some(self.insert(value)))
    }

    pub fn delete(&mut self, id: NodeId) -> Result<NodeId, SessionError> {
        self.apply(|doc| doc.delete(id))
    }

    pub fn delete_selection(&mut self) -> Result<NodeId, SessionError> {
        self.delete(self.selection())
    }

    pub fn rotate_clockwise(&mut self, id: NodeId) -> Result<NodeId, SessionError> {
        self.apply(|doc| doc.rotate_clockwise(id))
    }

    pub fn rotate_counter_clockwise(&mut self, id: NodeId) -> Result<NodeId, SessionError> {
        self.apply(|doc| doc.rotate_counter_clockwise(id))
    }

    pub fn rotate_selection_clockwise(&mut self) -> Result<NodeId, SessionError> {
        self.rotate_clockwise(self.selection())
    }

    pub fn rotate_selection_counter_clockwise(&mut self) -> Result<NodeId, SessionError> {
        self.rotate_counter_clockwise(self.selection())
    }

    /// Navigation only moves the cursor; the layout is untouched
    pub fn move_selection(&mut self, direction: Direction) -> NodeId {
        self.document.move_selection(direction)
    }

    pub fn select(&mut self, id: NodeId) -> Result<(), SessionError> {
        Ok(self.document.select(id)?)
    }

    /// Select the node drawn under a screen point, if any
    pub fn select_at(&mut self, viewport: &Viewport, point: Vec2) -> Option<NodeId> {
        let picker = NodePicker::new(viewport.params.node_radius);
        let node = picker.pick(
            self.document.tree(),
            &self.animation,
            viewport,
            point,
            self.clock.now(),
        )?;
        self.document.select(node).ok()?;
        Some(node)
    }

    /// Displayed grid position of a node at `ts`
    pub fn position(&self, id: NodeId, ts: f64) -> Option<GridPos> {
        self.animation.position(self.document.tree(), id, ts)
    }

    /// Frame callback; returns whether more frames are needed
    pub fn tick(&mut self, ts: f64) -> bool {
        self.animation.tick(ts)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Run a keyboard command
    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        debug!("command {:?}", command);
        match command {
            Command::Move(direction) => {
                let before = self.selection();
                if self.move_selection(direction) == before {
                    return Ok(Outcome::Ignored);
                }
            }
            Command::LoadPreset(index) => {
                self.load_preset_index(index)?;
            }
            Command::Insert => return Ok(Outcome::NeedsValue),
            Command::DeleteSelection => {
                self.delete_selection()?;
            }
            Command::RotateClockwise => {
                self.rotate_selection_clockwise()?;
            }
            Command::RotateCounterClockwise => {
                self.rotate_selection_counter_clockwise()?;
            }
        }

        Ok(if command.mutates() {
            Outcome::Animate
        } else {
            Outcome::Redraw
        })
    }

    fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut Document) -> Result<T, TreeError>,
    ) -> Result<T, SessionError> {
        let (displayed, now) = self.displayed_now();
        let out = op(&mut self.document)?;
        self.settle(displayed, now);
        Ok(out)
    }

    fn displayed_now(&self) -> (HashMap<NodeId, GridPos>, f64) {
        let now = self.clock.now();
        (self.animation.snapshot(self.document.tree(), now), now)
    }

    fn settle(&mut self, displayed: HashMap<NodeId, GridPos>, now: f64) {
        self.document.relayout();
        self.animation.begin(self.document.tree(), displayed, now);
    }
}
