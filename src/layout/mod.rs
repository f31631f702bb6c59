//! Grid layout of the tree
//!
//! Every node gets a row (its depth) and a column (its in-order rank,
//! shifted so the whole tree is centred on column zero), plus a local
//! balance flag. The viewport maps grid positions to screen pixels.

mod engine;
mod viewport;

pub use engine::recompute_layout;
pub use viewport::{LayoutParams, Viewport};

/// Position on the layout grid
///
/// Columns are fractional when the tree has an odd number of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPos {
    pub row: f32,
    pub col: f32,
}

impl GridPos {
    pub const fn new(row: f32, col: f32) -> Self {
        Self { row, col }
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            row: (1.0 - t) * self.row + t * other.row,
            col: (1.0 - t) * self.col + t * other.col,
        }
    }
}
