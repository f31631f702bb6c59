use serde::Deserialize;

use super::GridPos;
use crate::math::Vec2;

/// Spacing and sizing of the drawn tree, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Vertical distance between tree levels
    pub row_spacing: f32,
    /// Horizontal distance between adjacent in-order ranks
    pub col_spacing: f32,
    /// Offset of the root from the top edge
    pub top_padding: f32,
    /// Radius of a node circle (also the pick radius)
    pub node_radius: f32,
    /// Radius of the ring drawn around the selection
    pub selection_radius: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            row_spacing: 60.0,
            col_spacing: 50.0,
            top_padding: 100.0,
            node_radius: 20.0,
            selection_radius: 25.0,
        }
    }
}

/// Maps grid positions onto a drawing surface of a given width
///
/// Column zero sits at the horizontal centre of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub params: LayoutParams,
}

impl Viewport {
    pub fn new(width: f32, params: LayoutParams) -> Self {
        Self { width, params }
    }

    pub fn to_screen(&self, pos: GridPos) -> Vec2 {
        Vec2::new(
            self.width / 2.0 + pos.col * self.params.col_spacing,
            self.params.top_padding + pos.row * self.params.row_spacing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_top_centre() {
        let viewport = Viewport::new(800.0, LayoutParams::default());
        let p = viewport.to_screen(GridPos::new(0.0, 0.0));
        assert_eq!(p, Vec2::new(400.0, 100.0));
    }

    #[test]
    fn test_grid_spacing() {
        let viewport = Viewport::new(800.0, LayoutParams::default());
        let p = viewport.to_screen(GridPos::new(2.0, -1.5));
        assert!((p.x - 325.0).abs() < 0.001);
        assert!((p.y - 220.0).abs() < 0.001);
    }

    #[test]
    fn test_params_partial_yaml() {
        let params: LayoutParams = serde_yaml::from_str("row_spacing: 80.0").unwrap();
        assert_eq!(params.row_spacing, 80.0);
        assert_eq!(params.col_spacing, 50.0);
    }
}
