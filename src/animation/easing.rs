//! Easing functions for smooth animations

use serde::Deserialize;

/// Easing function types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Fast start, decelerate
    EaseOut,
    /// Smooth ease-in-out
    EaseInOut,
    /// Very fast start with an exponential tail (default for node motion)
    #[default]
    EaseOutExpo,
}

/// Apply easing function to a value t in range [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseOutExpo => {
            // 2^-10 leaves a ~0.001 gap at t = 1, so pin the end
            if t >= 1.0 {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
    }
}
