//! Animation of layout changes
//!
//! After every mutation the controller interpolates each node from where
//! it was displayed to its new grid position over a short fixed window,
//! driven by timestamps from an injected frame clock.

mod clock;
mod controller;
mod easing;

pub use clock::{FrameClock, ManualClock, PerformanceClock};
pub use controller::{AnimationConfig, AnimationController, Transition};
pub use easing::{ease, Easing};
