use std::cell::Cell;

/// Source of frame timestamps, in milliseconds
///
/// The core never sleeps or polls; hosts drive transitions by calling
/// `tick` with timestamps from the same clock.
pub trait FrameClock {
    fn now(&self) -> f64;
}

/// Clock that only moves when told to
///
/// Used by tests and by hosts that push their own timestamps.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, ts: f64) {
        self.now.set(ts);
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Browser clock backed by `window.performance`
///
/// Matches the timestamps `requestAnimationFrame` hands to its callbacks.
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.as_ref().map(|p| p.now()).unwrap_or(0.0)
    }
}
