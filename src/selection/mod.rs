//! Keyboard-style navigation of the focused node

mod cursor;

pub use cursor::{Direction, SelectionCursor};
