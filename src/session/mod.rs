//! Session state: the document being edited plus its animation
//!
//! One [`Session`] exists per visualizer. Loading a preset replaces its
//! [`Document`] wholesale.

mod document;
mod error;
mod state;

pub use document::Document;
pub use error::SessionError;
pub use state::{Outcome, Session};
