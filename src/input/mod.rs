//! Translation of raw user input into tree operations
//!
//! Values typed by the user are checked here before they reach the tree,
//! which itself accepts any integer.

mod command;
mod value;

pub use command::Command;
pub use value::{parse_value, InputError, ValueLimits};
