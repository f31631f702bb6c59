//! Binary search tree storage and structural mutation
//!
//! Nodes live in a generational arena and refer to each other by
//! [`NodeId`]. Children are the owning edges; `parent` is a back-index
//! into the same arena.

mod error;
mod model;
mod node;

pub use error::TreeError;
pub use model::TreeModel;
pub use node::{Node, NodeId};
