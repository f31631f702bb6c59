pub mod picking;

pub use picking::NodePicker;
