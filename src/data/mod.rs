pub mod config;
pub mod presets;

pub use config::{ConfigError, VisualizerConfig};
pub use presets::PresetLibrary;
