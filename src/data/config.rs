use serde::Deserialize;
use thiserror::Error;

use super::presets::PresetLibrary;
use crate::animation::AnimationConfig;
use crate::input::ValueLimits;
use crate::layout::LayoutParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Everything tunable about a visualizer session
///
/// Every section is optional in YAML and falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub animation: AnimationConfig,
    pub layout: LayoutParams,
    pub input: ValueLimits,
    pub presets: PresetLibrary,
    /// Preset loaded at startup
    pub initial_preset: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            layout: LayoutParams::default(),
            input: ValueLimits::default(),
            presets: PresetLibrary::default(),
            initial_preset: 1,
        }
    }
}

impl VisualizerConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::Invalid("at least one preset is required".into()));
        }
        if let Some(i) = self.presets.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::Invalid(format!("preset {} is empty", i)));
        }
        if self.initial_preset >= self.presets.len() {
            return Err(ConfigError::Invalid(format!(
                "initial preset {} out of range (have {})",
                self.initial_preset,
                self.presets.len()
            )));
        }
        if self.animation.duration_ms.is_nan() || self.animation.duration_ms <= 0.0 {
            return Err(ConfigError::Invalid("animation duration must be positive".into()));
        }
        if self.input.min > self.input.max {
            return Err(ConfigError::Invalid(format!(
                "input range {}..={} is empty",
                self.input.min, self.input.max
            )));
        }
        Ok(())
    }

    /// The preset loaded at startup
    pub fn initial_sequence(&self) -> Option<&[i64]> {
        self.presets.get(self.initial_preset)
    }
}
