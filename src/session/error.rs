use thiserror::Error;

use crate::data::ConfigError;
use crate::input::InputError;
use crate::tree::TreeError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no preset number {0}")]
    UnknownPreset(usize),
}
