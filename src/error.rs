use std::path::PathBuf;

use lineart::LineArtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load palette {path}: {reason}")]
    PaletteLoad { path: PathBuf, reason: String },

    #[error("Failed to decode image {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] LineArtError),
}
