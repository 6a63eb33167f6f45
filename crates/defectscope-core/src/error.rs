use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefectscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No file selected")]
    NoFileSelected,

    #[error("Failed to decode {}: {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DefectscopeError>;
