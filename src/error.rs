//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image decode/encode, and resize errors, and provides semantic
//! variants for argument validation and dataset traversal failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The declared input folder does not exist under the base directory.
    #[error("Can't find a folder called {folder} in this directory")]
    NotFound { folder: String },

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode JPEG {path}: {source}")]
    JpegEncode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    /// A side scales down to zero pixels, e.g. a 1x1000 strip squared to 150.
    #[error("Image {width}x{height} collapses to zero pixels at target size {target_size}")]
    DegenerateDimensions {
        width: u32,
        height: u32,
        target_size: u32,
    },

    #[error("Unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("Destination {path} was already written in this run")]
    DestinationCollision { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
