//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, and raster-shape errors, and provides semantic
//! variants for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("JPEG encode error: {0}")]
    Encode(#[from] jpeg_encoder::EncodingError),

    #[error("Raster shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Preset file error: {0}")]
    Preset(#[from] serde_json::Error),

    #[error("Transform returned {actual} pixels for a block of {expected}")]
    TransformArity { expected: usize, actual: usize },

    #[error("Transform error: {0}")]
    Transform(String),

    #[error("Band {band} failed: {source}")]
    Worker {
        band: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Kernel dimensions must be greater than 0, got: {width}x{height}")]
    ZeroKernel { width: usize, height: usize },

    #[error("Band count must be greater than 0")]
    ZeroBands,

    #[error("Band count {bands} leaves no full band for image height {height}")]
    EmptyBands { bands: usize, height: usize },
}

impl Error {
    pub fn transform<E: std::fmt::Display>(e: E) -> Self {
        Error::Transform(e.to_string())
    }
}
