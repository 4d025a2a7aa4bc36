use thiserror::Error;

/// Camera settings that cannot produce an image.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1 pixel")]
    ZeroWidth,

    #[error("samples per pixel must be at least 1")]
    ZeroSamples,

    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f64),
}
