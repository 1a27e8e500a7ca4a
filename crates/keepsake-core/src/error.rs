use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("density must be a number, got {0}")]
    InvalidDensity(f32),
    #[error("speed must be finite and greater than zero, got {0}")]
    InvalidSpeed(f32),
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
    #[error("viewport size must be finite and non-negative, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("{kind} list contains id {id} more than once")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one memory item")]
    Empty,
    #[error("slide {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("no reason with id {0}")]
    UnknownReason(u32),
}

/// Any failure surfaced by the core crate.
#[derive(Debug, Error)]
pub enum KeepsakeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
}
