//! Keepsake core: platform-agnostic state for the decorative particle
//! background, the memory carousel and the reasons gallery.

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod particles;

pub use carousel::{AutoplaySchedule, Carousel};
pub use config::{AnimationConfig, AppConfig, CarouselConfig, ConfigSource};
pub use content::{ContentPack, Hero, MemoryItem, Reason};
pub use error::{CarouselError, ConfigError, GalleryError, KeepsakeError};
pub use gallery::Gallery;
pub use particles::{Layer, Particle, ParticleField, ParticleFrame};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Host surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(width) || !valid(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
