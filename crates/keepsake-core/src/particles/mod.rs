//! Ambient decorative particles: hearts rising, petals falling, sparkles
//! pulsing in place. Three independent layers, painted back to front in
//! [`Layer::ALL`] order and never hit-tested.

mod field;
mod motion;
mod spawn;

pub use field::ParticleField;
pub use motion::{Curve, Easing};
pub use spawn::{Particle, ParticleFrame};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Hearts,
    Petals,
    Sparkles,
}

/// Sampling ranges for one layer. All ranges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProfile {
    pub size: (f32, f32),
    /// Seconds at speed 1.
    pub duration: (f32, f32),
    pub delay: (f32, f32),
    pub easing: Easing,
}

impl Layer {
    /// Back to front.
    pub const ALL: [Layer; 3] = [Layer::Hearts, Layer::Petals, Layer::Sparkles];

    /// Particle count at density 1.
    pub fn base_rate(self) -> u32 {
        match self {
            Layer::Hearts => 20,
            Layer::Petals => 15,
            Layer::Sparkles => 25,
        }
    }

    pub fn particle_count(self, density: f32) -> usize {
        if !(density > 0.0) {
            return 0;
        }
        (self.base_rate() as f32 * density.min(1.0)).floor() as usize
    }

    pub fn profile(self) -> LayerProfile {
        match self {
            Layer::Hearts => LayerProfile {
                size: (10.0, 30.0),
                duration: (5.0, 10.0),
                delay: (0.0, 10.0),
                easing: Easing::EaseOut,
            },
            Layer::Petals => LayerProfile {
                size: (15.0, 40.0),
                duration: (10.0, 18.0),
                delay: (0.0, 15.0),
                easing: Easing::EaseInOut,
            },
            Layer::Sparkles => LayerProfile {
                size: (2.0, 8.0),
                duration: (1.0, 3.0),
                delay: (0.0, 5.0),
                easing: Easing::EaseInOut,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layer::Hearts => "hearts",
            Layer::Petals => "petals",
            Layer::Sparkles => "sparkles",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Layer::Hearts => 0,
            Layer::Petals => 1,
            Layer::Sparkles => 2,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
