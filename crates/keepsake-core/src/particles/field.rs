use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::spawn::{spawn, Particle, ParticleFrame};
use super::Layer;
use crate::config::{check_speed, clamp_density, AnimationConfig};
use crate::error::ConfigError;
use crate::Viewport;

#[derive(Debug, Default)]
struct LayerState {
    particles: Vec<Particle>,
    /// Field clock reading when this set was rolled.
    born_at: f64,
}

/// The mounted particle background. Owns the animation settings; readers
/// borrow them through [`ParticleField::config`] and every change goes
/// through the setters so layers regenerate when their counts change.
#[derive(Debug)]
pub struct ParticleField<R = ChaCha8Rng> {
    config: AnimationConfig,
    viewport: Viewport,
    layers: [LayerState; 3],
    // f64 so a 1/60 s step still registers after weeks of uptime.
    clock: f64,
    rng: R,
}

impl ParticleField<ChaCha8Rng> {
    pub fn mount(config: AnimationConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        Self::with_rng(config, viewport, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(config: AnimationConfig, viewport: Viewport, rng: R) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let mut field = Self {
            config,
            viewport,
            layers: Default::default(),
            clock: 0.0,
            rng,
        };
        for layer in Layer::ALL {
            if field.config.layer_enabled(layer) {
                field.regenerate(layer, "mount");
            }
        }
        info!(
            "particle field mounted at {}x{} (density {}, speed {})",
            viewport.width, viewport.height, config.density, config.speed
        );
        Ok(field)
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds accumulated through [`ParticleField::tick`].
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn particles(&self, layer: Layer) -> &[Particle] {
        &self.layers[layer.index()].particles
    }

    pub fn particle_count(&self, layer: Layer) -> usize {
        self.particles(layer).len()
    }

    pub fn set_layer_enabled(&mut self, layer: Layer, enabled: bool) {
        if self.config.layer_enabled(layer) == enabled {
            return;
        }
        self.config.set_layer_enabled(layer, enabled);
        info!("{layer} layer {}", if enabled { "enabled" } else { "disabled" });
        if enabled {
            self.regenerate(layer, "enabled");
        } else {
            self.layers[layer.index()].particles.clear();
        }
    }

    /// Flips one layer and returns its new state.
    pub fn toggle_layer(&mut self, layer: Layer) -> bool {
        let enabled = !self.config.layer_enabled(layer);
        self.set_layer_enabled(layer, enabled);
        enabled
    }

    /// Clamps into `[0, 1]`; only layers whose count changes are re-rolled.
    pub fn set_density(&mut self, density: f32) -> Result<(), ConfigError> {
        let density = clamp_density(density)?;
        if density == self.config.density {
            return Ok(());
        }
        debug!("density {} -> {}", self.config.density, density);
        self.config.density = density;
        for layer in Layer::ALL {
            let wanted = layer.particle_count(density);
            if self.config.layer_enabled(layer) && self.particle_count(layer) != wanted {
                self.regenerate(layer, "density change");
            }
        }
        Ok(())
    }

    /// Applies to particles rolled from now on.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), ConfigError> {
        let speed = check_speed(speed)?;
        if speed != self.config.speed {
            debug!("speed {} -> {}", self.config.speed, speed);
            self.config.speed = speed;
        }
        Ok(())
    }

    /// Re-rolls every enabled layer against the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        info!(
            "viewport {}x{} -> {}x{}",
            self.viewport.width, self.viewport.height, viewport.width, viewport.height
        );
        self.viewport = viewport;
        for layer in Layer::ALL {
            if self.config.layer_enabled(layer) {
                self.regenerate(layer, "resize");
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.clock += f64::from(dt);
        }
    }

    /// Every live particle at the current clock, back to front.
    pub fn frames(&self) -> impl Iterator<Item = ParticleFrame> + '_ {
        Layer::ALL.into_iter().flat_map(move |layer| {
            let state = &self.layers[layer.index()];
            let age = self.clock - state.born_at;
            state.particles.iter().map(move |particle| particle.sample(age))
        })
    }

    fn regenerate(&mut self, layer: Layer, reason: &str) {
        let count = layer.particle_count(self.config.density);
        let (viewport, speed) = (self.viewport, self.config.speed);
        let rng = &mut self.rng;
        let particles = (0..count)
            .map(|_| spawn(layer, viewport, speed, &mut *rng))
            .collect();
        self.layers[layer.index()] = LayerState {
            particles,
            born_at: self.clock,
        };
        debug!("{layer} layer regenerated with {count} particles ({reason})");
    }
}
