use glam::{Vec2, Vec4};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::motion::{Curve, Easing};
use super::Layer;
use crate::Viewport;

const HEART_COLOR: Vec4 = Vec4::new(0.976, 0.659, 0.831, 0.7);
const SPARKLE_COLOR: Vec4 = Vec4::new(0.996, 0.941, 0.541, 1.0);
const SPARKLE_GLOW: Vec4 = Vec4::new(1.0, 0.843, 0.0, 0.7);

/// Heart spawn/exit rows relative to the viewport.
const HEART_ENTRY_BELOW: f32 = 20.0;
const HEART_EXIT_Y: f32 = -100.0;
const HEART_DRIFT: f32 = 50.0;
/// Petals enter above and leave below by this margin.
const PETAL_MARGIN: f32 = 50.0;
const PETAL_SWAY: f32 = 75.0;

/// A single looping decorative element. Positions are the top-left corner in
/// viewport pixels, rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub layer: Layer,
    pub size: Vec2,
    pub x: Curve,
    pub y: Curve,
    pub opacity: Curve,
    pub rotation: Curve,
    pub scale: Curve,
    pub color: Vec4,
    pub glow: Option<Vec4>,
    /// Seconds per loop, already divided by the speed factor.
    pub duration: f32,
    /// Seconds before the first loop starts.
    pub delay: f32,
    pub easing: Easing,
}

/// Where a particle is at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub layer: Layer,
    pub position: Vec2,
    /// Unscaled size; multiply by `scale` when painting.
    pub size: Vec2,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub color: Vec4,
    pub glow: Option<Vec4>,
}

impl ParticleFrame {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

impl Particle {
    /// Linear progress through the current loop; `None` while still delayed.
    /// The loop phase is taken in f64 and only narrowed once it is in `[0, 1)`.
    pub fn progress(&self, age: f64) -> Option<f32> {
        let running = age - f64::from(self.delay);
        if running < 0.0 {
            return None;
        }
        if self.duration <= f32::EPSILON {
            return Some(1.0);
        }
        let duration = f64::from(self.duration);
        Some((running.rem_euclid(duration) / duration) as f32)
    }

    /// Samples the particle `age` seconds after its layer was generated.
    pub fn sample(&self, age: f64) -> ParticleFrame {
        let value = |curve: Curve| match self.progress(age) {
            Some(p) => curve.sample(p, self.easing),
            None => curve.initial(),
        };
        ParticleFrame {
            layer: self.layer,
            position: Vec2::new(value(self.x), value(self.y)),
            size: self.size,
            scale: value(self.scale),
            opacity: value(self.opacity),
            rotation: value(self.rotation),
            color: self.color,
            glow: self.glow,
        }
    }
}

// Degenerate ranges (e.g. a collapsed viewport) pin to `low`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): (f32, f32)) -> f32 {
    if !(high > low) {
        return low;
    }
    rng.gen_range(low..=high)
}

/// Rolls a fresh particle for `layer` inside `viewport`.
pub(crate) fn spawn<R: Rng + ?Sized>(
    layer: Layer,
    viewport: Viewport,
    speed: f32,
    rng: &mut R,
) -> Particle {
    let profile = layer.profile();
    let size = uniform(rng, profile.size);
    let x0 = uniform(rng, (0.0, viewport.width));
    let duration = uniform(rng, profile.duration) / speed;
    let delay = uniform(rng, profile.delay);

    match layer {
        Layer::Hearts => Particle {
            layer,
            size: Vec2::splat(size),
            x: Curve::Tween {
                from: x0,
                to: x0 + uniform(rng, (-HEART_DRIFT, HEART_DRIFT)),
            },
            y: Curve::Tween {
                from: viewport.height + HEART_ENTRY_BELOW,
                to: HEART_EXIT_Y,
            },
            opacity: Curve::Tween {
                from: 0.0,
                to: uniform(rng, (0.3, 0.8)),
            },
            rotation: Curve::Tween {
                from: 0.0,
                to: uniform(rng, (0.0, 360.0)),
            },
            scale: Curve::Fixed(1.0),
            color: HEART_COLOR,
            glow: None,
            duration,
            delay,
            easing: profile.easing,
        },
        Layer::Petals => {
            let spin = uniform(rng, (0.0, 360.0));
            let color = Vec4::new(
                uniform(rng, (212.0, 255.0)) / 255.0,
                uniform(rng, (165.0, 195.0)) / 255.0,
                uniform(rng, (165.0, 195.0)) / 255.0,
                0.7,
            );
            Particle {
                layer,
                size: Vec2::new(size, size * 1.2),
                x: Curve::Tween {
                    from: x0,
                    to: x0 + uniform(rng, (-PETAL_SWAY, PETAL_SWAY)),
                },
                y: Curve::Tween {
                    from: -PETAL_MARGIN,
                    to: viewport.height + PETAL_MARGIN,
                },
                opacity: Curve::Tween { from: 0.0, to: 0.8 },
                rotation: Curve::Tween {
                    from: spin,
                    to: spin + uniform(rng, (0.0, 180.0)),
                },
                scale: Curve::Fixed(1.0),
                color,
                glow: None,
                duration,
                delay,
                easing: profile.easing,
            }
        }
        Layer::Sparkles => Particle {
            layer,
            size: Vec2::splat(size),
            x: Curve::Fixed(x0),
            y: Curve::Fixed(uniform(rng, (0.0, viewport.height))),
            opacity: Curve::Pulse { rest: 0.0, peak: 0.8 },
            rotation: Curve::Fixed(0.0),
            scale: Curve::Pulse { rest: 0.0, peak: 1.0 },
            color: SPARKLE_COLOR,
            glow: Some(SPARKLE_GLOW),
            duration,
            delay,
            easing: profile.easing,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn within(value: f32, (low, high): (f32, f32)) -> bool {
        value >= low && value <= high
    }

    #[test]
    fn sampled_parameters_stay_in_documented_ranges() {
        let viewport = Viewport { width: 640.0, height: 480.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for layer in Layer::ALL {
            let profile = layer.profile();
            for _ in 0..200 {
                let p = spawn(layer, viewport, 2.0, &mut rng);
                assert!(within(p.size.x, profile.size), "{layer} size {}", p.size.x);
                assert!(within(p.duration * 2.0, profile.duration));
                assert!(within(p.delay, profile.delay));
                assert!(within(p.x.initial(), (0.0, viewport.width)));
            }
        }
    }

    #[test]
    fn hearts_rise_and_petals_fall_across_the_viewport() {
        let viewport = Viewport { width: 800.0, height: 600.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let heart = spawn(Layer::Hearts, viewport, 1.0, &mut rng);
        assert_eq!(heart.y, Curve::Tween { from: 620.0, to: -100.0 });
        let Curve::Tween { from, to } = heart.x else {
            panic!("heart x should tween");
        };
        assert!((to - from).abs() <= HEART_DRIFT);

        let petal = spawn(Layer::Petals, viewport, 1.0, &mut rng);
        assert_eq!(petal.y, Curve::Tween { from: -50.0, to: 650.0 });
        assert!((petal.size.y - petal.size.x * 1.2).abs() < 1e-4);
        let Curve::Tween { from, to } = petal.rotation else {
            panic!("petal rotation should tween");
        };
        assert!(within(to - from, (0.0, 180.0)));
    }

    #[test]
    fn sparkles_pulse_in_place() {
        let viewport = Viewport { width: 300.0, height: 200.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sparkle = spawn(Layer::Sparkles, viewport, 1.0, &mut rng);
        let start = sparkle.sample(f64::from(sparkle.delay));
        let mid = sparkle.sample(f64::from(sparkle.delay) + f64::from(sparkle.duration) * 0.5);
        assert_eq!(start.position, mid.position);
        assert!(!start.is_visible());
        assert!((mid.opacity - 0.8).abs() < 1e-3);
        assert!((mid.scale - 1.0).abs() < 1e-3);
    }

    #[test]
    fn particle_is_hidden_until_its_delay_then_loops() {
        let viewport = Viewport::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut heart = spawn(Layer::Hearts, viewport, 1.0, &mut rng);
        heart.delay = 2.0;
        heart.duration = 4.0;
        assert_eq!(heart.progress(1.0), None);
        assert!(!heart.sample(1.0).is_visible());
        assert_eq!(heart.progress(3.0), Some(0.25));
        assert_eq!(heart.progress(7.0), Some(0.25));
        assert_eq!(heart.sample(3.0), heart.sample(7.0));
    }

    #[test]
    fn speed_divides_duration() {
        let viewport = Viewport::default();
        let slow = spawn(Layer::Petals, viewport, 1.0, &mut ChaCha8Rng::seed_from_u64(5));
        let fast = spawn(Layer::Petals, viewport, 4.0, &mut ChaCha8Rng::seed_from_u64(5));
        assert!((slow.duration / 4.0 - fast.duration).abs() < 1e-4);
    }

    #[test]
    fn zero_sized_viewport_still_spawns() {
        let viewport = Viewport { width: 0.0, height: 0.0 };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let sparkle = spawn(Layer::Sparkles, viewport, 1.0, &mut rng);
        assert_eq!(sparkle.x, Curve::Fixed(0.0));
        assert_eq!(sparkle.y, Curve::Fixed(0.0));
    }
}
