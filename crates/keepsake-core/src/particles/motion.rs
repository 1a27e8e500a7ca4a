use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

// CSS-style bezier with fixed endpoints (0,0) and (1,1); bisect x for t.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let axis = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let (mut lo, mut hi, mut s) = (0.0f32, 1.0f32, t);
    for _ in 0..32 {
        let x = axis(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    axis(y1, y2, s)
}

/// One animated channel of a particle over a single loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Curve {
    Fixed(f32),
    Tween { from: f32, to: f32 },
    /// `rest -> peak -> rest`, each half eased independently.
    Pulse { rest: f32, peak: f32 },
}

impl Curve {
    pub fn sample(self, progress: f32, easing: Easing) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Curve::Fixed(value) => value,
            Curve::Tween { from, to } => lerp(from, to, easing.apply(p)),
            Curve::Pulse { rest, peak } => {
                if p < 0.5 {
                    lerp(rest, peak, easing.apply(p * 2.0))
                } else {
                    lerp(peak, rest, easing.apply((p - 0.5) * 2.0))
                }
            }
        }
    }

    pub fn initial(self) -> f32 {
        match self {
            Curve::Fixed(value) => value,
            Curve::Tween { from, .. } => from,
            Curve::Pulse { rest, .. } => rest,
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::{Curve, Easing};

    #[test]
    fn easings_pin_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < 1e-4);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn ease_out_leads_and_ease_in_out_is_symmetric() {
        assert!(Easing::EaseOut.apply(0.5) > 0.6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
        assert!(Easing::EaseInOut.apply(0.2) < 0.2);
    }

    #[test]
    fn pulse_peaks_halfway() {
        let curve = Curve::Pulse { rest: 0.0, peak: 0.8 };
        assert_eq!(curve.sample(0.0, Easing::EaseInOut), 0.0);
        assert!((curve.sample(0.5, Easing::EaseInOut) - 0.8).abs() < 1e-4);
        assert!(curve.sample(1.0, Easing::EaseInOut).abs() < 1e-4);
    }

    #[test]
    fn tween_interpolates() {
        let curve = Curve::Tween { from: 10.0, to: 20.0 };
        assert_eq!(curve.initial(), 10.0);
        assert!((curve.sample(0.5, Easing::Linear) - 15.0).abs() < 1e-5);
        assert_eq!(Curve::Fixed(3.0).sample(0.7, Easing::EaseOut), 3.0);
    }
}
