use egui::epaint::CircleShape;
use egui::{Color32, CornerRadius, LayerId, Painter, Pos2, Shape, Stroke, Vec2};
use keepsake_core::{Layer, ParticleField, ParticleFrame};

const BACKDROP: Color32 = Color32::from_rgb(0xFF, 0xF8, 0xF0);
const PETAL_SEGMENTS: usize = 20;

/// Paints the decorations on the background layer, below every panel, so
/// they never receive pointer input.
pub(crate) fn particles(context: &egui::Context, field: &ParticleField) {
    let painter = context.layer_painter(LayerId::background());
    painter.rect_filled(context.screen_rect(), CornerRadius::ZERO, BACKDROP);
    for frame in field.frames().filter(ParticleFrame::is_visible) {
        match frame.layer {
            Layer::Hearts => heart(&painter, &frame),
            Layer::Petals => petal(&painter, &frame),
            Layer::Sparkles => sparkle(&painter, &frame),
        }
    }
}

fn color(rgba: glam::Vec4, opacity: f32) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(rgba.x),
        channel(rgba.y),
        channel(rgba.z),
        channel(rgba.w * opacity),
    )
}

fn rotate(offset: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

fn center(frame: &ParticleFrame) -> Pos2 {
    let c = frame.center();
    Pos2::new(c.x, c.y)
}

// Two lobes over a downward wedge.
fn heart(painter: &Painter, frame: &ParticleFrame) {
    let fill = color(frame.color, frame.opacity);
    let size = frame.size.x * frame.scale;
    let c = center(frame);
    let at = |x: f32, y: f32| c + rotate(Vec2::new(x * size, y * size), frame.rotation);
    let lobe = size * 0.28;
    painter.circle_filled(at(-0.22, -0.12), lobe, fill);
    painter.circle_filled(at(0.22, -0.12), lobe, fill);
    painter.add(Shape::convex_polygon(
        vec![at(-0.48, -0.02), at(0.48, -0.02), at(0.0, 0.45)],
        fill,
        Stroke::NONE,
    ));
}

fn petal(painter: &Painter, frame: &ParticleFrame) {
    let fill = color(frame.color, frame.opacity);
    let radii = Vec2::new(frame.size.x, frame.size.y) * 0.5 * frame.scale;
    let c = center(frame);
    // Petal shapes sit at a quarter turn on top of their own spin.
    let angle = frame.rotation + 45.0;
    let points = (0..PETAL_SEGMENTS)
        .map(|i| {
            let t = i as f32 / PETAL_SEGMENTS as f32 * std::f32::consts::TAU;
            c + rotate(Vec2::new(radii.x * t.cos(), radii.y * t.sin()), angle)
        })
        .collect();
    painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
}

fn sparkle(painter: &Painter, frame: &ParticleFrame) {
    let c = center(frame);
    let radius = frame.size.x * 0.5 * frame.scale;
    if let Some(glow) = frame.glow {
        painter.add(CircleShape::filled(c, radius + 3.0, color(glow, frame.opacity * 0.5)));
    }
    painter.circle_filled(c, radius, color(frame.color, frame.opacity));
}

#[cfg(test)]
mod tests {
    use super::{color, rotate};
    use egui::Vec2;

    #[test]
    fn opacity_scales_alpha() {
        let c = color(glam::Vec4::new(1.0, 0.0, 0.0, 0.5), 0.5);
        assert_eq!(c.a(), 64);
    }

    #[test]
    fn quarter_turn_rotation() {
        let v = rotate(Vec2::new(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-5 && (v.y - 1.0).abs() < 1e-5);
    }
}
