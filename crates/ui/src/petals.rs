//! Painter for the decorative petal layer.
//!
//! Particles are stored as viewport percentages; this module maps them into
//! screen space, applies the floating animation, and draws leaf or flower
//! shapes directly on the panel painter. Purely visual — nothing here is
//! interactive or feeds back into navigation state.

use egui::epaint::PathShape;
use egui::{Painter, Pos2, Rect, Stroke, pos2, vec2};
use petalfolio_core::{Particle, ParticleKind};

use crate::theme::{self, ThemeToken};

/// Peak upward travel of the float animation, in logical pixels.
const FLOAT_AMPLITUDE: f32 = 20.0;

/// Curve sampling resolution per quadratic segment.
const CURVE_STEPS: usize = 12;

/// Paint all particles into `viewport`.
///
/// `time` is the app clock in seconds; each particle's delay and duration
/// phase-shift the shared sinusoidal float.
pub fn paint(painter: &Painter, viewport: Rect, particles: &[Particle], time: f64) {
    for particle in particles {
        let anchor = pos2(
            viewport.left() + viewport.width() * particle.left / 100.0,
            viewport.top() + viewport.height() * particle.top / 100.0,
        );
        let center = anchor
            + vec2(particle.size / 2.0, particle.size / 2.0)
            + vec2(0.0, float_offset(time, particle.delay, particle.duration));
        let angle = particle.rotation.to_radians();

        match particle.kind {
            ParticleKind::Leaf => paint_leaf(painter, center, particle.size, angle),
            ParticleKind::Flower => paint_flower(painter, center, particle.size, angle),
        }
    }
}

/// Vertical offset of the ease-in-out float cycle at `time`.
///
/// Zero until `delay` has elapsed, then oscillates 0 → -amplitude → 0 with
/// the particle's period.
pub fn float_offset(time: f64, delay: f32, duration: f32) -> f32 {
    let elapsed = (time - f64::from(delay)).max(0.0);
    let phase = (elapsed / f64::from(duration)).fract() as f32;
    -FLOAT_AMPLITUDE * 0.5 * (1.0 - (phase * std::f32::consts::TAU).cos())
}

/// Rotate `offset` (a vector from the shape centre) by `angle` radians.
pub fn rotate(offset: egui::Vec2, angle: f32) -> egui::Vec2 {
    let (sin, cos) = angle.sin_cos();
    vec2(
        offset.x * cos - offset.y * sin,
        offset.x * sin + offset.y * cos,
    )
}

/// Map a point in the particle's local 100×100 box to screen space.
fn to_screen(center: Pos2, size: f32, angle: f32, local: Pos2) -> Pos2 {
    let scaled = vec2(local.x - 50.0, local.y - 50.0) * (size / 100.0);
    center + rotate(scaled, angle)
}

fn quad_bezier(p0: Pos2, ctrl: Pos2, p1: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    pos2(
        u * u * p0.x + 2.0 * u * t * ctrl.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * ctrl.y + t * t * p1.y,
    )
}

fn sample_quad(points: &mut Vec<Pos2>, p0: Pos2, ctrl: Pos2, p1: Pos2) {
    for step in 1..=CURVE_STEPS {
        let t = step as f32 / CURVE_STEPS as f32;
        points.push(quad_bezier(p0, ctrl, p1, t));
    }
}

/// Pointed leaf: two mirrored curve pairs meeting at the tips, with a
/// central vein stroke.
fn paint_leaf(painter: &Painter, center: Pos2, size: f32, angle: f32) {
    let tip_top = pos2(50.0, 10.0);
    let right = pos2(70.0, 50.0);
    let tip_bottom = pos2(50.0, 90.0);
    let left = pos2(30.0, 50.0);

    let mut outline = vec![tip_top];
    sample_quad(&mut outline, tip_top, pos2(70.0, 30.0), right);
    sample_quad(&mut outline, right, pos2(70.0, 70.0), tip_bottom);
    sample_quad(&mut outline, tip_bottom, pos2(30.0, 70.0), left);
    sample_quad(&mut outline, left, pos2(30.0, 30.0), tip_top);

    let screen: Vec<Pos2> = outline
        .into_iter()
        .map(|p| to_screen(center, size, angle, p))
        .collect();
    let fill = theme::resolve(ThemeToken::LeafFill).gamma_multiply(0.21);
    painter.add(PathShape::convex_polygon(screen, fill, Stroke::NONE));

    // Central vein, slightly S-curved like the leaf body.
    let mid = pos2(50.0, 50.0);
    let mut vein = vec![tip_top];
    sample_quad(&mut vein, tip_top, pos2(55.0, 30.0), mid);
    sample_quad(&mut vein, mid, pos2(45.0, 70.0), tip_bottom);
    let vein_screen: Vec<Pos2> = vein
        .into_iter()
        .map(|p| to_screen(center, size, angle, p))
        .collect();
    let vein_color = theme::resolve(ThemeToken::LeafVein).gamma_multiply(0.18);
    painter.add(PathShape::line(
        vein_screen,
        Stroke::new((size / 100.0 * 1.5).max(0.5), vein_color),
    ));
}

/// Four petals around a golden core.
fn paint_flower(painter: &Painter, center: Pos2, size: f32, angle: f32) {
    let scale = size / 100.0;
    let petals = [
        (pos2(50.0, 30.0), ThemeToken::PetalPink),
        (pos2(70.0, 50.0), ThemeToken::PetalRose),
        (pos2(50.0, 70.0), ThemeToken::PetalPink),
        (pos2(30.0, 50.0), ThemeToken::PetalRose),
    ];
    for (local, token) in petals {
        let fill = theme::resolve(token).gamma_multiply(0.16);
        painter.circle_filled(to_screen(center, size, angle, local), 15.0 * scale, fill);
    }
    let core = theme::resolve(ThemeToken::FlowerCore).gamma_multiply(0.18);
    painter.circle_filled(center, 12.0 * scale, core);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_offset_is_zero_before_delay() {
        assert_eq!(float_offset(1.0, 2.5, 5.0), 0.0);
    }

    #[test]
    fn float_offset_peaks_at_half_period() {
        // delay 0, duration 4 → peak at t = 2.
        let peak = float_offset(2.0, 0.0, 4.0);
        assert!((peak + FLOAT_AMPLITUDE).abs() < 1e-3, "peak was {peak}");
        // Back near zero at the full period.
        let rest = float_offset(4.0, 0.0, 4.0);
        assert!(rest.abs() < 1e-3, "rest was {rest}");
    }

    #[test]
    fn rotation_quarter_turn() {
        let rotated = rotate(vec2(1.0, 0.0), std::f32::consts::FRAC_PI_2);
        assert!(rotated.x.abs() < 1e-6);
        assert!((rotated.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn screen_mapping_scales_from_box_centre() {
        // Local centre maps to the shape centre regardless of rotation.
        let c = pos2(200.0, 100.0);
        let mapped = to_screen(c, 40.0, 1.23, pos2(50.0, 50.0));
        assert!((mapped - c).length() < 1e-5);

        // A point 50 units right of centre lands size/2 away, unrotated.
        let mapped = to_screen(c, 40.0, 0.0, pos2(100.0, 50.0));
        assert!((mapped - pos2(220.0, 100.0)).length() < 1e-5);
    }
}
