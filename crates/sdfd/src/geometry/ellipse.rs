use crate::coords::{sign, sign0, Vec2};

use super::Circle;

/// Axis-aligned ellipse with per-axis radii.
///
/// Shows up when a [`Circle`] is evaluated under a non-uniform scene scale.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub radius: Vec2,
}

/// Relative threshold on `r.y² - r.x²` below which the radii count as equal.
const ROUND_EPSILON: f32 = 1e-6;

impl Ellipse {
    #[inline]
    pub const fn new(center: Vec2, radius: Vec2) -> Self {
        Self { center, radius }
    }

    /// Exact signed distance.
    ///
    /// Closed-form solve of the nearest-point quartic after folding `p` into
    /// the first quadrant with `p.x <= p.y` (after Inigo Quilez,
    /// <https://www.shadertoy.com/view/4sS3zz>).
    ///
    /// Radii are taken by magnitude.
    pub fn distance(&self, point: Vec2) -> f32 {
        let mut ab = self.radius.abs();
        let mut p = (point - self.center).abs();
        if p.x > p.y {
            p = p.yx();
            ab = ab.yx();
        }

        let l = ab.y * ab.y - ab.x * ab.x;
        let scale = (ab.x * ab.x).max(ab.y * ab.y);

        // The solve divides by `l`.
        if l.abs() <= ROUND_EPSILON * scale {
            return Circle::new(self.center, ab.y).distance(point);
        }

        // On the folded axis the solve hits 0/0; the nearest point is known.
        if p.x == 0.0 {
            return on_axis_distance(p.y, ab, l);
        }

        let m = ab.x * p.x / l;
        let n = ab.y * p.y / l;
        let m2 = m * m;
        let n2 = n * n;

        let c = (m2 + n2 - 1.0) / 3.0;
        let c3 = c * c * c;

        let d = c3 + m2 * n2;
        let q = d + m2 * n2;
        let g = m + m * n2;

        let sqrt3 = 3.0f32.sqrt();

        let co = if d < 0.0 {
            let h = (q / c3).clamp(-1.0, 1.0).acos() / 3.0;
            let s = h.cos() + 2.0;
            let t = h.sin() * sqrt3;
            let rx = (m2 - c * (s + t)).max(0.0).sqrt();
            let ry = (m2 - c * (s - t)).max(0.0).sqrt();
            ry + sign0(l) * rx + g.abs() / (rx * ry)
        } else {
            let h = 2.0 * m * n * d.sqrt();
            let s = sign(q + h) * (q + h).abs().cbrt();
            let t = sign(q - h) * (q - h).abs().cbrt();
            let rx = -(s + t) - c * 4.0 + 2.0 * m2;
            let ry = (s - t) * sqrt3;
            let rm = (rx * rx + ry * ry).sqrt();
            ry / (rm - rx).max(0.0).sqrt() + 2.0 * g / rm
        };
        let co = (co - m) / 2.0;

        let si = (1.0 - co * co).max(0.0).sqrt();

        let r = ab * Vec2::new(co, si);

        (r - p).length() * sign(p.y - r.y)
    }
}

/// Distance from `(0, y)`, `y >= 0`, to an origin-centered ellipse with radii `ab`.
///
/// When `ab.y` is the major radius, points below the evolute cusp at
/// `l / ab.y` are nearest to an off-axis boundary point.
fn on_axis_distance(y: f32, ab: Vec2, l: f32) -> f32 {
    if l > 0.0 && y < l / ab.y {
        -ab.x * (1.0 - y * y / l).max(0.0).sqrt()
    } else {
        y - ab.y
    }
}
