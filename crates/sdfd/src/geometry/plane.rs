use crate::coords::Vec2;

/// Half-plane boundary.
///
/// Distance grows along `normal`; the solid side is where the distance is
/// negative. Two floats (angle + offset) would be enough, but storing the
/// normal avoids `sin`/`cos` round-off on every evaluation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Plane {
    pub normal: Vec2,
    /// How far the boundary is moved along `normal` from the origin.
    pub offset: f32,
}

impl Plane {
    #[inline]
    pub const fn new(normal: Vec2, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Boundary through `a` and `b`.
    ///
    /// Orient yourself so that the vector from `a` to `b` points up on screen
    /// (+Y down): solid is to the right, empty to the left.
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let normal = (a - b).perp().normalized();
        Self { normal, offset: a.dot(normal) }
    }

    /// Boundary through `point`; moving along `normal` leaves the solid.
    #[inline]
    pub fn from_point_and_normal(point: Vec2, normal: Vec2) -> Self {
        Self { normal, offset: point.dot(normal) }
    }

    /// Boundary through `point` with normal `(cos angle, sin angle)`.
    #[inline]
    pub fn from_point_and_angle(point: Vec2, angle: f32) -> Self {
        Self::from_point_and_normal(point, unit_from_angle(angle))
    }

    /// Normal is `(cos angle, sin angle)`, boundary moved by `offset` along it.
    #[inline]
    pub fn from_angle_and_offset(angle: f32, offset: f32) -> Self {
        Self { normal: unit_from_angle(angle), offset }
    }

    #[inline]
    pub fn distance(&self, p: Vec2) -> f32 {
        self.normal.dot(p) - self.offset
    }

    /// The same boundary after a componentwise scale of space.
    ///
    /// A non-uniform scale turns the normal, so the plane is rebuilt from two
    /// boundary points rather than by rescaling distances. The resulting
    /// normal is unit length. A mirroring scale keeps the solid side.
    pub fn scaled(&self, scale: Vec2) -> Self {
        let a = self.normal * self.offset;
        let b = a + self.normal.perp();

        let a = a * scale;
        let b = b * scale;

        // A reflection reverses the direction from `a` to `b`.
        let normal = (a - b).perp().normalized();
        let normal = if scale.x * scale.y < 0.0 { -normal } else { normal };
        Self { normal, offset: a.dot(normal) }
    }
}

#[inline]
fn unit_from_angle(angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos, sin)
}
