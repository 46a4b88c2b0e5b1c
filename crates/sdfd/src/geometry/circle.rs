use crate::coords::Vec2;

use super::Ellipse;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn distance(&self, p: Vec2) -> f32 {
        (p - self.center).length() - self.radius
    }

    /// The circle after a componentwise scale of space: an axis-aligned ellipse.
    #[inline]
    pub fn scaled(&self, scale: Vec2) -> Ellipse {
        Ellipse::new(self.center * scale, (Vec2::splat(self.radius) * scale).abs())
    }
}
