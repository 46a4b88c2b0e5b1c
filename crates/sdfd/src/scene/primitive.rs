use crate::coords::Vec2;
use crate::geometry::{Circle, Plane};

/// Atomic, directly evaluable field.
///
/// Extending the primitive set:
/// - add a variant here and a matching [`PrimitiveKind`] tag
/// - the compiler then points at every `match` that needs a new arm
///   (distance evaluation, the binary layout)
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    /// Same value everywhere. Useful as a neutral or placeholder field.
    Constant(f32),
    Plane(Plane),
    Circle(Circle),
}

/// Wire tag of a [`Primitive`] variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u16)]
pub enum PrimitiveKind {
    Constant = 0,
    Plane = 4,
    Circle = 5,
}

impl PrimitiveKind {
    #[inline]
    pub const fn tag(self) -> u16 {
        self as u16
    }

    pub const fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            0 => Some(PrimitiveKind::Constant),
            4 => Some(PrimitiveKind::Plane),
            5 => Some(PrimitiveKind::Circle),
            _ => None,
        }
    }
}

impl Default for Primitive {
    fn default() -> Self {
        Primitive::Constant(0.0)
    }
}

impl Primitive {
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Constant(_) => PrimitiveKind::Constant,
            Primitive::Plane(_) => PrimitiveKind::Plane,
            Primitive::Circle(_) => PrimitiveKind::Circle,
        }
    }

    /// Zero-payload primitive of the given kind.
    pub fn placeholder(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Constant => Primitive::Constant(0.0),
            PrimitiveKind::Plane => Primitive::Plane(Plane::default()),
            PrimitiveKind::Circle => Primitive::Circle(Circle::default()),
        }
    }

    /// Signed distance at `point` in untransformed field space.
    #[inline]
    pub fn distance(&self, point: Vec2) -> f32 {
        match self {
            Primitive::Constant(value) => *value,
            Primitive::Plane(plane) => plane.distance(point),
            Primitive::Circle(circle) => circle.distance(point),
        }
    }

    /// Signed distance at `point` after scaling the primitive by `scale`.
    ///
    /// The shape is transformed geometrically: planes are rebuilt and circles
    /// become ellipses, so the result is a true distance in scaled space.
    pub fn scaled_distance(&self, point: Vec2, scale: Vec2) -> f32 {
        match self {
            Primitive::Constant(value) => *value,
            Primitive::Plane(plane) => plane.scaled(scale).distance(point),
            Primitive::Circle(circle) => circle.scaled(scale).distance(point),
        }
    }
}

impl From<f32> for Primitive {
    fn from(value: f32) -> Self {
        Primitive::Constant(value)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Primitive::Circle(circle)
    }
}
