use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector in field units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// Components swapped.
    #[inline]
    pub const fn yx(self) -> Self {
        Self { x: self.y, y: self.x }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Rotates 90 degrees counter-clockwise (in a +Y up frame).
    #[inline]
    pub const fn perp(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// Unit vector in the same direction. A zero vector is returned unchanged.
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

// Componentwise arithmetic, both vector-vector and vector-scalar, plus the
// compound-assignment forms.
macro_rules! impl_componentwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $op(self, rhs: Vec2) -> Vec2 {
                Vec2::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl $Op<f32> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $op(self, rhs: f32) -> Vec2 {
                Vec2::new(self.x $sym rhs, self.y $sym rhs)
            }
        }

        impl $OpAssign for Vec2 {
            #[inline]
            fn $op_assign(&mut self, rhs: Vec2) {
                *self = *self $sym rhs;
            }
        }

        impl $OpAssign<f32> for Vec2 {
            #[inline]
            fn $op_assign(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign, +);
impl_componentwise!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise!(Div, div, DivAssign, div_assign, /);
