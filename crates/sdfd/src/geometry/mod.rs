//! Closed-form distance functions for the primitive shapes.
//!
//! Every `distance` here is an exact Euclidean signed distance provided the
//! shape is well formed (a plane needs a unit normal for that). Negative
//! values are inside.

mod circle;
mod ellipse;
mod plane;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use plane::Plane;
