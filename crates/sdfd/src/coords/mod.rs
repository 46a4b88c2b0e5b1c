//! Coordinate types shared by the geometry kernel and the evaluator.
//!
//! Field space:
//! - `f32` units, no implied pixel grid
//! - +X right, +Y down when rendered by the usual raster callers
//!
//! A non-uniform scene scale maps field space to output space; see
//! [`crate::scene::Scene::scale`].

mod scalar;
mod vec2;

pub use scalar::{sign, sign0};
pub use vec2::Vec2;
