//! Two-dimensional signed distance field scenes.
//!
//! A [`Scene`] holds [`Object`]s, each a list of primitives plus an ordered
//! list of min/max/neg operations over them. Evaluating an object at a point
//! gives the signed distance to its boundary (negative inside). Scenes
//! persist to a compact binary format through [`codec`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Vec2`, sign helpers |
//! | [`geometry`] | `Plane`, `Circle`, `Ellipse` distance functions |
//! | [`scene`] | `Primitive`, `ArgumentIndex`, `Operation`, `Object`, `Scene` |
//! | [`eval`] | primitive and object evaluation |
//! | [`codec`] | `.sdfd` encode/decode, file load/store |
//! | [`error`] | `EvalError`, `CodecError` |
//! | [`logging`] | `init_logging` |
//!
//! # Quick start
//!
//! ```rust
//! use sdfd::coords::Vec2;
//! use sdfd::geometry::Circle;
//! use sdfd::scene::{Object, Scene};
//!
//! let mut object = Object::new();
//! let outer = object.push_primitive(Circle::new(Vec2::zero(), 4.0));
//! let inner = object.push_primitive(Circle::new(Vec2::zero(), 2.0));
//! object.subtract(outer, inner);
//!
//! let mut scene = Scene::new();
//! let ring = scene.push_object(object);
//!
//! assert_eq!(scene.evaluate(ring, Vec2::new(3.0, 0.0)).unwrap(), -1.0);
//!
//! let bytes = sdfd::codec::encode(&scene).unwrap();
//! assert_eq!(sdfd::codec::decode(&bytes).unwrap(), scene);
//! ```

pub mod codec;
pub mod coords;
pub mod error;
pub mod eval;
pub mod geometry;
pub mod logging;
pub mod scene;

pub use codec::{load_from_file, store_to_file};
pub use error::{CodecError, EvalError};
pub use scene::{ArgumentIndex, Object, Operation, Primitive, Scene};
