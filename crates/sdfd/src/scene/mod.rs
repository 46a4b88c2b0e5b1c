//! Scene graph data model.
//!
//! Responsibilities:
//! - primitive and operation types (closed sets, exhaustively matched)
//! - argument references across object primitives, scene primitives and
//!   earlier operation results
//! - builder helpers that hand back references as items are pushed
//!
//! Evaluation lives in [`crate::eval`], persistence in [`crate::codec`].

mod argument;
mod object;
mod operation;
mod primitive;

pub use argument::{ArgumentIndex, ArgumentKind};
pub use object::Object;
pub use operation::{Operation, OperationKind};
pub use primitive::{Primitive, PrimitiveKind};

use crate::coords::Vec2;
use crate::error::EvalError;
use crate::eval;

/// Objects plus the primitive pool they share.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub objects: Vec<Object>,
    /// Primitives reachable from any object through `scene_primitive` references.
    pub primitives: Vec<Primitive>,
    /// Non-uniform scale applied to every plane and circle evaluated in this
    /// scene, shared primitives included. `None` is the identity. Not stored
    /// by the codec.
    pub scale: Option<Vec2>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Appends an object and returns its index.
    pub fn push_object(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Appends a shared primitive and returns a reference usable from any object.
    pub fn push_shared(&mut self, primitive: impl Into<Primitive>) -> ArgumentIndex {
        let index = self.primitives.len() as u32;
        self.primitives.push(primitive.into());
        ArgumentIndex::scene_primitive(index)
    }

    #[inline]
    pub fn object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// The configured scale, or `None` if evaluation is untransformed.
    #[inline]
    pub fn effective_scale(&self) -> Option<Vec2> {
        self.scale.filter(|s| *s != Vec2::splat(1.0))
    }

    /// Runs [`Object::validate`] on every object.
    pub fn validate(&self) -> Result<(), EvalError> {
        self.objects
            .iter()
            .try_for_each(|object| object.validate(self.primitives.len()))
    }

    /// Field value of object `index` at `point`.
    pub fn evaluate(&self, index: usize, point: Vec2) -> Result<f32, EvalError> {
        let object = self.object(index).ok_or(EvalError::ObjectOutOfBounds {
            index,
            len: self.objects.len(),
        })?;
        eval::evaluate_object(self, object, point)
    }

    /// Union of every object's field at `point`; `+inf` for an empty scene.
    ///
    /// A NaN field in any object makes the union NaN.
    pub fn evaluate_union(&self, point: Vec2) -> Result<f32, EvalError> {
        self.objects.iter().try_fold(f32::INFINITY, |acc, object| {
            Ok(operation::nan_min(acc, eval::evaluate_object(self, object, point)?))
        })
    }
}
