//! The one description of the file layout, shared by encode and decode.
//!
//! Every function takes the value it describes as a [`Place`]: a reader
//! fills a `&mut` target, a writer walks a shared borrow.

use crate::coords::Vec2;
use crate::error::CodecError;
use crate::scene::{Object, Operation, OperationKind, Primitive, PrimitiveKind, Scene};

use super::packing::ArgumentPacking;
use super::stream::Stream;
use super::{MAGIC, VERSION};

/// Where a described value lives for one direction of the layout.
pub(crate) enum Place<'a, T> {
    /// Filled in by a reader.
    Fill(&'a mut T),
    /// Emitted by a writer.
    Emit(&'a T),
}

impl<'a, T> Place<'a, T> {
    fn reborrow(&mut self) -> Place<'_, T> {
        match self {
            Place::Fill(value) => Place::Fill(&mut **value),
            Place::Emit(value) => Place::Emit(*value),
        }
    }

    fn field<U>(self, get: fn(&T) -> &U, get_mut: fn(&mut T) -> &mut U) -> Place<'a, U> {
        match self {
            Place::Fill(value) => Place::Fill(get_mut(value)),
            Place::Emit(value) => Place::Emit(get(value)),
        }
    }
}

impl<T: Copy> Place<'_, T> {
    /// Runs `f` on the target, or on a copy of it when emitting.
    fn with_value<R>(self, f: impl FnOnce(&mut T) -> R) -> R {
        match self {
            Place::Fill(value) => f(value),
            Place::Emit(value) => {
                let mut copy = *value;
                f(&mut copy)
            }
        }
    }
}

// Smallest encodings, used to reject counts the remaining input cannot hold.
const MIN_OBJECT_SIZE: usize = 4 + 4;
const MIN_PRIMITIVE_SIZE: usize = 2 + 4;
const MIN_OPERATION_SIZE: usize = 2 + 4;

pub(crate) fn scene<S: Stream>(s: &mut S, mut scene: Place<'_, Scene>) -> Result<(), CodecError> {
    let mut magic = MAGIC;
    s.bytes(&mut magic)?;
    if magic != MAGIC {
        return Err(CodecError::BadMagic(magic));
    }

    let mut version = VERSION;
    s.scalar(&mut version)?;
    if version > VERSION {
        return Err(CodecError::UnsupportedVersion { found: version, supported: VERSION });
    }
    let packing = ArgumentPacking::for_version(version);

    let objects = scene.reborrow().field(|v| &v.objects, |v| &mut v.objects);
    sequence(s, objects, MIN_OBJECT_SIZE, |s, o| object(s, o, packing))?;
    let primitives = scene.field(|v| &v.primitives, |v| &mut v.primitives);
    sequence(s, primitives, MIN_PRIMITIVE_SIZE, |s, p| p.with_value(|p| primitive(s, p)))
}

fn object<S: Stream>(s: &mut S, mut object: Place<'_, Object>, packing: ArgumentPacking) -> Result<(), CodecError> {
    let primitives = object.reborrow().field(|v| &v.primitives, |v| &mut v.primitives);
    sequence(s, primitives, MIN_PRIMITIVE_SIZE, |s, p| p.with_value(|p| primitive(s, p)))?;
    let operations = object.field(|v| &v.operations, |v| &mut v.operations);
    sequence(s, operations, MIN_OPERATION_SIZE, |s, op| op.with_value(|op| operation(s, op, packing)))
}

/// `u32` count followed by that many records.
fn sequence<S, T, F>(s: &mut S, items: Place<'_, Vec<T>>, min_record: usize, mut record: F) -> Result<(), CodecError>
where
    S: Stream,
    T: Default,
    F: FnMut(&mut S, Place<'_, T>) -> Result<(), CodecError>,
{
    match items {
        Place::Fill(items) => {
            let mut count = 0u32;
            s.scalar(&mut count)?;

            let count = count as usize;
            if let Some(remaining) = s.remaining() {
                let needed = count.saturating_mul(min_record);
                if needed > remaining {
                    return Err(CodecError::Truncated { needed, remaining });
                }
            }
            items.clear();
            items.resize_with(count, T::default);
            items.iter_mut().try_for_each(|item| record(s, Place::Fill(item)))
        }
        Place::Emit(items) => {
            let mut count = u32::try_from(items.len()).map_err(|_| CodecError::CountOverflow(items.len()))?;
            s.scalar(&mut count)?;
            items.iter().try_for_each(|item| record(s, Place::Emit(item)))
        }
    }
}

fn primitive<S: Stream>(s: &mut S, primitive: &mut Primitive) -> Result<(), CodecError> {
    let mut tag = primitive.kind().tag();
    s.scalar(&mut tag)?;
    if s.is_reading() {
        let kind = PrimitiveKind::from_tag(tag).ok_or(CodecError::UnknownPrimitiveKind(tag))?;
        *primitive = Primitive::placeholder(kind);
    }

    match primitive {
        Primitive::Constant(value) => s.scalar(value),
        Primitive::Plane(plane) => {
            vec2(s, &mut plane.normal)?;
            s.scalar(&mut plane.offset)
        }
        Primitive::Circle(circle) => {
            vec2(s, &mut circle.center)?;
            s.scalar(&mut circle.radius)
        }
    }
}

fn operation<S: Stream>(s: &mut S, operation: &mut Operation, packing: ArgumentPacking) -> Result<(), CodecError> {
    let mut tag = operation.kind().tag();
    s.scalar(&mut tag)?;
    if s.is_reading() {
        let kind = OperationKind::from_tag(tag).ok_or(CodecError::UnknownOperationKind(tag))?;
        *operation = Operation::placeholder(kind);
    }

    // Only `arity` words are stored.
    for arg in operation.args_mut() {
        let mut word = if s.is_reading() { 0 } else { packing.pack(*arg)? };
        s.scalar(&mut word)?;
        if s.is_reading() {
            *arg = packing.unpack(word)?;
        }
    }
    Ok(())
}

fn vec2<S: Stream>(s: &mut S, v: &mut Vec2) -> Result<(), CodecError> {
    s.scalar(&mut v.x)?;
    s.scalar(&mut v.y)
}
