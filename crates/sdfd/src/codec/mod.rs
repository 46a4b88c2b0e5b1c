//! Binary scene format (`.sdfd`).
//!
//! Layout, little-endian, no padding:
//!
//! | Field | Type |
//! |-------|------|
//! | magic | `b"sdfd"` |
//! | version | `u16` |
//! | object count | `u32`, then per object: primitive count + primitives, operation count + operations |
//! | shared primitive count | `u32`, then primitives |
//!
//! A primitive is a `u16` kind tag followed by its floats (constant: 1,
//! plane: normal.x, normal.y, offset; circle: center.x, center.y, radius).
//! An operation is a `u16` kind tag followed by one `u32` argument word per
//! argument. Argument words pack a 2-bit kind below a 30-bit index (version
//! 1); version 0 files used a 1-bit kind and a 31-bit index.
//!
//! Encoding and decoding run the same layout description, so the two cannot
//! drift apart. The scene scale is not part of the format.

mod file;
mod layout;
mod packing;
mod stream;

pub use file::{load_from_file, store_to_file};

use std::io::Write;

use crate::error::CodecError;
use crate::scene::Scene;

use layout::Place;
use stream::{Reader, Writer};

pub const MAGIC: [u8; 4] = *b"sdfd";

/// Newest format version this crate reads, and the one it writes.
///
/// Version 0 files (no scene primitive references) still load.
pub const VERSION: u16 = 1;

/// Encodes `scene` into a new buffer.
pub fn encode(scene: &Scene) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    write_to(scene, &mut out)?;
    Ok(out)
}

/// Writes `scene` to `sink`, returning the number of bytes written.
pub fn write_to<W: Write>(scene: &Scene, sink: W) -> Result<usize, CodecError> {
    let mut writer = Writer::new(sink);
    layout::scene(&mut writer, Place::Emit(scene))?;
    Ok(writer.written())
}

/// Decodes a complete buffer.
///
/// Either the whole buffer describes a scene or an error is returned; a
/// partially read scene is never handed out.
pub fn decode(bytes: &[u8]) -> Result<Scene, CodecError> {
    let mut reader = Reader::new(bytes);
    let mut scene = Scene::default();
    layout::scene(&mut reader, Place::Fill(&mut scene))?;

    let trailing = reader.remaining_len();
    if trailing != 0 {
        return Err(CodecError::TrailingBytes(trailing));
    }
    Ok(scene)
}
