//! Error types for evaluation and the binary scene format.

use std::fmt;
use std::io;

/// An argument or object reference that does not resolve.
///
/// Evaluation only reports indices that fall outside their list. A backward
/// reference rule violation that stays in bounds evaluates to NaN instead and
/// is only reported by [`Object::validate`](crate::scene::Object::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    ObjectPrimitiveOutOfBounds { index: u32, len: usize },
    ScenePrimitiveOutOfBounds { index: u32, len: usize },
    OperationOutOfBounds { index: u32, len: usize },
    /// Operation `operation` reads the result of operation `index >= operation`.
    ForwardReference { operation: usize, index: u32 },
    ObjectOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EvalError::ObjectPrimitiveOutOfBounds { index, len } => {
                write!(f, "object primitive {index} out of bounds (object has {len})")
            }
            EvalError::ScenePrimitiveOutOfBounds { index, len } => {
                write!(f, "scene primitive {index} out of bounds (scene has {len})")
            }
            EvalError::OperationOutOfBounds { index, len } => {
                write!(f, "operation {index} out of bounds (object has {len})")
            }
            EvalError::ForwardReference { operation, index } => {
                write!(f, "operation {operation} references operation {index}, which is not earlier")
            }
            EvalError::ObjectOutOfBounds { index, len } => {
                write!(f, "object {index} out of bounds (scene has {len})")
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Failure to read or write the `sdfd` binary format.
#[derive(Debug)]
pub enum CodecError {
    Io(io::Error),
    /// Input ended early.
    Truncated { needed: usize, remaining: usize },
    BadMagic([u8; 4]),
    UnsupportedVersion { found: u16, supported: u16 },
    UnknownPrimitiveKind(u16),
    UnknownOperationKind(u16),
    UnknownArgumentKind(u32),
    /// The argument kind has no encoding in the selected format version.
    UnrepresentableArgument { kind: &'static str, version: u16 },
    /// Index does not fit the bits reserved for it in an argument word.
    IndexTooLarge(u32),
    /// A list is longer than a `u32` count can express.
    CountOverflow(usize),
    /// Bytes left over after the last record.
    TrailingBytes(usize),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io(err) => write!(f, "sdfd i/o error: {err}"),
            CodecError::Truncated { needed, remaining } => {
                write!(f, "sdfd data truncated: needed {needed} bytes, {remaining} left")
            }
            CodecError::BadMagic(magic) => write!(f, "not an sdfd file (magic {magic:02x?})"),
            CodecError::UnsupportedVersion { found, supported } => {
                write!(f, "sdfd version {found} is newer than supported version {supported}")
            }
            CodecError::UnknownPrimitiveKind(tag) => write!(f, "unknown primitive kind {tag}"),
            CodecError::UnknownOperationKind(tag) => write!(f, "unknown operation kind {tag}"),
            CodecError::UnknownArgumentKind(kind) => write!(f, "unknown argument kind {kind}"),
            CodecError::UnrepresentableArgument { kind, version } => {
                write!(f, "{kind} arguments cannot be encoded in sdfd version {version}")
            }
            CodecError::IndexTooLarge(index) => write!(f, "argument index {index} too large to encode"),
            CodecError::CountOverflow(len) => write!(f, "list of {len} items too long to encode"),
            CodecError::TrailingBytes(n) => write!(f, "{n} unexpected bytes after sdfd data"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(err: io::Error) -> Self {
        CodecError::Io(err)
    }
}
