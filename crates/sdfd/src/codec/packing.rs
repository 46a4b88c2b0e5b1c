//! Argument words: [`ArgumentIndex`] packed into one `u32`.
//!
//! | version | kind bits | index bits | kinds |
//! |---------|-----------|------------|-------|
//! | 0 | 1 (low) | 31 | object primitive, object operation |
//! | 1 | 2 (low) | 30 | + scene primitive |

use crate::error::CodecError;
use crate::scene::{ArgumentIndex, ArgumentKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct ArgumentPacking {
    version: u16,
    kind_bits: u32,
}

impl ArgumentPacking {
    pub(crate) fn for_version(version: u16) -> Self {
        let kind_bits = if version == 0 { 1 } else { 2 };
        Self { version, kind_bits }
    }

    #[inline]
    fn kind_mask(self) -> u32 {
        (1 << self.kind_bits) - 1
    }

    #[inline]
    fn max_index(self) -> u32 {
        u32::MAX >> self.kind_bits
    }

    pub(crate) fn pack(self, arg: ArgumentIndex) -> Result<u32, CodecError> {
        let kind = match arg.kind {
            ArgumentKind::ObjectPrimitive => 0,
            ArgumentKind::ObjectOperation => 1,
            ArgumentKind::ScenePrimitive if self.kind_bits >= 2 => 2,
            ArgumentKind::ScenePrimitive => {
                return Err(CodecError::UnrepresentableArgument {
                    kind: arg.kind.name(),
                    version: self.version,
                });
            }
        };
        if arg.value > self.max_index() {
            return Err(CodecError::IndexTooLarge(arg.value));
        }
        Ok(arg.value << self.kind_bits | kind)
    }

    pub(crate) fn unpack(self, word: u32) -> Result<ArgumentIndex, CodecError> {
        let kind = match word & self.kind_mask() {
            0 => ArgumentKind::ObjectPrimitive,
            1 => ArgumentKind::ObjectOperation,
            2 => ArgumentKind::ScenePrimitive,
            other => return Err(CodecError::UnknownArgumentKind(other)),
        };
        Ok(ArgumentIndex::new(kind, word >> self.kind_bits))
    }
}
