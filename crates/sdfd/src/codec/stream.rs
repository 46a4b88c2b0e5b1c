use std::io::Write;

use crate::error::CodecError;

/// Fixed-width scalar with a little-endian wire form.
pub(crate) trait Scalar: bytemuck::Pod {
    fn to_le(self) -> Self;
    fn from_le(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn to_le(self) -> Self { <$t>::to_le(self) }
            #[inline]
            fn from_le(self) -> Self { <$t>::from_le(self) }
        }
    )*};
}

impl_scalar_int!(u16, u32);

impl Scalar for f32 {
    #[inline]
    fn to_le(self) -> Self {
        f32::from_bits(self.to_bits().to_le())
    }
    #[inline]
    fn from_le(self) -> Self {
        f32::from_bits(u32::from_le(self.to_bits()))
    }
}

/// One direction of the binary layout.
///
/// The layout code calls the same methods whether it is reading or writing:
/// a reader fills the passed buffers, a writer emits them.
pub(crate) trait Stream {
    fn is_reading(&self) -> bool;

    /// Reads into or writes from `data`, all or nothing.
    fn bytes(&mut self, data: &mut [u8]) -> Result<(), CodecError>;

    /// Bytes left to read; `None` for writers.
    fn remaining(&self) -> Option<usize>;

    fn scalar<T: Scalar>(&mut self, value: &mut T) -> Result<(), CodecError> {
        if self.is_reading() {
            let mut raw = T::zeroed();
            self.bytes(bytemuck::bytes_of_mut(&mut raw))?;
            *value = raw.from_le();
        } else {
            let mut raw = value.to_le();
            self.bytes(bytemuck::bytes_of_mut(&mut raw))?;
        }
        Ok(())
    }
}

/// Bounds-checked cursor over an in-memory buffer.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline]
    pub(crate) fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl Stream for Reader<'_> {
    #[inline]
    fn is_reading(&self) -> bool {
        true
    }

    fn bytes(&mut self, data: &mut [u8]) -> Result<(), CodecError> {
        let remaining = self.remaining_len();
        if data.len() > remaining {
            return Err(CodecError::Truncated { needed: data.len(), remaining });
        }
        data.copy_from_slice(&self.data[self.pos..self.pos + data.len()]);
        self.pos += data.len();
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        Some(self.remaining_len())
    }
}

/// Sink over any `Write`, counting bytes emitted.
#[derive(Debug)]
pub(crate) struct Writer<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> Writer<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    #[inline]
    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write> Stream for Writer<W> {
    #[inline]
    fn is_reading(&self) -> bool {
        false
    }

    fn bytes(&mut self, data: &mut [u8]) -> Result<(), CodecError> {
        self.inner.write_all(data)?;
        self.written += data.len();
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        None
    }
}
