//! Borrowed views over variable and fixed length byte values.
//!
//! `ByteArray` and `FixedLenByteArray` are the values themselves: plain
//! borrows of some larger buffer that never own or copy the bytes.
//!
//! The descriptor types are what gets stored in typed buffers. A descriptor is
//! two machine words (offset and length) pointing into a separate heap buffer,
//! and is resolved back to a view against that heap.
use std::fmt;

use bytemuck::{Pod, Zeroable};
use pqcore_error::{OptionExt, PqcoreError, Result, ResultExt};

use crate::cast::ByteCast;

/// Size of a byte array view descriptor: an offset and a length, each one
/// machine word.
pub const VIEW_DESCRIPTOR_SIZE: usize = 2 * std::mem::size_of::<usize>();

const WORD: usize = std::mem::size_of::<usize>();

/// A variable length byte value borrowed from some backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ByteArray<'a> {
    data: &'a [u8],
}

impl<'a> ByteArray<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        ByteArray { data }
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Borrow the bytes as text without copying.
    ///
    /// The returned `&str` shares storage with the source buffer and is only
    /// valid as long as that buffer is borrowed.
    pub fn as_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.data).context("Byte array not valid utf8")
    }

    /// Borrow the bytes as text without copying or validating.
    ///
    /// # Safety
    ///
    /// Bytes must be valid utf8.
    pub unsafe fn as_str_unchecked(&self) -> &'a str {
        std::str::from_utf8_unchecked(self.data)
    }

    /// Copy the bytes into an owned string, replacing invalid utf8.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.data).into_owned()
    }
}

impl<'a> From<&'a [u8]> for ByteArray<'a> {
    fn from(value: &'a [u8]) -> Self {
        ByteArray::new(value)
    }
}

impl<'a> From<&'a str> for ByteArray<'a> {
    fn from(value: &'a str) -> Self {
        ByteArray::new(value.as_bytes())
    }
}

impl<'a> AsRef<[u8]> for ByteArray<'a> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> fmt::Display for ByteArray<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.data))
    }
}

/// A byte value whose length is fixed by the column's type length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FixedLenByteArray<'a> {
    data: &'a [u8],
}

impl<'a> FixedLenByteArray<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        FixedLenByteArray { data }
    }

    /// Split `buf` into consecutive values of `type_length` bytes.
    ///
    /// Trailing bytes not making up a full value are ignored.
    pub fn chunks(
        buf: &'a [u8],
        type_length: usize,
    ) -> Result<impl ExactSizeIterator<Item = FixedLenByteArray<'a>> + 'a> {
        if type_length == 0 {
            return Err(PqcoreError::new(
                "Fixed length byte array type length cannot be zero",
            ));
        }
        Ok(buf.chunks_exact(type_length).map(FixedLenByteArray::new))
    }

    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// See [`ByteArray::as_str`].
    pub fn as_str(&self) -> Result<&'a str> {
        std::str::from_utf8(self.data).context("Fixed length byte array not valid utf8")
    }

    /// # Safety
    ///
    /// Bytes must be valid utf8.
    pub unsafe fn as_str_unchecked(&self) -> &'a str {
        std::str::from_utf8_unchecked(self.data)
    }

    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.data).into_owned()
    }
}

impl<'a> From<&'a [u8]> for FixedLenByteArray<'a> {
    fn from(value: &'a [u8]) -> Self {
        FixedLenByteArray::new(value)
    }
}

impl<'a> AsRef<[u8]> for FixedLenByteArray<'a> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> fmt::Display for FixedLenByteArray<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.data))
    }
}

/// Offset and length words, each stored little endian.
///
/// Alignment is 1 so a slice of descriptors can be reinterpreted from any
/// byte buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
struct RawDescriptor([u8; VIEW_DESCRIPTOR_SIZE]);

impl RawDescriptor {
    fn new(offset: usize, len: usize) -> Self {
        let mut buf = [0; VIEW_DESCRIPTOR_SIZE];
        buf[..WORD].copy_from_slice(&offset.to_le_bytes());
        buf[WORD..].copy_from_slice(&len.to_le_bytes());
        RawDescriptor(buf)
    }

    fn word(&self, idx: usize) -> usize {
        let mut buf = [0; WORD];
        buf.copy_from_slice(&self.0[idx * WORD..(idx + 1) * WORD]);
        usize::from_le_bytes(buf)
    }

    fn slice<'a>(&self, heap: &'a [u8]) -> Result<&'a [u8]> {
        let offset = self.word(0);
        let len = self.word(1);
        let end = offset
            .checked_add(len)
            .required("Byte array descriptor overflows")?;

        heap.get(offset..end).ok_or_else(|| {
            PqcoreError::new(format!(
                "Byte array descriptor out of bounds, offset: {offset}, len: {len}, heap len: {}",
                heap.len()
            ))
        })
    }
}

/// In-buffer representation of a [`ByteArray`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct ByteArrayDescriptor(RawDescriptor);

const _: () = assert!(std::mem::size_of::<ByteArrayDescriptor>() == VIEW_DESCRIPTOR_SIZE);
const _: () = assert!(std::mem::align_of::<ByteArrayDescriptor>() == 1);

impl ByteArrayDescriptor {
    pub fn new(offset: usize, len: usize) -> Self {
        ByteArrayDescriptor(RawDescriptor::new(offset, len))
    }

    pub fn offset(&self) -> usize {
        self.0.word(0)
    }

    pub fn len(&self) -> usize {
        self.0.word(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value this descriptor points to in `heap`.
    pub fn resolve<'a>(&self, heap: &'a [u8]) -> Result<ByteArray<'a>> {
        Ok(ByteArray::new(self.0.slice(heap)?))
    }
}

impl ByteCast for ByteArrayDescriptor {}

impl fmt::Debug for ByteArrayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteArrayDescriptor")
            .field("offset", &self.offset())
            .field("len", &self.len())
            .finish()
    }
}

/// In-buffer representation of a [`FixedLenByteArray`].
///
/// Carries a length word to keep the same footprint as
/// [`ByteArrayDescriptor`], but the authoritative length is the column's
/// type length passed on resolve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct FixedLenByteArrayDescriptor(RawDescriptor);

const _: () = assert!(std::mem::size_of::<FixedLenByteArrayDescriptor>() == VIEW_DESCRIPTOR_SIZE);
const _: () = assert!(std::mem::align_of::<FixedLenByteArrayDescriptor>() == 1);

impl FixedLenByteArrayDescriptor {
    pub fn new(offset: usize, type_length: usize) -> Self {
        FixedLenByteArrayDescriptor(RawDescriptor::new(offset, type_length))
    }

    pub fn offset(&self) -> usize {
        self.0.word(0)
    }

    pub fn len(&self) -> usize {
        self.0.word(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value this descriptor points to in `heap`, checking that it
    /// has the column's type length.
    pub fn resolve<'a>(
        &self,
        heap: &'a [u8],
        type_length: usize,
    ) -> Result<FixedLenByteArray<'a>> {
        if self.len() != type_length {
            return Err(PqcoreError::new(format!(
                "Fixed length byte array descriptor has length {}, expected {type_length}",
                self.len()
            )));
        }
        Ok(FixedLenByteArray::new(self.0.slice(heap)?))
    }
}

impl ByteCast for FixedLenByteArrayDescriptor {}

impl fmt::Debug for FixedLenByteArrayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedLenByteArrayDescriptor")
            .field("offset", &self.offset())
            .field("len", &self.len())
            .finish()
    }
}
