//! Zero-copy reinterpretation between raw byte buffers and typed slices.
//!
//! Every element kind implementing [`ByteCast`] has an alignment of 1, so
//! casting is just a change of slice type over the same memory. Nothing is
//! copied or allocated, and writes through one view are visible through the
//! other once the borrow ends.
//!
//! If a buffer is not a multiple of the element size, the trailing bytes are
//! left out of the typed view. Callers that need to reject such buffers should
//! check the length up front.
use bytemuck::Pod;

/// Reinterpret raw bytes as a slice of `Self` and back.
pub trait ByteCast: Pod {
    /// Size in bytes of one element.
    const BYTE_SIZE: usize = std::mem::size_of::<Self>();

    /// Bytes needed to hold `n` elements.
    fn bytes_required(n: usize) -> usize {
        Self::BYTE_SIZE * n
    }

    /// View `buf` as `buf.len() / BYTE_SIZE` elements.
    fn cast_from_bytes(buf: &[u8]) -> &[Self] {
        let len = usable_len::<Self>(buf.len());
        bytemuck::cast_slice(&buf[..len])
    }

    fn cast_from_bytes_mut(buf: &mut [u8]) -> &mut [Self] {
        let len = usable_len::<Self>(buf.len());
        bytemuck::cast_slice_mut(&mut buf[..len])
    }

    /// View `values` as `values.len() * BYTE_SIZE` raw bytes.
    fn cast_to_bytes(values: &[Self]) -> &[u8] {
        bytemuck::cast_slice(values)
    }

    fn cast_to_bytes_mut(values: &mut [Self]) -> &mut [u8] {
        bytemuck::cast_slice_mut(values)
    }
}

/// Length of the prefix of a buffer of `len` bytes that holds whole elements.
fn usable_len<T: ByteCast>(len: usize) -> usize {
    let rem = len % T::BYTE_SIZE;
    if rem != 0 {
        tracing::trace!(
            len,
            dropped = rem,
            elem_size = T::BYTE_SIZE,
            "ignoring trailing bytes"
        );
    }
    len - rem
}
