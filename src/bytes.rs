//! Reinterpreting spans as raw bytes.
//!
//! The byte view covers exactly the same memory as the source span: no copy,
//! no alignment or validity checks. Soundness comes from the element type:
//!
//! | Function | Element bound | Why |
//! |----------|---------------|-----|
//! | [`as_bytes`] | `IntoBytes + Immutable` | every byte is initialized, none sit behind an `UnsafeCell` |
//! | [`as_writable_bytes`] | `IntoBytes + FromBytes` | additionally, any byte pattern written back is a valid `T` |
//!
//! ```
//! use contig_span::{Span, SpanMut, as_bytes, as_writable_bytes};
//!
//! let words = [0x0102u16, 0x0304];
//! let bytes = as_bytes(Span::new(&words));
//! assert_eq!(bytes.len(), 4);
//!
//! let mut words = [0u16; 2];
//! as_writable_bytes(SpanMut::new(&mut words)).fill(0xff);
//! assert_eq!(words, [0xffff, 0xffff]);
//! ```
//!
//! Types that may hold padding or invalid bit patterns are rejected:
//!
//! ```compile_fail
//! use contig_span::{SpanMut, as_writable_bytes};
//!
//! let mut flags = [true, false];
//! let bytes = as_writable_bytes(SpanMut::new(&mut flags));
//! ```

use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::{Extent, Fixed, Span, SpanMut};

/// Views the memory of `span` as read-only bytes.
///
/// The result has `span.size_bytes()` elements.
pub fn as_bytes<'a, T, E>(span: Span<'a, T, E>) -> Span<'a, u8>
where
    T: IntoBytes + Immutable,
    E: Extent,
{
    Span::new(span.as_slice().as_bytes())
}

/// Views the memory of a fixed-extent span as a fixed-extent run of bytes.
///
/// `BYTES` must equal `N * size_of::<T>()`; the compiler checks it.
///
/// ```
/// use contig_span::{Fixed, Span, as_bytes_fixed};
///
/// let words = [1u32, 2];
/// let span = Span::<'_, u32, Fixed<2>>::from_array(&words);
/// let bytes: Span<'_, u8, Fixed<8>> = as_bytes_fixed::<_, 2, 8>(span);
/// assert_eq!(bytes.len(), 8);
/// ```
///
/// ```compile_fail
/// use contig_span::{Fixed, Span, as_bytes_fixed};
///
/// let words = [1u32, 2];
/// let span = Span::<'_, u32, Fixed<2>>::from_array(&words);
/// let bytes = as_bytes_fixed::<_, 2, 4>(span);
/// ```
pub fn as_bytes_fixed<'a, T, const N: usize, const BYTES: usize>(
    span: Span<'a, T, Fixed<N>>,
) -> Span<'a, u8, Fixed<BYTES>>
where
    T: IntoBytes + Immutable,
{
    const {
        assert!(
            BYTES == N * size_of::<T>(),
            "BYTES must equal the extent times the element size"
        )
    };
    // SAFETY: the byte slice has N * size_of::<T>() == BYTES elements.
    unsafe { Span::from_slice_unchecked(span.as_slice().as_bytes()) }
}

/// Views the memory of `span` as writable bytes.
///
/// Only mutable spans have a writable byte view.
///
/// ```compile_fail
/// use contig_span::{Span, as_writable_bytes};
///
/// let words = [1u32, 2];
/// let bytes = as_writable_bytes(Span::new(&words));
/// ```
pub fn as_writable_bytes<'a, T, E>(span: SpanMut<'a, T, E>) -> SpanMut<'a, u8>
where
    T: IntoBytes + FromBytes,
    E: Extent,
{
    SpanMut::new(span.into_slice().as_mut_bytes())
}

/// Views the memory of a fixed-extent mutable span as a fixed-extent run of
/// writable bytes. `BYTES` must equal `N * size_of::<T>()`.
pub fn as_writable_bytes_fixed<'a, T, const N: usize, const BYTES: usize>(
    span: SpanMut<'a, T, Fixed<N>>,
) -> SpanMut<'a, u8, Fixed<BYTES>>
where
    T: IntoBytes + FromBytes,
{
    const {
        assert!(
            BYTES == N * size_of::<T>(),
            "BYTES must equal the extent times the element size"
        )
    };
    SpanMut::from_slice(span.into_slice().as_mut_bytes())
}
