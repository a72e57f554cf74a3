//! `make_span` constructors and non-member slicing.
//!
//! The slicing functions take any [`Contiguous`] source directly, so callers
//! can write `first(&vec, 2)` without building a span first.

use crate::source::{Contiguous, ContiguousMut};
#[cfg(feature = "extensions")]
use crate::extent;
use crate::{Fixed, Span, SpanMut};

/// Creates a span over any contiguous source.
///
/// The result always has a dynamic extent, even for arrays and fixed-extent
/// spans. Use [`make_fixed_span`] to keep an array's length in the type, or
/// pass a fixed-extent span along as it is.
///
/// ```
/// use contig_span::make_span;
///
/// let v = [1, 2, 3];
/// assert_eq!(make_span(&v), [1, 2, 3]);
/// assert_eq!(make_span(&v[1..]), [2, 3]);
/// assert_eq!(make_span("ok"), *b"ok");
/// ```
pub fn make_span<C>(container: &C) -> Span<'_, C::Item>
where
    C: Contiguous + ?Sized,
{
    Span::from_container(container)
}

/// Creates a mutable span over any mutable contiguous source.
pub fn make_span_mut<C>(container: &mut C) -> SpanMut<'_, C::Item>
where
    C: ContiguousMut + ?Sized,
{
    SpanMut::from_container(container)
}

/// Creates a fixed-extent span whose extent is the array length.
pub fn make_fixed_span<T, const N: usize>(array: &[T; N]) -> Span<'_, T, Fixed<N>> {
    Span::from_array(array)
}

/// Creates a fixed-extent mutable span whose extent is the array length.
pub fn make_fixed_span_mut<T, const N: usize>(array: &mut [T; N]) -> SpanMut<'_, T, Fixed<N>> {
    SpanMut::from_array(array)
}

/// Returns a span over the first `count` elements of `container`.
///
/// # Panics
///
/// Panics if `count` exceeds the container length.
#[cfg(feature = "extensions")]
#[track_caller]
pub fn first<C>(container: &C, count: usize) -> Span<'_, C::Item>
where
    C: Contiguous + ?Sized,
{
    make_span(container).first(count)
}

/// Returns a span over the last `count` elements of `container`.
///
/// # Panics
///
/// Panics if `count` exceeds the container length.
#[cfg(feature = "extensions")]
#[track_caller]
pub fn last<C>(container: &C, count: usize) -> Span<'_, C::Item>
where
    C: Contiguous + ?Sized,
{
    make_span(container).last(count)
}

/// Returns a span over `count` elements of `container` starting at `offset`,
/// or everything from `offset` when `count` is
/// [`DYNAMIC_EXTENT`](crate::DYNAMIC_EXTENT).
///
/// # Panics
///
/// Panics if the range does not lie within the container.
#[cfg(feature = "extensions")]
#[track_caller]
pub fn subspan<C>(container: &C, offset: usize, count: usize) -> Span<'_, C::Item>
where
    C: Contiguous + ?Sized,
{
    make_span(container).subspan(offset, count)
}

/// Returns a fixed-extent span over the first `COUNT` elements of `container`.
///
/// Sources with a compile-time length (arrays and fixed-extent spans) are
/// bounds-checked at compile time, everything else when called.
///
/// ```
/// use contig_span::{Fixed, Span, first_fixed};
///
/// let v = [1, 2, 3];
/// let head: Span<'_, i32, Fixed<2>> = first_fixed::<2, _>(&v);
/// assert_eq!(head, [1, 2]);
/// ```
///
/// ```compile_fail
/// use contig_span::first_fixed;
///
/// let v = [1, 2, 3];
/// let head = first_fixed::<4, _>(&v);
/// ```
#[cfg(feature = "extensions")]
#[track_caller]
pub fn first_fixed<const COUNT: usize, C>(container: &C) -> Span<'_, C::Item, Fixed<COUNT>>
where
    C: Contiguous + ?Sized,
{
    const { assert!(extent::fits(C::FIXED_LEN, 0, COUNT), "sub-view exceeds the source length") };
    make_span(container).first_fixed::<COUNT>()
}

/// Returns a fixed-extent span over the last `COUNT` elements of `container`.
///
/// ```compile_fail
/// use contig_span::{Fixed, Span, last_fixed};
///
/// let data = [1, 2];
/// let span = Span::<'_, i32, Fixed<2>>::from_array(&data);
/// let tail = last_fixed::<3, _>(&span);
/// ```
#[cfg(feature = "extensions")]
#[track_caller]
pub fn last_fixed<const COUNT: usize, C>(container: &C) -> Span<'_, C::Item, Fixed<COUNT>>
where
    C: Contiguous + ?Sized,
{
    const { assert!(extent::fits(C::FIXED_LEN, 0, COUNT), "sub-view exceeds the source length") };
    make_span(container).last_fixed::<COUNT>()
}

/// Returns a fixed-extent span over `COUNT` elements of `container` starting
/// at `OFFSET`.
///
/// ```compile_fail
/// use contig_span::subspan_fixed;
///
/// let v = [1, 2, 3];
/// let mid = subspan_fixed::<2, 2, _>(&v);
/// ```
#[cfg(feature = "extensions")]
#[track_caller]
pub fn subspan_fixed<const OFFSET: usize, const COUNT: usize, C>(
    container: &C,
) -> Span<'_, C::Item, Fixed<COUNT>>
where
    C: Contiguous + ?Sized,
{
    const {
        assert!(
            extent::fits(C::FIXED_LEN, OFFSET, COUNT),
            "sub-view exceeds the source length"
        )
    };
    make_span(container).subspan_fixed::<OFFSET, COUNT>()
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use super::*;

    // ==============
    // Constructors
    // ==============

    #[test]
    fn make_span_forgets_the_extent() {
        let arr = [1, 2, 3];
        let span = make_span(&arr);
        assert_eq!(size_of_val(&span), 2 * size_of::<usize>());
        assert_eq!(span, [1, 2, 3]);
        assert_eq!(make_span("ab"), *b"ab");
    }

    #[test]
    fn make_fixed_span_keeps_length_in_type() {
        let arr = [1u8, 2];
        let span = make_fixed_span(&arr);
        assert_eq!(size_of_val(&span), size_of::<usize>());
        assert_eq!(span, [1, 2]);
    }

    #[test]
    fn make_span_mut_writes_through() {
        let mut arr = [1, 2];
        let mut span = make_span_mut(&mut arr[..]);
        span[0] = 9;
        assert_eq!(arr, [9, 2]);

        let mut arr = [0u8; 1];
        let mut fixed = make_fixed_span_mut(&mut arr);
        *fixed.front_mut() = 1;
        assert_eq!(arr, [1]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn make_span_over_vec() {
        let mut v = alloc::vec![1, 2];
        assert_eq!(make_span(&v), [1, 2]);
        let mut span = make_span_mut(&mut v);
        span[1] = 20;
        assert_eq!(v, [1, 20]);
    }

    // ====================
    // Non-member slicing
    // ====================

    #[cfg(all(feature = "extensions", feature = "alloc"))]
    #[test]
    fn slicing_containers_directly() {
        use crate::DYNAMIC_EXTENT;

        let v = alloc::vec![10, 20, 30, 40];
        assert_eq!(first(&v, 2), [10, 20]);
        assert_eq!(last(&v, 1), [40]);
        assert_eq!(subspan(&v, 1, 2), [20, 30]);
        assert_eq!(subspan(&v, 1, DYNAMIC_EXTENT), [20, 30, 40]);
    }

    #[cfg(feature = "extensions")]
    #[test]
    fn slicing_arrays_and_strings() {
        use crate::DYNAMIC_EXTENT;

        let arr = [1, 2, 3];
        assert_eq!(last_fixed::<2, _>(&arr), [2, 3]);
        assert_eq!(subspan_fixed::<1, 1, _>(&arr), [2]);
        assert_eq!(first(b"hello", 2), *b"he");
        assert_eq!(subspan("hello", 3, DYNAMIC_EXTENT), *b"lo");
    }

    #[cfg(feature = "extensions")]
    #[test]
    fn fixed_slicing_of_fixed_spans() {
        let arr = [1, 2, 3, 4];
        let span = make_fixed_span(&arr);
        assert_eq!(first_fixed::<4, _>(&span), [1, 2, 3, 4]);
        assert_eq!(subspan_fixed::<3, 1, _>(&span), [4]);
        assert_eq!(last_fixed::<0, _>(&span).len(), 0);
    }

    #[cfg(feature = "extensions")]
    #[test]
    #[should_panic]
    fn fixed_slicing_of_short_slice_panics() {
        let arr = [1, 2, 3];
        let _ = first_fixed::<4, _>(&arr[..]);
    }
}
