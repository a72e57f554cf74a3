//! Static and dynamic extents.
//!
//! A span's extent is a type parameter. [`Fixed<N>`] is zero-sized: the length
//! lives in the type and costs nothing at run time. [`Dynamic`] stores the
//! length next to the pointer.
//!
//! ```text
//! Span<T, Fixed<N>>:  [ptr]          N known at compile time
//! Span<T, Dynamic>:   [ptr | len]    len known at run time
//! ```

use core::fmt;

use crate::error::ExtentMismatch;
use crate::source::SourceKind;

/// Sentinel for "extent determined at run time".
///
/// Used as the `count` argument of [`Span::subspan`](crate::Span::subspan) to
/// mean "everything from `offset` to the end", and as the value of
/// [`Span::EXTENT`](crate::Span::EXTENT) for dynamic spans.
pub const DYNAMIC_EXTENT: usize = usize::MAX;

mod private {
    pub trait Sealed {}
}

/// The length representation of a span.
///
/// This is a sealed trait - it is implemented only by [`Dynamic`] and [`Fixed`].
pub trait Extent: private::Sealed + Copy + Eq + fmt::Debug {
    /// The compile-time length, or `None` for dynamic extents.
    const STATIC: Option<usize>;

    /// Returns the number of elements.
    fn len(self) -> usize;

    /// Builds the extent for a run of `len` elements.
    ///
    /// Fails if the extent is fixed and `len` differs from it.
    fn try_from_len(len: usize) -> Result<Self, ExtentMismatch>;

    /// Builds the extent without checking a fixed length.
    ///
    /// # Safety
    ///
    /// For fixed extents `len` must equal the static length.
    #[doc(hidden)]
    unsafe fn from_len_unchecked(len: usize) -> Self;

    /// Builds the extent for a run of `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if the extent is fixed and `len` differs from it.
    #[track_caller]
    fn from_len(len: usize) -> Self {
        match Self::try_from_len(len) {
            Ok(extent) => extent,
            Err(err) => panic!("{err}"),
        }
    }
}

/// A length carried at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dynamic(usize);

impl private::Sealed for Dynamic {}

impl Extent for Dynamic {
    const STATIC: Option<usize> = None;

    #[inline(always)]
    fn len(self) -> usize {
        self.0
    }

    #[inline(always)]
    fn try_from_len(len: usize) -> Result<Self, ExtentMismatch> {
        Ok(Dynamic(len))
    }

    #[inline(always)]
    unsafe fn from_len_unchecked(len: usize) -> Self {
        Dynamic(len)
    }
}

/// A length fixed at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fixed<const N: usize>;

impl<const N: usize> private::Sealed for Fixed<N> {}

impl<const N: usize> Extent for Fixed<N> {
    const STATIC: Option<usize> = Some(N);

    #[inline(always)]
    fn len(self) -> usize {
        N
    }

    #[inline(always)]
    fn try_from_len(len: usize) -> Result<Self, ExtentMismatch> {
        if len == N {
            Ok(Fixed)
        } else {
            tracing::debug!(expected = N, actual = len, "fixed extent mismatch");
            Err(ExtentMismatch {
                expected: N,
                actual: len,
            })
        }
    }

    #[inline(always)]
    unsafe fn from_len_unchecked(len: usize) -> Self {
        debug_assert_eq!(len, N, "fixed extent mismatch");
        Fixed
    }
}

static_assertions::assert_eq_size!(Fixed<16>, ());
static_assertions::assert_eq_size!(Dynamic, usize);

/// Whether a view with extent `target` may be built from a source classified
/// as `kind` whose compile-time length is `source`.
///
/// Rules, in order:
///
/// 1. A dynamic target accepts every source.
/// 2. A source with a static length must match a fixed target exactly.
/// 3. A fixed target never accepts a dynamic view.
/// 4. A fixed target accepts a run-time-sized container; the length is
///    asserted when the span is built.
pub const fn accepts(target: Option<usize>, kind: SourceKind, source: Option<usize>) -> bool {
    match (target, source) {
        (None, _) => true,
        (Some(n), Some(m)) => n == m,
        (Some(_), None) => !matches!(kind, SourceKind::View),
    }
}

/// Whether a sub-view of `offset + count` elements fits in a source of
/// compile-time length `source`. Dynamic sources are checked at run time.
pub(crate) const fn fits(source: Option<usize>, offset: usize, count: usize) -> bool {
    match source {
        None => true,
        Some(n) => offset <= n && count <= n - offset,
    }
}

/// The `EXTENT` value for an extent type.
pub(crate) const fn extent_value(extent: Option<usize>) -> usize {
    match extent {
        Some(n) => n,
        None => DYNAMIC_EXTENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============
    // accepts() rules
    // ==============

    #[test]
    fn dynamic_target_accepts_everything() {
        assert!(accepts(None, SourceKind::View, None));
        assert!(accepts(None, SourceKind::View, Some(3)));
        assert!(accepts(None, SourceKind::FixedArray, Some(3)));
        assert!(accepts(None, SourceKind::Container, None));
    }

    #[test]
    fn fixed_target_requires_matching_static_length() {
        assert!(accepts(Some(4), SourceKind::FixedArray, Some(4)));
        assert!(!accepts(Some(4), SourceKind::FixedArray, Some(3)));
        assert!(accepts(Some(4), SourceKind::View, Some(4)));
        assert!(!accepts(Some(4), SourceKind::View, Some(5)));
    }

    #[test]
    fn fixed_target_rejects_dynamic_view() {
        assert!(!accepts(Some(4), SourceKind::View, None));
    }

    #[test]
    fn fixed_target_defers_container_check() {
        assert!(accepts(Some(4), SourceKind::Container, None));
    }

    // ==========
    // fits() rules
    // ==========

    #[test]
    fn fits_static_and_dynamic() {
        assert!(fits(Some(4), 1, 3));
        assert!(fits(Some(4), 4, 0));
        assert!(!fits(Some(4), 2, 3));
        assert!(!fits(Some(4), 5, 0));
        assert!(fits(None, 100, 100));
    }

    // ===============
    // Extent lengths
    // ===============

    #[test]
    fn fixed_try_from_len() {
        assert_eq!(Fixed::<3>::try_from_len(3), Ok(Fixed));
        assert_eq!(
            Fixed::<3>::try_from_len(2),
            Err(ExtentMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(Fixed::<3>.len(), 3);
    }

    #[test]
    fn dynamic_round_trips_len() {
        assert_eq!(Dynamic::from_len(7).len(), 7);
        assert_eq!(Dynamic::default().len(), 0);
    }

    #[test]
    #[should_panic(expected = "expected a span of exactly 2 elements, found 5")]
    fn fixed_from_len_panics_on_mismatch() {
        let _ = Fixed::<2>::from_len(5);
    }

    #[test]
    fn extent_values() {
        assert_eq!(extent_value(Fixed::<9>::STATIC), 9);
        assert_eq!(extent_value(Dynamic::STATIC), DYNAMIC_EXTENT);
    }
}
