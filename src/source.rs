//! Construction-source detection.
//!
//! Every type a span can be built from implements [`Contiguous`], which exposes
//! the elements as a slice and classifies the source at compile time. The
//! classification drives the extent check in
//! [`Span::from_container`](crate::Span::from_container):
//!
//! | Kind | Examples | Static length |
//! |------|----------|---------------|
//! | [`SourceKind::View`] | `Span`, `SpanMut` | the view's extent |
//! | [`SourceKind::FixedArray`] | `[T; N]` | `N` |
//! | [`SourceKind::Container`] | `[T]`, `Vec<T>`, `str`, ... | none |
//!
//! User containers opt in by implementing [`Contiguous`]; the defaults
//! classify them as run-time-sized containers.

use crate::{Extent, Span, SpanMut};

/// Where a span's elements come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Another span.
    View,
    /// An array whose length is part of its type.
    FixedArray,
    /// Anything else exposing a length and a pointer to contiguous elements.
    Container,
}

/// A source of contiguous, immutable elements.
///
/// # Example
///
/// ```
/// use contig_span::{Contiguous, Span};
///
/// struct Samples {
///     data: [i16; 4],
///     used: usize,
/// }
///
/// impl Contiguous for Samples {
///     type Item = i16;
///
///     fn as_contiguous(&self) -> &[i16] {
///         &self.data[..self.used]
///     }
/// }
///
/// let samples = Samples { data: [3, 1, 4, 1], used: 3 };
/// let span = Span::<i16>::from_container(&samples);
/// assert_eq!(span, [3, 1, 4]);
/// ```
pub trait Contiguous {
    /// The element type.
    type Item;

    /// How this source is classified.
    const KIND: SourceKind = SourceKind::Container;

    /// The length, when it is known at compile time.
    const FIXED_LEN: Option<usize> = None;

    /// Returns the elements.
    fn as_contiguous(&self) -> &[Self::Item];
}

/// A source of contiguous, mutable elements.
pub trait ContiguousMut: Contiguous {
    /// Returns the elements mutably.
    fn as_contiguous_mut(&mut self) -> &mut [Self::Item];
}

impl<T, const N: usize> Contiguous for [T; N] {
    type Item = T;
    const KIND: SourceKind = SourceKind::FixedArray;
    const FIXED_LEN: Option<usize> = Some(N);

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> ContiguousMut for [T; N] {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Contiguous for [T] {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousMut for [T] {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl Contiguous for str {
    type Item = u8;

    fn as_contiguous(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T, E: Extent> Contiguous for Span<'_, T, E> {
    type Item = T;
    const KIND: SourceKind = SourceKind::View;
    const FIXED_LEN: Option<usize> = E::STATIC;

    fn as_contiguous(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> Contiguous for SpanMut<'_, T, E> {
    type Item = T;
    const KIND: SourceKind = SourceKind::View;
    const FIXED_LEN: Option<usize> = E::STATIC;

    fn as_contiguous(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> ContiguousMut for SpanMut<'_, T, E> {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{Contiguous, ContiguousMut};

    impl<T> Contiguous for Vec<T> {
        type Item = T;

        fn as_contiguous(&self) -> &[T] {
            self
        }
    }

    impl<T> ContiguousMut for Vec<T> {
        fn as_contiguous_mut(&mut self) -> &mut [T] {
            self
        }
    }

    impl<T> Contiguous for Box<[T]> {
        type Item = T;

        fn as_contiguous(&self) -> &[T] {
            self
        }
    }

    impl<T> ContiguousMut for Box<[T]> {
        fn as_contiguous_mut(&mut self) -> &mut [T] {
            self
        }
    }

    impl Contiguous for String {
        type Item = u8;

        fn as_contiguous(&self) -> &[u8] {
            self.as_bytes()
        }
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Contiguous for smallvec::SmallVec<A> {
    type Item = A::Item;

    fn as_contiguous(&self) -> &[A::Item] {
        self
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> ContiguousMut for smallvec::SmallVec<A> {
    fn as_contiguous_mut(&mut self) -> &mut [A::Item] {
        self
    }
}

#[cfg(feature = "bumpalo")]
impl<T> Contiguous for bumpalo::collections::Vec<'_, T> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

#[cfg(feature = "bumpalo")]
impl<T> ContiguousMut for bumpalo::collections::Vec<'_, T> {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}
