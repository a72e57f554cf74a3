//! Non-owning views over contiguous memory, with static or dynamic extents.
//!
//! A [`Span`] is a pointer plus a length over elements someone else owns. The
//! length is either part of the type ([`Fixed<N>`]) or carried at run time
//! ([`Dynamic`]):
//!
//! ```text
//! Span<T, Fixed<3>>:  ptr ──▶ [T][T][T]      1 word
//! Span<T, Dynamic>:   ptr ──▶ [T][T]...[T]   2 words (ptr | len)
//!                     len
//! ```
//!
//! # Example
//!
//! ```
//! use contig_span::{Fixed, Span, as_bytes};
//!
//! let data = [10u32, 20, 30, 40];
//!
//! // Dynamic extent
//! let span = Span::new(&data);
//! assert_eq!(span.subspan(1, 2), [20, 30]);
//! assert_eq!(span.first(2), [10, 20]);
//! assert_eq!(span.last(1), [40]);
//!
//! // Fixed extent, checked at compile time
//! let fixed: Span<'_, u32, Fixed<4>> = Span::from(&data);
//! let middle: Span<'_, u32, Fixed<2>> = fixed.subspan_fixed::<1, 2>();
//! assert_eq!(middle, [20, 30]);
//!
//! // Raw bytes of the same memory
//! assert_eq!(as_bytes(span).len(), 16);
//! ```
//!
//! # Sources
//!
//! | Source | Constructor | Extent check |
//! |--------|-------------|--------------|
//! | pointer + count | [`Span::from_raw_parts`] (unsafe) | none |
//! | pointer range | [`Span::from_ptr_range`] (unsafe) | none |
//! | `[T; M]` | [`Span::from_array`] | compile time |
//! | `Vec<T>`, `[T]`, `str`, ... | [`Span::from_container`] | run time for fixed extents |
//! | another span | [`Span::from_span`] | compile time |
//!
//! Which rule applies is decided by [`Contiguous::KIND`]; see [`source`].
//!
//! # Contract
//!
//! Slicing and indexing follow the slice contract: out-of-range requests
//! panic. The `unsafe` `_unchecked` variants skip the checks. [`Span::at`] is
//! the reporting accessor and returns [`OutOfRange`].
//!
//! # Features
//!
//! - `extensions` (default): [`Span::at`], non-member slicing
//!   ([`first`], [`last`], [`subspan`], ...) and array-style access to fixed
//!   spans. Disable it for the minimal, standard-shaped API.
//! - `alloc` (default): `Vec`, `Box<[T]>` and `String` as sources.
//! - `smallvec`, `bumpalo`: `SmallVec` and `bumpalo::collections::Vec` as
//!   sources.
//!
//! # Gotchas
//!
//! - **Mutability is a type**: [`Span`] is read-only and `Copy`; [`SpanMut`] is
//!   unique like `&mut [T]`. Use [`SpanMut::reborrow`] to slice without giving
//!   the span away.
//! - **Element types must match exactly**: a `Span<u32>` cannot view `[u16]`.
//!   Dropping mutability is the only conversion.
//! - **Empty spans are not null**: [`Span::as_ptr`] is dangling for an empty span.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod bytes;
mod cmp;
mod error;
pub mod extent;
mod free;
pub mod source;
mod span;
mod span_mut;

pub use bytes::{as_bytes, as_bytes_fixed, as_writable_bytes, as_writable_bytes_fixed};
pub use error::{ExtentMismatch, OutOfRange};
pub use extent::{DYNAMIC_EXTENT, Dynamic, Extent, Fixed};
#[cfg(feature = "extensions")]
pub use free::{first, first_fixed, last, last_fixed, subspan, subspan_fixed};
pub use free::{make_fixed_span, make_fixed_span_mut, make_span, make_span_mut};
pub use source::{Contiguous, ContiguousMut, SourceKind};
pub use span::Span;
pub use span_mut::SpanMut;
