use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    marker::PhantomData,
    ops::Deref,
    ptr::NonNull,
    slice,
};

use crate::error::ExtentMismatch;
use crate::extent::{self, DYNAMIC_EXTENT, Dynamic, Extent, Fixed};
use crate::source::Contiguous;

/// A non-owning view over a contiguous run of `T`s.
///
/// `E` is the extent: [`Dynamic`] (the default) carries the length at run time,
/// [`Fixed<N>`] fixes it at compile time and makes the span a single pointer.
///
/// `Span` is the read-only view and is `Copy`. See [`SpanMut`](crate::SpanMut)
/// for the mutable counterpart.
///
/// # Example
///
/// ```
/// use contig_span::{Fixed, Span};
///
/// let data = [10, 20, 30, 40];
/// let span = Span::new(&data);
///
/// assert_eq!(span.subspan(1, 2), [20, 30]);
/// assert_eq!(span.first(2), [10, 20]);
/// assert_eq!(span.last(1), [40]);
///
/// let fixed: Span<'_, i32, Fixed<4>> = Span::from(&data);
/// assert_eq!(size_of_val(&fixed), size_of::<usize>());
/// ```
pub struct Span<'a, T, E: Extent = Dynamic> {
    ptr: NonNull<T>,
    extent: E,
    phantom: PhantomData<&'a [T]>,
}

static_assertions::assert_eq_size!(Span<'static, u64, Fixed<4>>, usize);
static_assertions::assert_eq_size!(Span<'static, u64>, [usize; 2]);
static_assertions::assert_eq_size!(Option<Span<'static, u8, Fixed<1>>>, usize);

impl<'a, T> Span<'a, T, Dynamic> {
    /// Creates a span over a slice.
    #[inline]
    pub fn new(slice: &'a [T]) -> Self {
        // SAFETY: the extent is dynamic, so any length is valid.
        unsafe { Self::from_slice_unchecked(slice) }
    }

    /// Creates an empty span.
    #[inline]
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Converts into a fixed-extent span, checking the length.
    ///
    /// ```
    /// use contig_span::{ExtentMismatch, Span};
    ///
    /// let span = Span::new(&[1, 2, 3][..]);
    /// assert!(span.try_into_fixed::<3>().is_ok());
    /// assert_eq!(
    ///     span.try_into_fixed::<2>(),
    ///     Err(ExtentMismatch { expected: 2, actual: 3 }),
    /// );
    /// ```
    pub fn try_into_fixed<const N: usize>(self) -> Result<Span<'a, T, Fixed<N>>, ExtentMismatch> {
        let extent = Fixed::<N>::try_from_len(self.len())?;
        Ok(Span {
            ptr: self.ptr,
            extent,
            phantom: PhantomData,
        })
    }
}

impl<'a, T, E: Extent> Span<'a, T, E> {
    /// The compile-time extent, or [`DYNAMIC_EXTENT`].
    pub const EXTENT: usize = extent::extent_value(E::STATIC);

    #[inline(always)]
    pub(crate) fn from_parts(ptr: NonNull<T>, extent: E) -> Self {
        Span {
            ptr,
            extent,
            phantom: PhantomData,
        }
    }

    /// # Safety
    ///
    /// For fixed extents `slice.len()` must equal the extent.
    #[inline(always)]
    pub(crate) unsafe fn from_slice_unchecked(slice: &'a [T]) -> Self {
        // SAFETY: forwarded to the caller.
        let extent = unsafe { E::from_len_unchecked(slice.len()) };
        Self::from_parts(NonNull::from(slice).cast(), extent)
    }

    /// Creates a span over a slice.
    ///
    /// # Panics
    ///
    /// Panics if the extent is fixed and the slice has a different length.
    #[track_caller]
    pub fn from_slice(slice: &'a [T]) -> Self {
        let extent = E::from_len(slice.len());
        Self::from_parts(NonNull::from(slice).cast(), extent)
    }

    /// Creates a span over a slice, or reports a fixed-extent mismatch.
    pub fn try_from_slice(slice: &'a [T]) -> Result<Self, ExtentMismatch> {
        let extent = E::try_from_len(slice.len())?;
        Ok(Self::from_parts(NonNull::from(slice).cast(), extent))
    }

    /// Creates a span from a pointer and an element count.
    ///
    /// A null `ptr` is accepted when `len` is zero.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `ptr` must be valid for reads of `len` consecutive
    /// `T`s for `'a`, following the rules of [`slice::from_raw_parts`]. For
    /// fixed extents `len` must equal the extent.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        let ptr = match NonNull::new(ptr.cast_mut()) {
            Some(ptr) => ptr,
            None => {
                debug_assert_eq!(len, 0, "null span pointer with a non-zero length");
                NonNull::dangling()
            }
        };
        // SAFETY: forwarded to the caller.
        let extent = unsafe { E::from_len_unchecked(len) };
        Self::from_parts(ptr, extent)
    }

    /// Creates a span covering `[first, last)`.
    ///
    /// # Safety
    ///
    /// Both pointers must lie in (or one past the end of) the same allocation
    /// with `first <= last`, and the range must satisfy the requirements of
    /// [`Span::from_raw_parts`].
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized: a pointer range cannot encode a count of
    /// zero-sized elements.
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *const T, last: *const T) -> Self {
        assert!(size_of::<T>() != 0, "pointer range of zero-sized elements");
        debug_assert!(first <= last, "span pointer range is reversed");
        // SAFETY: both pointers bound the same allocation and first <= last.
        let len = unsafe { last.offset_from(first) } as usize;
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(first, len) }
    }

    /// Creates a span over an array.
    ///
    /// Accepted only when the extent is dynamic or exactly `M`; anything else
    /// is rejected at compile time:
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let span = Span::<'_, i32, Fixed<3>>::from_array(&[1, 2]);
    /// ```
    ///
    /// The element type must match exactly; there is no widening view:
    ///
    /// ```compile_fail
    /// use contig_span::Span;
    ///
    /// let halves = [1u16, 2];
    /// let words: Span<'_, u32> = Span::from_array(&halves);
    /// ```
    pub fn from_array<const M: usize>(array: &'a [T; M]) -> Self {
        const {
            assert!(
                extent::accepts(E::STATIC, crate::SourceKind::FixedArray, Some(M)),
                "array length does not match the span extent"
            )
        };
        // SAFETY: the extent is dynamic or equal to M.
        unsafe { Self::from_slice_unchecked(array) }
    }

    /// Creates a span over any contiguous source.
    ///
    /// The extent check depends on how the source is classified
    /// (see [`source`](crate::source)). A fixed-extent span over a
    /// run-time-sized container checks the length when built:
    ///
    /// ```should_panic
    /// use contig_span::{Fixed, Span};
    ///
    /// let v = [1, 2, 3];
    /// let span = Span::<'_, i32, Fixed<2>>::from_container(&v[..]);
    /// ```
    ///
    /// A fixed-extent span over a dynamic view is rejected at compile time:
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2];
    /// let dynamic = Span::new(&data);
    /// let fixed = Span::<'_, i32, Fixed<2>>::from_container(&dynamic);
    /// ```
    ///
    /// The container's element type must be `T`:
    ///
    /// ```compile_fail
    /// use contig_span::Span;
    ///
    /// let halves: Vec<u16> = vec![1, 2];
    /// let words = Span::<u32>::from_container(&halves);
    /// ```
    #[track_caller]
    pub fn from_container<C>(container: &'a C) -> Self
    where
        C: Contiguous<Item = T> + ?Sized,
    {
        const {
            assert!(
                extent::accepts(E::STATIC, C::KIND, C::FIXED_LEN),
                "source extent does not match the span extent"
            )
        };
        Self::from_slice(container.as_contiguous())
    }

    /// Like [`Span::from_container`], reporting a run-time length mismatch
    /// instead of panicking.
    pub fn try_from_container<C>(container: &'a C) -> Result<Self, ExtentMismatch>
    where
        C: Contiguous<Item = T> + ?Sized,
    {
        const {
            assert!(
                extent::accepts(E::STATIC, C::KIND, C::FIXED_LEN),
                "source extent does not match the span extent"
            )
        };
        Self::try_from_slice(container.as_contiguous())
    }

    /// Creates a span from another span with a compatible extent.
    ///
    /// The target extent must be dynamic or equal to the source's fixed
    /// extent:
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2, 3];
    /// let three = Span::<'_, i32, Fixed<3>>::from_array(&data);
    /// let two = Span::<'_, i32, Fixed<2>>::from_span(three);
    /// ```
    pub fn from_span<F: Extent>(other: Span<'a, T, F>) -> Self {
        const {
            assert!(
                extent::accepts(E::STATIC, crate::SourceKind::View, F::STATIC),
                "source span extent does not match the span extent"
            )
        };
        // SAFETY: the extent is dynamic or equal to the source's fixed extent.
        unsafe { Self::from_slice_unchecked(other.as_slice()) }
    }

    /// Forgets the compile-time extent.
    #[inline]
    pub fn into_dynamic(self) -> Span<'a, T> {
        Span::from_parts(self.ptr, Dynamic::from_len(self.len()))
    }

    // --- Observers ---

    /// Returns the number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.extent.len()
    }

    /// Returns the size of the viewed memory in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * size_of::<T>()
    }

    /// Returns `true` if the span has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a pointer to the first element.
    ///
    /// Never null; dangling (but aligned) for an empty span.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns the viewed elements as a slice with the span's lifetime.
    #[inline(always)]
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: the span was built from `len` readable elements that live for 'a.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    // --- Element access ---

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        debug_assert!(index < self.len());
        // SAFETY: forwarded to the caller.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Returns the element at `index`, or an error naming the index and size.
    ///
    /// ```
    /// use contig_span::{OutOfRange, Span};
    ///
    /// let data = [1, 2, 3, 4];
    /// let span = Span::new(&data);
    /// assert_eq!(span.at(3), Ok(&4));
    /// assert_eq!(span.at(4), Err(OutOfRange { index: 4, len: 4 }));
    /// ```
    #[cfg(feature = "extensions")]
    pub fn at(&self, index: usize) -> Result<&'a T, crate::OutOfRange> {
        match self.as_slice().get(index) {
            Some(element) => Ok(element),
            None => {
                tracing::debug!(index, len = self.len(), "span index out of range");
                Err(crate::OutOfRange {
                    index,
                    len: self.len(),
                })
            }
        }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn front(&self) -> &'a T {
        &self.as_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn back(&self) -> &'a T {
        let slice = self.as_slice();
        &slice[slice.len().wrapping_sub(1)]
    }

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Iterates over the elements back to front.
    #[inline]
    pub fn iter_rev(&self) -> Rev<slice::Iter<'a, T>> {
        self.iter().rev()
    }

    // --- Sub-views ---

    /// Returns a span over the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn first(&self, count: usize) -> Span<'a, T> {
        Span::new(&self.as_slice()[..count])
    }

    /// Returns a span over the last `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn last(&self, count: usize) -> Span<'a, T> {
        let slice = self.as_slice();
        let start = tail_start(slice.len(), count);
        Span::new(&slice[start..])
    }

    /// Returns a span over `count` elements starting at `offset`.
    ///
    /// A `count` of [`DYNAMIC_EXTENT`] selects everything from `offset` to the
    /// end.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie within the span.
    #[track_caller]
    pub fn subspan(&self, offset: usize, count: usize) -> Span<'a, T> {
        let slice = self.as_slice();
        if count == DYNAMIC_EXTENT {
            Span::new(&slice[offset..])
        } else {
            Span::new(&slice[offset..][..count])
        }
    }

    /// Returns a span over everything from `offset` to the end.
    #[track_caller]
    pub fn subspan_from(&self, offset: usize) -> Span<'a, T> {
        self.subspan(offset, DYNAMIC_EXTENT)
    }

    /// Returns a span over `count` elements starting at `offset`, without
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// `offset + count` must not exceed `self.len()`.
    pub unsafe fn subspan_unchecked(&self, offset: usize, count: usize) -> Span<'a, T> {
        debug_assert!(offset <= self.len() && count <= self.len() - offset);
        // SAFETY: the range lies within the span, forwarded to the caller.
        unsafe { Span::from_raw_parts(self.ptr.as_ptr().add(offset), count) }
    }

    /// Divides the span into two at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[track_caller]
    pub fn split_at(&self, mid: usize) -> (Span<'a, T>, Span<'a, T>) {
        let (head, tail) = self.as_slice().split_at(mid);
        (Span::new(head), Span::new(tail))
    }

    /// Returns a fixed-extent span over the first `COUNT` elements.
    ///
    /// When the source extent is fixed the bound is checked at compile time:
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2, 3];
    /// let span = Span::<'_, i32, Fixed<3>>::from_array(&data);
    /// let too_many = span.first_fixed::<4>();
    /// ```
    #[track_caller]
    pub fn first_fixed<const COUNT: usize>(&self) -> Span<'a, T, Fixed<COUNT>> {
        const { assert!(extent::fits(E::STATIC, 0, COUNT), "sub-view exceeds the span extent") };
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { Span::from_slice_unchecked(&self.as_slice()[..COUNT]) }
    }

    /// Returns a fixed-extent span over the last `COUNT` elements.
    #[track_caller]
    pub fn last_fixed<const COUNT: usize>(&self) -> Span<'a, T, Fixed<COUNT>> {
        const { assert!(extent::fits(E::STATIC, 0, COUNT), "sub-view exceeds the span extent") };
        let slice = self.as_slice();
        let start = tail_start(slice.len(), COUNT);
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { Span::from_slice_unchecked(&slice[start..]) }
    }

    /// Returns a fixed-extent span over `COUNT` elements starting at `OFFSET`.
    #[track_caller]
    pub fn subspan_fixed<const OFFSET: usize, const COUNT: usize>(&self) -> Span<'a, T, Fixed<COUNT>> {
        const {
            assert!(
                extent::fits(E::STATIC, OFFSET, COUNT),
                "sub-view exceeds the span extent"
            )
        };
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { Span::from_slice_unchecked(&self.as_slice()[OFFSET..][..COUNT]) }
    }
}

impl<'a, T, const N: usize> Span<'a, T, Fixed<N>> {
    /// Returns a fixed-extent span over everything from `OFFSET` to the end.
    ///
    /// `REST` must equal `N - OFFSET`; the compiler checks it:
    ///
    /// ```
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2, 3, 4];
    /// let span = Span::<'_, i32, Fixed<4>>::from_array(&data);
    /// let tail: Span<'_, i32, Fixed<3>> = span.subspan_to_end::<1, 3>();
    /// assert_eq!(tail, [2, 3, 4]);
    /// ```
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2, 3, 4];
    /// let span = Span::<'_, i32, Fixed<4>>::from_array(&data);
    /// let tail = span.subspan_to_end::<1, 2>();
    /// ```
    pub fn subspan_to_end<const OFFSET: usize, const REST: usize>(&self) -> Span<'a, T, Fixed<REST>> {
        const {
            assert!(
                OFFSET <= N && REST == N - OFFSET,
                "REST must equal the extent minus OFFSET"
            )
        };
        // SAFETY: OFFSET + REST == N, so the range is in bounds and has REST elements.
        unsafe { Span::from_raw_parts(self.ptr.as_ptr().add(OFFSET), REST) }
    }

    /// Returns the elements as an array reference, for destructuring.
    ///
    /// ```
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2, 3];
    /// let span = Span::<'_, i32, Fixed<3>>::from_array(&data);
    /// let [a, b, c] = span.as_array();
    /// assert_eq!((*a, *b, *c), (1, 2, 3));
    /// ```
    #[cfg(feature = "extensions")]
    pub fn as_array(&self) -> &'a [T; N] {
        // SAFETY: a Fixed<N> span points at exactly N elements, and [T; N] has
        // the layout of N consecutive T.
        unsafe { self.ptr.cast::<[T; N]>().as_ref() }
    }

    /// Returns element `I`, checking the index at compile time.
    ///
    /// ```compile_fail
    /// use contig_span::{Fixed, Span};
    ///
    /// let data = [1, 2];
    /// let span = Span::<'_, i32, Fixed<2>>::from_array(&data);
    /// let oops = span.element::<2>();
    /// ```
    #[cfg(feature = "extensions")]
    pub fn element<const I: usize>(&self) -> &'a T {
        const { assert!(I < N, "element index out of range") };
        &self.as_array()[I]
    }
}

/// Start index of the trailing `count` elements of a run of `len`.
#[track_caller]
pub(crate) fn tail_start(len: usize, count: usize) -> usize {
    match len.checked_sub(count) {
        Some(start) => start,
        None => panic!("cannot take the last {count} elements of a span of size {len}"),
    }
}

impl<T, E: Extent> Clone for Span<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, E: Extent> Copy for Span<'_, T, E> {}

impl<T> Default for Span<'_, T, Dynamic> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Default for Span<'_, T, Fixed<0>> {
    fn default() -> Self {
        Self::from_array(&[])
    }
}

impl<T: fmt::Debug, E: Extent> fmt::Debug for Span<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, E: Extent> Hash for Span<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, E: Extent> Deref for Span<'_, T, E> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> AsRef<[T]> for Span<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, E: Extent> IntoIterator for Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E: Extent> IntoIterator for &Span<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// --- Conversions ---

impl<'a, T, C> From<&'a C> for Span<'a, T>
where
    C: Contiguous<Item = T> + ?Sized,
{
    fn from(container: &'a C) -> Self {
        Span::from_container(container)
    }
}

impl<'a, T, C> From<&'a mut C> for Span<'a, T>
where
    C: Contiguous<Item = T> + ?Sized,
{
    fn from(container: &'a mut C) -> Self {
        Span::from_container(&*container)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Span<'a, T, Fixed<N>> {
    fn from(array: &'a [T; N]) -> Self {
        Span::from_array(array)
    }
}

impl<'a, T, const N: usize> From<Span<'a, T, Fixed<N>>> for Span<'a, T> {
    fn from(span: Span<'a, T, Fixed<N>>) -> Self {
        span.into_dynamic()
    }
}

impl<'a, T, const N: usize> TryFrom<Span<'a, T>> for Span<'a, T, Fixed<N>> {
    type Error = ExtentMismatch;

    fn try_from(span: Span<'a, T>) -> Result<Self, ExtentMismatch> {
        span.try_into_fixed()
    }
}

// A span is a shared borrow of its elements.
unsafe impl<T: Sync, E: Extent> Send for Span<'_, T, E> {}
unsafe impl<T: Sync, E: Extent> Sync for Span<'_, T, E> {}
