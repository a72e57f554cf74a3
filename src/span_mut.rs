use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::Rev,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    ptr::NonNull,
    slice,
};

use crate::error::ExtentMismatch;
use crate::extent::{self, DYNAMIC_EXTENT, Dynamic, Extent, Fixed};
use crate::source::{ContiguousMut, SourceKind};
use crate::span::{Span, tail_start};

/// A non-owning, mutable view over a contiguous run of `T`s.
///
/// The mutable counterpart of [`Span`]. Like `&mut [T]` it is not `Copy`:
/// sub-view methods consume the span, and [`SpanMut::reborrow`] produces a
/// shorter-lived copy when the original is still needed.
///
/// # Example
///
/// ```
/// use contig_span::SpanMut;
///
/// let mut data = [1, 2, 3, 4];
/// let mut span = SpanMut::new(&mut data);
/// span.reborrow().last(2).iter_mut().for_each(|x| *x *= 10);
/// span[0] = 0;
/// assert_eq!(data, [0, 2, 30, 40]);
/// ```
pub struct SpanMut<'a, T, E: Extent = Dynamic> {
    ptr: NonNull<T>,
    extent: E,
    phantom: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(SpanMut<'static, u64, Fixed<4>>, usize);
static_assertions::assert_eq_size!(SpanMut<'static, u64>, [usize; 2]);

impl<'a, T> SpanMut<'a, T, Dynamic> {
    /// Creates a mutable span over a slice.
    ///
    /// Shared slices are rejected:
    ///
    /// ```compile_fail
    /// use contig_span::SpanMut;
    ///
    /// let data = [1, 2];
    /// let unique: SpanMut<'_, i32> = SpanMut::from(&data[..]);
    /// ```
    #[inline]
    pub fn new(slice: &'a mut [T]) -> Self {
        // SAFETY: the extent is dynamic, so any length is valid.
        unsafe { Self::from_slice_unchecked(slice) }
    }

    /// Creates an empty mutable span.
    #[inline]
    pub fn empty() -> Self {
        Self::new(&mut [])
    }

    /// Converts into a fixed-extent span, checking the length.
    pub fn try_into_fixed<const N: usize>(self) -> Result<SpanMut<'a, T, Fixed<N>>, ExtentMismatch> {
        let extent = Fixed::<N>::try_from_len(self.len())?;
        Ok(SpanMut {
            ptr: self.ptr,
            extent,
            phantom: PhantomData,
        })
    }
}

impl<'a, T, E: Extent> SpanMut<'a, T, E> {
    /// The compile-time extent, or [`DYNAMIC_EXTENT`].
    pub const EXTENT: usize = extent::extent_value(E::STATIC);

    #[inline(always)]
    fn from_parts(ptr: NonNull<T>, extent: E) -> Self {
        SpanMut {
            ptr,
            extent,
            phantom: PhantomData,
        }
    }

    /// # Safety
    ///
    /// For fixed extents `slice.len()` must equal the extent.
    #[inline(always)]
    unsafe fn from_slice_unchecked(slice: &'a mut [T]) -> Self {
        // SAFETY: forwarded to the caller.
        let extent = unsafe { E::from_len_unchecked(slice.len()) };
        Self::from_parts(NonNull::from(slice).cast(), extent)
    }

    /// Creates a mutable span over a slice.
    ///
    /// # Panics
    ///
    /// Panics if the extent is fixed and the slice has a different length.
    #[track_caller]
    pub fn from_slice(slice: &'a mut [T]) -> Self {
        let extent = E::from_len(slice.len());
        Self::from_parts(NonNull::from(slice).cast(), extent)
    }

    /// Creates a mutable span over a slice, or reports a fixed-extent mismatch.
    pub fn try_from_slice(slice: &'a mut [T]) -> Result<Self, ExtentMismatch> {
        let extent = E::try_from_len(slice.len())?;
        Ok(Self::from_parts(NonNull::from(slice).cast(), extent))
    }

    /// Creates a mutable span from a pointer and an element count.
    ///
    /// A null `ptr` is accepted when `len` is zero.
    ///
    /// # Safety
    ///
    /// Unless `len` is zero, `ptr` must be valid for reads and writes of `len`
    /// consecutive `T`s for `'a`, and nothing else may access that memory
    /// while the span lives, following the rules of
    /// [`slice::from_raw_parts_mut`]. For fixed extents `len` must equal the
    /// extent.
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        let ptr = match NonNull::new(ptr) {
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

    /// Creates a mutable span covering `[first, last)`.
    ///
    /// # Safety
    ///
    /// Both pointers must lie in (or one past the end of) the same allocation
    /// with `first <= last`, and the range must satisfy the requirements of
    /// [`SpanMut::from_raw_parts`].
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *mut T, last: *mut T) -> Self {
        assert!(size_of::<T>() != 0, "pointer range of zero-sized elements");
        debug_assert!(first <= last, "span pointer range is reversed");
        // SAFETY: both pointers bound the same allocation and first <= last.
        let len = unsafe { last.offset_from(first) } as usize;
        // SAFETY: forwarded to the caller.
        unsafe { Self::from_raw_parts(first, len) }
    }

    /// Creates a mutable span over an array.
    ///
    /// Accepted only when the extent is dynamic or exactly `M`.
    pub fn from_array<const M: usize>(array: &'a mut [T; M]) -> Self {
        const {
            assert!(
                extent::accepts(E::STATIC, SourceKind::FixedArray, Some(M)),
                "array length does not match the span extent"
            )
        };
        // SAFETY: the extent is dynamic or equal to M.
        unsafe { Self::from_slice_unchecked(array) }
    }

    /// Creates a mutable span over any mutable contiguous source.
    ///
    /// Follows the same extent rules as
    /// [`Span::from_container`](crate::Span::from_container). Read-only
    /// sources are rejected:
    ///
    /// ```compile_fail
    /// use contig_span::SpanMut;
    ///
    /// let mut text = String::from("abc");
    /// let span = SpanMut::<u8>::from_container(&mut text);
    /// ```
    ///
    /// A read-only span never becomes a mutable one:
    ///
    /// ```compile_fail
    /// use contig_span::{Span, SpanMut};
    ///
    /// let data = [1, 2];
    /// let mut shared = Span::new(&data);
    /// let unique = SpanMut::<i32>::from_container(&mut shared);
    /// ```
    #[track_caller]
    pub fn from_container<C>(container: &'a mut C) -> Self
    where
        C: ContiguousMut<Item = T> + ?Sized,
    {
        const {
            assert!(
                extent::accepts(E::STATIC, C::KIND, C::FIXED_LEN),
                "source extent does not match the span extent"
            )
        };
        Self::from_slice(container.as_contiguous_mut())
    }

    /// Like [`SpanMut::from_container`], reporting a run-time length mismatch
    /// instead of panicking.
    pub fn try_from_container<C>(container: &'a mut C) -> Result<Self, ExtentMismatch>
    where
        C: ContiguousMut<Item = T> + ?Sized,
    {
        const {
            assert!(
                extent::accepts(E::STATIC, C::KIND, C::FIXED_LEN),
                "source extent does not match the span extent"
            )
        };
        Self::try_from_slice(container.as_contiguous_mut())
    }

    /// Creates a mutable span from another one with a compatible extent.
    ///
    /// Only mutable spans are accepted:
    ///
    /// ```compile_fail
    /// use contig_span::{Span, SpanMut};
    ///
    /// let data = [1, 2];
    /// let unique = SpanMut::<'_, i32>::from_span(Span::new(&data));
    /// ```
    pub fn from_span<F: Extent>(other: SpanMut<'a, T, F>) -> Self {
        const {
            assert!(
                extent::accepts(E::STATIC, SourceKind::View, F::STATIC),
                "source span extent does not match the span extent"
            )
        };
        // SAFETY: the extent is dynamic or equal to the source's fixed extent.
        unsafe { Self::from_slice_unchecked(other.into_slice()) }
    }

    /// Forgets the compile-time extent.
    #[inline]
    pub fn into_dynamic(self) -> SpanMut<'a, T> {
        SpanMut::from_parts(self.ptr, Dynamic::from_len(self.len()))
    }

    /// Gives up write access.
    #[inline]
    pub fn into_span(self) -> Span<'a, T, E> {
        Span::from_parts(self.ptr, self.extent)
    }

    /// Returns a read-only view borrowing from this span.
    #[inline]
    pub fn as_span(&self) -> Span<'_, T, E> {
        Span::from_parts(self.ptr, self.extent)
    }

    /// Returns a shorter-lived mutable span over the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> SpanMut<'_, T, E> {
        SpanMut::from_parts(self.ptr, self.extent)
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
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to the first element.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns the viewed elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the span was built from `len` valid elements that outlive `self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len()) }
    }

    /// Returns the viewed elements as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the span holds unique access to `len` valid elements.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }

    /// Converts into a mutable slice with the span's lifetime.
    #[inline(always)]
    pub fn into_slice(self) -> &'a mut [T] {
        // SAFETY: the span holds unique access to `len` valid elements for 'a,
        // and is consumed here.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len()) }
    }

    // --- Element access ---

    /// Returns the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        // SAFETY: forwarded to the caller.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Returns the element at `index`, or an error naming the index and size.
    #[cfg(feature = "extensions")]
    pub fn at(&self, index: usize) -> Result<&T, crate::OutOfRange> {
        self.as_span().at(index)
    }

    /// Returns the element at `index` mutably, or an error naming the index
    /// and size.
    #[cfg(feature = "extensions")]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, crate::OutOfRange> {
        let len = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(element) => Ok(element),
            None => {
                tracing::debug!(index, len, "span index out of range");
                Err(crate::OutOfRange { index, len })
            }
        }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        &self.as_slice()[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.as_mut_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        let slice = self.as_slice();
        &slice[slice.len().wrapping_sub(1)]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the span is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        let slice = self.as_mut_slice();
        let last = slice.len().wrapping_sub(1);
        &mut slice[last]
    }

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over the elements back to front.
    #[inline]
    pub fn iter_rev(&self) -> Rev<slice::Iter<'_, T>> {
        self.iter().rev()
    }

    /// Iterates mutably over the elements front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // --- Sub-views ---

    /// Returns a mutable span over the first `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn first(self, count: usize) -> SpanMut<'a, T> {
        SpanMut::new(&mut self.into_slice()[..count])
    }

    /// Returns a mutable span over the last `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.len()`.
    #[track_caller]
    pub fn last(self, count: usize) -> SpanMut<'a, T> {
        let slice = self.into_slice();
        let start = tail_start(slice.len(), count);
        SpanMut::new(&mut slice[start..])
    }

    /// Returns a mutable span over `count` elements starting at `offset`.
    ///
    /// A `count` of [`DYNAMIC_EXTENT`] selects everything from `offset` to the
    /// end.
    ///
    /// # Panics
    ///
    /// Panics if the range does not lie within the span.
    #[track_caller]
    pub fn subspan(self, offset: usize, count: usize) -> SpanMut<'a, T> {
        let slice = self.into_slice();
        if count == DYNAMIC_EXTENT {
            SpanMut::new(&mut slice[offset..])
        } else {
            SpanMut::new(&mut slice[offset..][..count])
        }
    }

    /// Returns a mutable span over everything from `offset` to the end.
    #[track_caller]
    pub fn subspan_from(self, offset: usize) -> SpanMut<'a, T> {
        self.subspan(offset, DYNAMIC_EXTENT)
    }

    /// Returns a mutable span over `count` elements starting at `offset`,
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// `offset + count` must not exceed `self.len()`.
    pub unsafe fn subspan_unchecked(self, offset: usize, count: usize) -> SpanMut<'a, T> {
        debug_assert!(offset <= self.len() && count <= self.len() - offset);
        // SAFETY: the range lies within the span, forwarded to the caller.
        unsafe { SpanMut::from_raw_parts(self.ptr.as_ptr().add(offset), count) }
    }

    /// Divides the span into two disjoint mutable spans at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`.
    #[track_caller]
    pub fn split_at(self, mid: usize) -> (SpanMut<'a, T>, SpanMut<'a, T>) {
        let (head, tail) = self.into_slice().split_at_mut(mid);
        (SpanMut::new(head), SpanMut::new(tail))
    }

    /// Returns a fixed-extent mutable span over the first `COUNT` elements.
    #[track_caller]
    pub fn first_fixed<const COUNT: usize>(self) -> SpanMut<'a, T, Fixed<COUNT>> {
        const { assert!(extent::fits(E::STATIC, 0, COUNT), "sub-view exceeds the span extent") };
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { SpanMut::from_slice_unchecked(&mut self.into_slice()[..COUNT]) }
    }

    /// Returns a fixed-extent mutable span over the last `COUNT` elements.
    #[track_caller]
    pub fn last_fixed<const COUNT: usize>(self) -> SpanMut<'a, T, Fixed<COUNT>> {
        const { assert!(extent::fits(E::STATIC, 0, COUNT), "sub-view exceeds the span extent") };
        let slice = self.into_slice();
        let start = tail_start(slice.len(), COUNT);
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { SpanMut::from_slice_unchecked(&mut slice[start..]) }
    }

    /// Returns a fixed-extent mutable span over `COUNT` elements starting at
    /// `OFFSET`.
    #[track_caller]
    pub fn subspan_fixed<const OFFSET: usize, const COUNT: usize>(
        self,
    ) -> SpanMut<'a, T, Fixed<COUNT>> {
        const {
            assert!(
                extent::fits(E::STATIC, OFFSET, COUNT),
                "sub-view exceeds the span extent"
            )
        };
        // SAFETY: the slice has exactly COUNT elements.
        unsafe { SpanMut::from_slice_unchecked(&mut self.into_slice()[OFFSET..][..COUNT]) }
    }
}

impl<'a, T, const N: usize> SpanMut<'a, T, Fixed<N>> {
    /// Returns a fixed-extent mutable span over everything from `OFFSET` to
    /// the end. `REST` must equal `N - OFFSET`.
    pub fn subspan_to_end<const OFFSET: usize, const REST: usize>(
        self,
    ) -> SpanMut<'a, T, Fixed<REST>> {
        const {
            assert!(
                OFFSET <= N && REST == N - OFFSET,
                "REST must equal the extent minus OFFSET"
            )
        };
        // SAFETY: OFFSET + REST == N, so the range is in bounds and has REST elements.
        unsafe { SpanMut::from_raw_parts(self.ptr.as_ptr().add(OFFSET), REST) }
    }

    /// Returns the elements as a mutable array reference, for destructuring.
    #[cfg(feature = "extensions")]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        // SAFETY: a Fixed<N> span points at exactly N elements it uniquely
        // borrows, and [T; N] has the layout of N consecutive T.
        unsafe { self.ptr.cast::<[T; N]>().as_mut() }
    }

    /// Returns element `I` mutably, checking the index at compile time.
    #[cfg(feature = "extensions")]
    pub fn element_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "element index out of range") };
        &mut self.as_mut_array()[I]
    }
}

impl<T> Default for SpanMut<'_, T, Dynamic> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Default for SpanMut<'_, T, Fixed<0>> {
    fn default() -> Self {
        Self::from_array(&mut [])
    }
}

impl<T: fmt::Debug, E: Extent> fmt::Debug for SpanMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, E: Extent> Hash for SpanMut<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, E: Extent> Deref for SpanMut<'_, T, E> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> DerefMut for SpanMut<'_, T, E> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, E: Extent> AsRef<[T]> for SpanMut<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> AsMut<[T]> for SpanMut<'_, T, E> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, E: Extent> IntoIterator for SpanMut<'a, T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'s, T, E: Extent> IntoIterator for &'s SpanMut<'_, T, E> {
    type Item = &'s T;
    type IntoIter = slice::Iter<'s, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'s, T, E: Extent> IntoIterator for &'s mut SpanMut<'_, T, E> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- Conversions ---

impl<'a, T, C> From<&'a mut C> for SpanMut<'a, T>
where
    C: ContiguousMut<Item = T> + ?Sized,
{
    fn from(container: &'a mut C) -> Self {
        SpanMut::from_container(container)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for SpanMut<'a, T, Fixed<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        SpanMut::from_array(array)
    }
}

impl<'a, T, const N: usize> From<SpanMut<'a, T, Fixed<N>>> for SpanMut<'a, T> {
    fn from(span: SpanMut<'a, T, Fixed<N>>) -> Self {
        span.into_dynamic()
    }
}

impl<'a, T, E: Extent> From<SpanMut<'a, T, E>> for Span<'a, T, E> {
    fn from(span: SpanMut<'a, T, E>) -> Self {
        span.into_span()
    }
}

impl<'a, T, const N: usize> TryFrom<SpanMut<'a, T>> for SpanMut<'a, T, Fixed<N>> {
    type Error = ExtentMismatch;

    fn try_from(span: SpanMut<'a, T>) -> Result<Self, ExtentMismatch> {
        span.try_into_fixed()
    }
}

// A mutable span is a unique borrow of its elements.
unsafe impl<T: Send, E: Extent> Send for SpanMut<'_, T, E> {}
unsafe impl<T: Sync, E: Extent> Sync for SpanMut<'_, T, E> {}
