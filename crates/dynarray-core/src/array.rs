//! The [`DynArray`] container and its inherent API.

use std::alloc::{handle_alloc_error, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::NonNull;
use std::slice::{self, SliceIndex};

use dynarray_alloc::{AllocError, Allocator, HeapAlloc};

use crate::config::GrowthPolicy;
use crate::cursor::Cursor;
use crate::raw::RawBuf;

/// A growable, contiguous array whose storage comes from an injected
/// [`Allocator`].
///
/// # Invariants
///
/// - `len() <= capacity()` at all times.
/// - [`buffer()`](DynArray::buffer) is `Some` iff `capacity() > 0`.
/// - Slots `0..len()` hold live values; slots `len()..capacity()` are
///   uninitialized and never read.
/// - Every block obtained from the allocator is returned to it exactly
///   once, with the capacity it was allocated with.
///
/// # Growth
///
/// Appending or inserting into a full array asks the [`GrowthPolicy`] for
/// the next capacity (default: 1 from empty, then doubling), allocates
/// the new block, moves the live values across in order and releases the
/// old block. Capacity is only ever reduced by
/// [`shrink_to_fit`](DynArray::shrink_to_fit) and
/// [`assign`](DynArray::assign).
///
/// # Allocation failure
///
/// Infallible methods fail fast: a capacity that cannot be expressed as a
/// layout panics, and an allocator refusal goes to
/// [`std::alloc::handle_alloc_error`]. Use the `try_` variants to observe
/// [`AllocError`] instead; they leave the array untouched on error.
pub struct DynArray<T, A: Allocator = HeapAlloc> {
    buf: RawBuf<T, A>,
    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// Create an empty array with no allocation.
    pub const fn new() -> Self {
        Self::new_in(HeapAlloc)
    }

    /// Create an empty array with exactly `capacity` slots reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, HeapAlloc)
    }

    /// Create an empty array that grows according to `policy`.
    pub const fn with_policy(policy: GrowthPolicy) -> Self {
        Self::with_policy_in(policy, HeapAlloc)
    }

    /// Create an array of `len` default values, with capacity exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self::with_len_in(len, HeapAlloc)
    }

    /// Create an array of `len` copies of `value`, with capacity exactly `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(len, value, HeapAlloc)
    }
}

impl<T, A: Allocator> DynArray<T, A> {
    /// Create an empty array that will allocate from `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        Self::with_policy_in(GrowthPolicy::DEFAULT, alloc)
    }

    /// Create an empty array that allocates from `alloc` and grows
    /// according to `policy`.
    pub const fn with_policy_in(policy: GrowthPolicy, alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            policy,
        }
    }

    /// Create an empty array with exactly `capacity` slots from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        fail_fast(Self::try_with_capacity_in(capacity, alloc))
    }

    /// Fallible [`with_capacity_in`](DynArray::with_capacity_in).
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        Ok(Self {
            buf: RawBuf::try_with_capacity_in(capacity, alloc)?,
            policy: GrowthPolicy::DEFAULT,
        })
    }

    /// Create an array of `len` default values from `alloc`.
    pub fn with_len_in(len: usize, alloc: A) -> Self
    where
        T: Default,
    {
        let mut array = Self::with_capacity_in(len, alloc);
        for _ in 0..len {
            array.push_back(T::default());
        }
        array
    }

    /// Create an array of `len` copies of `value` from `alloc`.
    pub fn from_elem_in(len: usize, value: T, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity_in(len, alloc);
        array.push_repeated(len, value);
        array
    }

    // ── Observers ───────────────────────────────────────────────────

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The allocator backing this array.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// The growth policy applied when the array is full.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The owned block, or `None` when nothing is allocated.
    pub fn buffer(&self) -> Option<NonNull<T>> {
        self.buf.block()
    }

    /// Raw pointer to the first slot. Dangling (but aligned) when the
    /// capacity is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// The first element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable access to the first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// The last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable access to the last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Cursor positioned at the first element.
    ///
    /// The cursor views the buffer as it is now. It borrows the array,
    /// so any reallocating or shifting call has to wait until the cursor
    /// is gone; re-obtain cursors after mutating.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor positioned one past the last element.
    ///
    /// Same invalidation rules as [`begin`](DynArray::begin).
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len())
    }

    // ── Capacity ────────────────────────────────────────────────────

    /// Ensure the capacity is at least `new_capacity`.
    ///
    /// `new_capacity` is a total, not an increment. If it is not larger
    /// than the current capacity this does nothing; otherwise the block
    /// is replaced by one of exactly `new_capacity` slots. Never shrinks.
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) {
        fail_fast(self.try_reserve(new_capacity));
    }

    /// Fallible [`reserve`](DynArray::reserve).
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.buf.try_reallocate(new_capacity)
    }

    /// Reallocate to exactly `len()` slots. An empty array releases its
    /// block entirely.
    #[track_caller]
    pub fn shrink_to_fit(&mut self) {
        let len = self.len();
        if self.capacity() == len {
            return;
        }
        fail_fast(self.buf.try_reallocate(len));
    }

    fn try_grow_one(&mut self) -> Result<(), AllocError> {
        let current = self.capacity();
        let new_capacity = self
            .policy
            .next_capacity(current)
            .ok_or(AllocError::CapacityOverflow { requested: current })?;
        self.buf.try_reallocate(new_capacity)
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Append `value`, growing first if the array is full.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        fail_fast(self.try_push_back(value));
    }

    /// Fallible [`push_back`](DynArray::push_back).
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        if self.len() == self.capacity() {
            self.try_grow_one()?;
        }
        self.buf.push(value);
        Ok(())
    }

    /// Remove and return the last element, or `None` if empty.
    ///
    /// The capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Insert `value` at `index`, shifting everything after it one slot
    /// to the right. The length grows by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        fail_fast(self.try_insert(index, value));
    }

    /// Fallible [`insert`](DynArray::insert).
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), AllocError> {
        let len = self.len();
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            self.try_grow_one()?;
        }
        self.buf.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it one slot to the left. The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(index < len, "erase index (is {index}) should be < len (is {len})");
        self.buf.remove(index)
    }

    /// Resize to `new_len`, removing from the back or appending
    /// `T::default()` values as needed.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resize to `new_len`, removing from the back or appending values
    /// produced by `f` as needed. Growth follows the growth policy.
    #[track_caller]
    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        while self.len() > new_len {
            self.pop_back();
        }
        while self.len() < new_len {
            self.push_back(f());
        }
    }

    /// Replace the contents with `count` copies of `value`.
    ///
    /// The current block is released and a new one of exactly `count`
    /// slots is allocated.
    #[track_caller]
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.clear();
        self.buf.release();
        fail_fast(self.buf.try_allocate(count));
        self.push_repeated(count, value);
    }

    /// Remove every element, back to front. The capacity is unchanged.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    /// Move the contents out, leaving this array empty with no
    /// allocation but the same allocator and policy.
    pub fn take(&mut self) -> Self {
        let empty = Self::with_policy_in(self.policy, self.buf.allocator().clone());
        mem::replace(self, empty)
    }

    /// Exchange contents, capacity, allocator, and policy with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Append `count` values into already reserved slots, cloning all but
    /// the last.
    fn push_repeated(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }
        for _ in 1..count {
            self.push_back(value.clone());
        }
        self.push_back(value);
    }

    /// Give up the buffer, live values included.
    pub(crate) fn into_raw(self) -> RawBuf<T, A> {
        self.buf
    }
}

/// Abort the current operation on allocation failure.
#[cold]
#[track_caller]
fn alloc_failure(err: AllocError) -> ! {
    tracing::error!(%err, "allocation failed");
    match err {
        AllocError::CapacityOverflow { .. } => panic!("{err}"),
        AllocError::OutOfMemory { bytes, align } => {
            handle_alloc_error(Layout::from_size_align(bytes, align).unwrap_or(Layout::new::<u8>()))
        }
        AllocError::Exhausted { requested, .. } => {
            handle_alloc_error(Layout::from_size_align(requested, 1).unwrap_or(Layout::new::<u8>()))
        }
    }
}

#[inline]
#[track_caller]
fn fail_fast<R>(result: Result<R, AllocError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => alloc_failure(err),
    }
}

impl<T, A: Allocator + Default> Default for DynArray<T, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<T: Clone, A: Allocator> Clone for DynArray<T, A> {
    /// Copies into a block of the source's *capacity*, not just its length.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_in(self.capacity(), self.buf.allocator().clone());
        copy.policy = self.policy;
        for value in self.iter() {
            copy.push_back(value.clone());
        }
        copy
    }

    /// Releases the current block and reallocates to the source's capacity.
    /// The destination keeps its own allocator.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.buf.release();
        fail_fast(self.buf.try_allocate(source.capacity()));
        self.policy = source.policy;
        for value in source.iter() {
            self.push_back(value.clone());
        }
    }
}

impl<T, A: Allocator> Deref for DynArray<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for DynArray<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> Index<I> for DynArray<T, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>, A: Allocator> IndexMut<I> for DynArray<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, A: Allocator> AsRef<[T]> for DynArray<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for DynArray<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Borrow<[T]> for DynArray<T, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> BorrowMut<[T]> for DynArray<T, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for DynArray<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash, A: Allocator> Hash for DynArray<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T, A: Allocator> Extend<T> for DynArray<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for DynArray<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        array.extend(iter);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    /// Allocates exactly `N` slots.
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for value in values {
            array.push_back(value);
        }
        array
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    /// Allocates exactly `values.len()` slots.
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len());
        for value in values {
            array.push_back(value.clone());
        }
        array
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a DynArray<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut DynArray<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
