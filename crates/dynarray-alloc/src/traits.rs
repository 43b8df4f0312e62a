//! The allocation capability trait and element-count helpers.
//!
//! Declares the `unsafe` trait and the `unsafe` release helper, so this
//! module opts in to `unsafe`.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::error::AllocError;

/// A source of raw storage for containers.
///
/// Containers hold an allocator by value, clone it alongside their
/// buffer, and return every block through the allocator (or a clone of
/// it) that produced it. Implementations may be stateless, like
/// [`HeapAlloc`](crate::HeapAlloc), or share state between clones, like
/// [`TrackingAlloc`](crate::TrackingAlloc).
///
/// # Safety
///
/// Implementors must guarantee that a block returned by
/// [`allocate`](Allocator::allocate) is valid for reads and writes of
/// `layout.size()` bytes, is aligned to `layout.align()`, and does not
/// overlap any other live block. A block must remain valid until it is
/// passed to [`deallocate`](Allocator::deallocate) on this allocator or
/// any of its clones. Zero-sized layouts must succeed.
pub unsafe trait Allocator: Clone {
    /// Obtain a block fit for `layout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Release a block previously obtained from [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `allocate` on this allocator or a
    /// clone of it, called with the same `layout`, and must not have been
    /// released already.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: Allocator> Allocator for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded caller contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

/// Layout of `count` contiguous values of `T`.
///
/// Returns [`AllocError::CapacityOverflow`] if the total size would
/// exceed `isize::MAX` bytes.
pub fn array_layout<T>(count: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(count).map_err(|_| AllocError::CapacityOverflow { requested: count })
}

/// Allocate uninitialized storage for `count` values of `T`.
pub fn allocate_array<T, A: Allocator>(alloc: &A, count: usize) -> Result<NonNull<T>, AllocError> {
    let layout = array_layout::<T>(count)?;
    alloc.allocate(layout).map(NonNull::cast)
}

/// Release storage obtained from [`allocate_array`].
///
/// # Safety
///
/// `ptr` must come from `allocate_array::<T, _>(alloc, count)` on `alloc`
/// or a clone of it, with the same `count`, and must not have been
/// released already. Any values stored in the block are not dropped.
pub unsafe fn deallocate_array<T, A: Allocator>(alloc: &A, ptr: NonNull<T>, count: usize) {
    // SAFETY: the same layout was validated by `array_layout` when the
    // block was allocated, so size and alignment are well-formed.
    let layout = unsafe {
        Layout::from_size_align_unchecked(
            std::mem::size_of::<T>() * count,
            std::mem::align_of::<T>(),
        )
    };
    // SAFETY: caller guarantees `ptr` came from `alloc` with this layout.
    unsafe { alloc.deallocate(ptr.cast(), layout) }
}
