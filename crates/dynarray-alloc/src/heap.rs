//! The default allocation strategy: the process-wide global allocator.
//!
//! Calls into `std::alloc` directly, so this module opts in to `unsafe`.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::error::AllocError;
use crate::traits::Allocator;

/// Stateless allocator backed by [`std::alloc::alloc`] / [`std::alloc::dealloc`].
///
/// This is the default allocator of every container in the workspace.
/// Zero-sized requests never reach the global allocator: they return a
/// dangling, well-aligned pointer and releasing them is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeapAlloc;

unsafe impl Allocator for HeapAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Ok(dangling(layout));
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { std::alloc::alloc(layout) };
        NonNull::new(raw).ok_or_else(|| {
            tracing::debug!(bytes = layout.size(), align = layout.align(), "heap allocation failed");
            AllocError::OutOfMemory {
                bytes: layout.size(),
                align: layout.align(),
            }
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() != 0 {
            // SAFETY: caller guarantees `ptr` came from `allocate` with `layout`,
            // and non-zero-sized blocks come from the global allocator.
            unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) }
        }
    }
}

/// A non-null pointer aligned to `layout.align()` that owns no memory.
pub(crate) fn dangling(layout: Layout) -> NonNull<u8> {
    // SAFETY: alignments are non-zero powers of two.
    unsafe { NonNull::new_unchecked(std::ptr::without_provenance_mut(layout.align())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_aligned_block() {
        let layout = Layout::from_size_align(64, 16).unwrap();
        let ptr = HeapAlloc.allocate(layout).unwrap();
        assert_eq!(ptr.as_ptr() as usize % 16, 0);
        unsafe {
            ptr.as_ptr().write_bytes(0xAB, 64);
            assert_eq!(*ptr.as_ptr().add(63), 0xAB);
            HeapAlloc.deallocate(ptr, layout);
        }
    }

    #[test]
    fn zero_sized_requests_are_dangling() {
        let layout = Layout::from_size_align(0, 8).unwrap();
        let ptr = HeapAlloc.allocate(layout).unwrap();
        assert_eq!(ptr.as_ptr() as usize, 8);
        // Releasing a zero-sized block must not touch the global allocator.
        unsafe { HeapAlloc.deallocate(ptr, layout) };
    }
}
