//! Allocation accounting.
//!
//! [`TrackingAlloc`] wraps another allocator and counts every block that
//! passes through it. Clones share one set of counters, so a container
//! and all of its copies report into the same [`AllocStats`]. The
//! counters are not synchronized; a `TrackingAlloc` is `!Send`.
//!
//! Implementing [`Allocator`] is `unsafe`; this module opts in for that
//! impl and its forwarding `deallocate`.

#![allow(unsafe_code)]

use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::error::AllocError;
use crate::heap::HeapAlloc;
use crate::traits::Allocator;

/// A point-in-time snapshot of a [`TrackingAlloc`]'s counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Number of successful `allocate` calls.
    pub allocations: usize,
    /// Number of `deallocate` calls.
    pub deallocations: usize,
    /// Bytes handed out and not yet released.
    pub bytes_outstanding: usize,
    /// High-water mark of `bytes_outstanding`.
    pub peak_bytes: usize,
}

impl AllocStats {
    /// Blocks handed out and not yet released.
    pub fn live_blocks(&self) -> usize {
        self.allocations.saturating_sub(self.deallocations)
    }
}

/// Allocator wrapper that records allocation and release counts.
#[derive(Clone, Debug, Default)]
pub struct TrackingAlloc<A = HeapAlloc> {
    inner: A,
    stats: Rc<Cell<AllocStats>>,
}

impl<A> TrackingAlloc<A> {
    /// Wrap `inner` with fresh, zeroed counters.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            stats: Rc::new(Cell::new(AllocStats::default())),
        }
    }

    /// Current counter values.
    pub fn stats(&self) -> AllocStats {
        self.stats.get()
    }

    /// The wrapped allocator.
    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn update(&self, f: impl FnOnce(&mut AllocStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

unsafe impl<A: Allocator> Allocator for TrackingAlloc<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.inner.allocate(layout)?;
        self.update(|s| {
            s.allocations += 1;
            s.bytes_outstanding += layout.size();
            s.peak_bytes = s.peak_bytes.max(s.bytes_outstanding);
        });
        tracing::trace!(bytes = layout.size(), align = layout.align(), "allocate");
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded caller contract; blocks only come from `inner`.
        unsafe { self.inner.deallocate(ptr, layout) };
        self.update(|s| {
            s.deallocations += 1;
            s.bytes_outstanding = s.bytes_outstanding.saturating_sub(layout.size());
        });
        tracing::trace!(bytes = layout.size(), align = layout.align(), "deallocate");
    }
}
