//! Owning storage for one allocator block and its live prefix.
//!
//! All pointer work in the crate lives here. [`RawBuf`] tracks the block,
//! its capacity and how many leading slots are initialized, and exposes
//! only safe operations that check those bounds. Every successful
//! allocation is paired with exactly one release: on reallocation, on
//! [`release`](RawBuf::release), or on drop.
//!
//! Each `unsafe` block carries a `// SAFETY:` comment naming the bound
//! it relies on.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use dynarray_alloc::{allocate_array, deallocate_array, AllocError, Allocator};

/// A block of `cap` slots whose first `len` are initialized.
pub(crate) struct RawBuf<T, A: Allocator> {
    /// `None` iff `cap == 0`.
    ptr: Option<NonNull<T>>,
    cap: usize,
    /// Slots `0..len` are live; `len <= cap`.
    len: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its block and values, like `Box<[T]>`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out shared access to the block.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}

impl<T, A: Allocator> RawBuf<T, A> {
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: None,
            cap: 0,
            len: 0,
            alloc,
            _owns: PhantomData,
        }
    }

    pub(crate) fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let mut buf = Self::new_in(alloc);
        buf.try_allocate(capacity)?;
        Ok(buf)
    }

    /// Base pointer of the block, or a dangling aligned pointer when
    /// nothing is allocated. Always valid for zero-length slices.
    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.map_or(NonNull::dangling().as_ptr(), NonNull::as_ptr)
    }

    #[inline]
    pub(crate) fn block(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized, and the pointer is
        // non-null and aligned even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.ptr(), self.len) }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr(), self.len) }
    }

    /// Allocate a fresh block of exactly `capacity` slots.
    ///
    /// Must only be called while nothing is allocated.
    pub(crate) fn try_allocate(&mut self, capacity: usize) -> Result<(), AllocError> {
        debug_assert!(self.ptr.is_none(), "block already allocated");
        if capacity == 0 {
            return Ok(());
        }
        self.ptr = Some(allocate_array::<T, A>(&self.alloc, capacity)?);
        self.cap = capacity;
        Ok(())
    }

    /// Replace the block with one of exactly `new_capacity` slots, moving
    /// the live values across in order.
    ///
    /// The new block is obtained before anything is moved; on error the
    /// current block and its contents are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity < len`.
    pub(crate) fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        let len = self.len;
        assert!(
            len <= new_capacity,
            "reallocation to {new_capacity} slots would drop {len} live values"
        );
        let fresh = if new_capacity == 0 {
            None
        } else {
            Some(allocate_array::<T, A>(&self.alloc, new_capacity)?)
        };
        if let (Some(src), Some(dst)) = (self.ptr, fresh) {
            // SAFETY: both blocks hold at least `len` slots, are distinct
            // allocations, and the first `len` source slots are initialized.
            // The source copies become dead once the old block is released.
            unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_ptr(), len) };
        }
        let old_capacity = self.cap;
        self.len = 0;
        self.release();
        self.ptr = fresh;
        self.cap = new_capacity;
        self.len = len;
        tracing::trace!(old_capacity, new_capacity, len, "reallocated buffer");
        Ok(())
    }

    /// Write `value` into the first dead slot.
    ///
    /// # Panics
    ///
    /// Panics if the block is full.
    #[track_caller]
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < self.cap, "push into a full buffer");
        // SAFETY: len < cap, so slot `len` is inside the block and dead.
        unsafe { self.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Move the last live value out, or `None` if there is none.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live prefix,
        // so its value is moved out exactly once.
        Some(unsafe { self.ptr().add(self.len).read() })
    }

    /// Shift `index..len` one slot right and write `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the block is full.
    #[track_caller]
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        assert!(index <= len, "insert at {index} past the live prefix of {len}");
        assert!(len < self.cap, "insert into a full buffer");
        // SAFETY: len < cap, so shifting `index..len` one slot right stays
        // inside the block; slot `index` is then dead and rewritten.
        unsafe {
            let slot = self.ptr().add(index);
            ptr::copy(slot, slot.add(1), len - index);
            slot.write(value);
        }
        self.len = len + 1;
    }

    /// Move the value at `index` out and shift the tail one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub(crate) fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(index < len, "remove at {index} outside the live prefix of {len}");
        // SAFETY: `index` is live; its value is moved out before the tail
        // `index + 1..len` is shifted over it, leaving slot `len - 1` dead.
        unsafe {
            let slot = self.ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drop every live value, then return the block to the allocator.
    pub(crate) fn release(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.ptr(), self.len);
        self.len = 0;
        // SAFETY: the first `len` slots were initialized; `len` is already
        // zero, so a panicking destructor cannot cause a second drop.
        unsafe { ptr::drop_in_place(live) };
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: `ptr` was allocated from `self.alloc` with `self.cap`
            // slots and `take()` guarantees it is released only once.
            unsafe { deallocate_array(&self.alloc, ptr, self.cap) };
        }
        self.cap = 0;
    }

    /// Hand the block and its live values to a by-value iterator.
    pub(crate) fn into_raw_iter(mut self) -> RawIter<T, A> {
        let end = self.len;
        // The iterator owns the values from here on; the buffer only keeps
        // the block.
        self.len = 0;
        RawIter {
            buf: self,
            start: 0,
            end,
        }
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

/// A block whose live values occupy `start..end` and are moved out from
/// either end.
pub(crate) struct RawIter<T, A: Allocator> {
    /// Holds the block only; its own live prefix is empty.
    buf: RawBuf<T, A>,
    start: usize,
    end: usize,
}

impl<T, A: Allocator> RawIter<T, A> {
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots `start..end` are initialized and not yet moved out.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.remaining()) }
    }

    pub(crate) fn next_front(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start < end`, the slot is live and is read exactly once.
        let value = unsafe { self.buf.ptr().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    pub(crate) fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: slot `end` is live and is read exactly once.
        Some(unsafe { self.buf.ptr().add(self.end).read() })
    }
}

impl<T, A: Allocator> Drop for RawIter<T, A> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            self.buf.ptr().wrapping_add(self.start),
            self.remaining(),
        );
        self.start = self.end;
        // SAFETY: slots `start..end` were the only ones still live; the
        // block itself is released when `buf` drops afterwards.
        unsafe { ptr::drop_in_place(remaining) };
    }
}
