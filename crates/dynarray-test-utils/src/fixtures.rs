//! Reusable allocator and element fixtures.

use std::alloc::Layout;
use std::cell::Cell;
use std::fmt;
use std::ptr::NonNull;
use std::rc::Rc;

use dynarray_alloc::{AllocError, Allocator, HeapAlloc};

/// Allocator that refuses any request exceeding its remaining byte budget.
///
/// Released blocks return their bytes to the budget. Clones share one
/// budget, mirroring how a container's copies share an allocator.
#[derive(Clone, Debug)]
pub struct BoundedAlloc {
    remaining: Rc<Cell<usize>>,
}

impl BoundedAlloc {
    pub fn new(budget_bytes: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(budget_bytes)),
        }
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }
}

#[allow(unsafe_code)]
unsafe impl Allocator for BoundedAlloc {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let remaining = self.remaining.get();
        if layout.size() > remaining {
            return Err(AllocError::Exhausted {
                requested: layout.size(),
                remaining,
            });
        }
        let ptr = HeapAlloc.allocate(layout)?;
        self.remaining.set(remaining - layout.size());
        Ok(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: every block was obtained from `HeapAlloc` with `layout`.
        unsafe { HeapAlloc.deallocate(ptr, layout) };
        self.remaining.set(self.remaining.get() + layout.size());
    }
}

/// An element that increments a shared counter when dropped.
///
/// Clones share the counter, so every copy's drop is counted.
/// Equality compares `id` only.
#[derive(Clone)]
pub struct DropCounter {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new(drops: &Rc<Cell<usize>>, id: usize) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DropCounter({})", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynarray_alloc::allocate_array;

    #[test]
    #[allow(unsafe_code)]
    fn budget_is_enforced_and_restored() {
        let alloc = BoundedAlloc::new(32);
        let a = allocate_array::<u64, _>(&alloc, 3).unwrap();
        assert_eq!(alloc.remaining(), 8);
        assert!(matches!(
            allocate_array::<u64, _>(&alloc, 2),
            Err(AllocError::Exhausted {
                requested: 16,
                remaining: 8
            })
        ));
        unsafe { dynarray_alloc::deallocate_array(&alloc, a, 3) };
        assert_eq!(alloc.remaining(), 32);
    }

    #[test]
    fn drop_counter_counts_clones() {
        let drops = Rc::new(Cell::new(0));
        let a = DropCounter::new(&drops, 1);
        let b = a.clone();
        assert_eq!(a, b);
        drop(a);
        drop(b);
        assert_eq!(drops.get(), 2);
    }
}
