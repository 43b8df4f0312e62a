//! By-value iteration.

use std::fmt;
use std::iter::FusedIterator;

use dynarray_alloc::{Allocator, HeapAlloc};

use crate::array::DynArray;
use crate::raw::RawIter;

/// An iterator that moves elements out of a [`DynArray`].
///
/// Owns the array's block; elements not yet yielded are dropped and the
/// block is returned to the allocator when the iterator is dropped.
pub struct IntoIter<T, A: Allocator = HeapAlloc> {
    raw: RawIter<T, A>,
}

impl<T, A: Allocator> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_slice()
    }

    /// The allocator that owns the block.
    pub fn allocator(&self) -> &A {
        self.raw.allocator()
    }
}

impl<T, A: Allocator> IntoIterator for DynArray<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        IntoIter {
            raw: self.into_raw().into_raw_iter(),
        }
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.raw.next_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.raw.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        self.raw.next_back()
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::DynArray;
    use dynarray_alloc::{HeapAlloc, TrackingAlloc};
    use dynarray_test_utils::DropCounter;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn yields_in_order_from_both_ends() {
        let a = DynArray::from([1, 2, 3, 4]);
        let mut it = a.into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.as_slice(), &[2, 3]);
        assert_eq!(it.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn partial_consumption_drops_rest_and_releases_block() {
        let drops = Rc::new(Cell::new(0));
        let alloc = TrackingAlloc::new(HeapAlloc);
        let mut a = DynArray::new_in(alloc.clone());
        for id in 0..5 {
            a.push_back(DropCounter::new(&drops, id));
        }
        let mut it = a.into_iter();
        drop(it.next());
        assert_eq!(drops.get(), 1);
        drop(it);
        assert_eq!(drops.get(), 5);
        assert_eq!(alloc.stats().live_blocks(), 0);
    }

    #[test]
    fn moves_non_copy_values() {
        let a = DynArray::from([String::from("a"), String::from("b")]);
        let joined: String = a.into_iter().collect();
        assert_eq!(joined, "ab");
    }

    #[test]
    fn empty_array_into_iter() {
        let a: DynArray<String> = DynArray::new();
        assert_eq!(a.into_iter().next(), None);
    }
}
