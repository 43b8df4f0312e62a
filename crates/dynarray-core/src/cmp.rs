//! Equality and ordering.
//!
//! Two arrays are equal when they have the same length and pairwise equal
//! elements. Capacity, allocator, and growth policy play no part.

use std::cmp::Ordering;

use dynarray_alloc::Allocator;

use crate::array::DynArray;

impl<T, U, A, B> PartialEq<DynArray<U, B>> for DynArray<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &DynArray<U, B>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, A: Allocator> Eq for DynArray<T, A> {}

impl<T, U, A: Allocator> PartialEq<[U]> for DynArray<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A: Allocator> PartialEq<&[U]> for DynArray<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, A: Allocator, const N: usize> PartialEq<[U; N]> for DynArray<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A: Allocator> PartialEq<Vec<U>> for DynArray<T, A>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd, A: Allocator> PartialOrd for DynArray<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator> Ord for DynArray<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use crate::DynArray;
    use dynarray_alloc::{HeapAlloc, TrackingAlloc};

    #[test]
    fn equal_regardless_of_capacity() {
        let a = DynArray::from([1, 2, 3]);
        let mut b = DynArray::with_capacity(64);
        b.extend([1, 2, 3]);
        assert_ne!(a.capacity(), b.capacity());
        assert_eq!(a, b);
    }

    #[test]
    fn length_mismatch_is_unequal() {
        let a = DynArray::from([1, 2]);
        let b = DynArray::from([1, 2, 3]);
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn element_mismatch_is_unequal() {
        assert_ne!(DynArray::from([1, 2, 3]), DynArray::from([1, 5, 3]));
    }

    #[test]
    fn empty_arrays_are_equal() {
        let a: DynArray<i32> = DynArray::new();
        let b: DynArray<i32> = DynArray::with_capacity(8);
        assert_eq!(a, b);
    }

    #[test]
    fn allocator_is_ignored() {
        let a = DynArray::from([1, 2]);
        let mut b = DynArray::new_in(TrackingAlloc::new(HeapAlloc));
        b.extend([1, 2]);
        assert!(a == b);
    }

    #[test]
    fn compares_with_slices_and_vecs() {
        let a = DynArray::from([1, 2]);
        assert_eq!(a, [1, 2]);
        assert_eq!(a, &[1, 2][..]);
        assert_eq!(a, vec![1, 2]);
        assert!(a == *[1, 2].as_slice());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = DynArray::from([1, 2, 3]);
        let b = DynArray::from([1, 3]);
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
    }
}
