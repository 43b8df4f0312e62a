//! Integration test: growth edge cases.
//!
//! Guards two contracts that are easy to get wrong: inserting must grow
//! the length by one, and an array with zero capacity must still be able
//! to grow.

use dynarray_core::{DynArray, GrowthPolicy};

#[test]
fn insert_persists_length_increment() {
    let mut v: DynArray<i32> = DynArray::new();
    for i in 0..10 {
        v.insert(0, i);
        assert_eq!(v.len(), (i + 1) as usize);
    }
    assert_eq!(v, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn insert_then_push_keeps_both() {
    let mut v = DynArray::from([1, 3]);
    v.insert(1, 2);
    v.push_back(4);
    assert_eq!(v, [1, 2, 3, 4]);
}

#[test]
fn push_into_zero_capacity_grows() {
    let mut v: DynArray<u64> = DynArray::with_capacity(0);
    assert_eq!(v.capacity(), 0);
    v.push_back(1);
    assert_eq!(v.capacity(), GrowthPolicy::DEFAULT_BOOTSTRAP_CAPACITY);
    assert_eq!(v, [1]);
}

#[test]
fn push_after_shrink_to_empty_grows() {
    let mut v = DynArray::from([1, 2, 3]);
    v.clear();
    v.shrink_to_fit();
    assert_eq!(v.capacity(), 0);
    v.push_back(4);
    assert_eq!(v, [4]);
    assert!(v.capacity() > 0);
}

#[test]
fn push_after_assign_zero_grows() {
    let mut v = DynArray::from([1, 2, 3]);
    v.assign(0, 0);
    v.push_back(9);
    assert_eq!(v, [9]);
}

#[test]
fn push_after_take_grows() {
    let mut v = DynArray::from([1, 2, 3]);
    let _moved = v.take();
    v.push_back(1);
    v.push_back(2);
    assert_eq!(v, [1, 2]);
    assert_eq!(v.capacity(), 2);
}

#[test]
fn capacity_sequence_doubles_from_one() {
    let mut v = DynArray::new();
    let mut caps = Vec::new();
    for i in 0..9 {
        v.push_back(i);
        caps.push(v.capacity());
    }
    assert_eq!(caps, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn capacity_never_below_len_under_mixed_ops() {
    let mut v = DynArray::new();
    for round in 0..50usize {
        v.push_back(round);
        if round % 3 == 0 {
            v.insert(v.len() / 2, round);
        }
        if round % 5 == 0 && !v.is_empty() {
            v.erase(0);
        }
        assert!(v.len() <= v.capacity());
    }
}
