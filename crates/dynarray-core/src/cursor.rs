//! Random-access positions into a [`DynArray`](crate::DynArray).
//!
//! A [`Cursor`] is a position paired with the view of the buffer that
//! was current when it was created. It tracks nothing else: there is no
//! generation counter and no link back to the array. The borrow it holds
//! keeps the array from reallocating or shifting underneath it, so a
//! cursor is never dangling, but cursors taken before a mutation must be
//! discarded and re-obtained afterwards.
//!
//! A cursor is not itself an iterator; [`Cursor::iter`] walks the
//! elements from its position to the end of its view without moving it.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::ptr;
use std::slice;

/// A position in a borrowed buffer.
///
/// Two cursors are equal when they view the same buffer at the same
/// position; the position is the cursor's only state.
pub struct Cursor<'a, T> {
    view: &'a [T],
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(view: &'a [T], pos: usize) -> Self {
        Self { view, pos }
    }

    /// Index of the position within the array.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The element at the position, or `None` at or past the end.
    pub fn get(&self) -> Option<&'a T> {
        self.view.get(self.pos)
    }

    /// Iterate from the position to the end of the view. Empty at or past
    /// the end. The cursor itself does not move.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.view.get(self.pos..).unwrap_or(&[]).iter()
    }

    /// Move one element forward.
    ///
    /// # Panics
    ///
    /// Panics if the position would overflow `usize`.
    #[track_caller]
    pub fn step_forward(&mut self) {
        *self += 1;
    }

    /// Move one element back.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at position 0.
    #[track_caller]
    pub fn step_back(&mut self) {
        self.pos = self
            .pos
            .checked_sub(1)
            .expect("cursor stepped before the start of the buffer");
    }

    /// A cursor moved by `delta` elements in either direction.
    ///
    /// # Panics
    ///
    /// Panics if the result would be before position 0.
    #[track_caller]
    pub fn offset(&self, delta: isize) -> Self {
        let pos = self
            .pos
            .checked_add_signed(delta)
            .expect("cursor offset moved outside the addressable range");
        Self {
            view: self.view,
            pos,
        }
    }

    /// Signed distance from `origin` to `self`.
    ///
    /// # Panics
    ///
    /// Panics if the distance does not fit in `isize`.
    #[track_caller]
    pub fn distance_from(&self, origin: &Self) -> isize {
        let (magnitude, forward) = if self.pos >= origin.pos {
            (self.pos - origin.pos, true)
        } else {
            (origin.pos - self.pos, false)
        };
        let magnitude =
            isize::try_from(magnitude).expect("cursor distance does not fit in isize");
        if forward {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.view.as_ptr())
            .field("pos", &self.pos)
            .field("len", &self.view.len())
            .finish()
    }
}

/// Two cursors are equal when they point at the same slot of the same buffer.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.view.as_ptr(), other.view.as_ptr()) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Add<usize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(mut self, rhs: usize) -> Self {
        self += rhs;
        self
    }
}

impl<T> AddAssign<usize> for Cursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, rhs: usize) {
        self.pos = self
            .pos
            .checked_add(rhs)
            .expect("cursor moved outside the addressable range");
    }
}

impl<T> Sub<usize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(mut self, rhs: usize) -> Self {
        self -= rhs;
        self
    }
}

impl<T> SubAssign<usize> for Cursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, rhs: usize) {
        self.pos = self
            .pos
            .checked_sub(rhs)
            .expect("cursor moved before the start of the buffer");
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    #[track_caller]
    fn sub(self, rhs: Self) -> isize {
        self.distance_from(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::DynArray;

    #[test]
    fn begin_and_end_bound_live_elements() {
        let a = DynArray::from([1, 2, 3]);
        assert_eq!(a.begin().position(), 0);
        assert_eq!(a.end().position(), 3);
        assert_eq!(a.end() - a.begin(), 3);
        assert_eq!(a.begin() - a.end(), -3);
        assert_eq!(a.begin().get(), Some(&1));
        assert_eq!(a.end().get(), None);
    }

    #[test]
    fn stepping_and_offsets() {
        let a = DynArray::from([10, 20, 30, 40]);
        let mut c = a.begin();
        c.step_forward();
        assert_eq!(c.get(), Some(&20));
        c += 2;
        assert_eq!(c.get(), Some(&40));
        c.step_back();
        assert_eq!(c.get(), Some(&30));
        assert_eq!(c.offset(-2).get(), Some(&10));
        assert_eq!((c - 1).get(), Some(&20));
        assert_eq!(a.end() - 1, a.begin() + 3);
    }

    #[test]
    fn equality_is_by_buffer_and_position() {
        let a = DynArray::from([1, 2]);
        let b = a.clone();
        assert_eq!(a.begin() + 2, a.end());
        assert_ne!(a.begin(), a.end());
        // Same position, different buffer.
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn empty_array_begin_equals_end() {
        let a: DynArray<u8> = DynArray::new();
        assert_eq!(a.begin(), a.end());
        assert_eq!(a.begin().iter().count(), 0);
    }

    #[test]
    fn iterates_from_position_to_end() {
        let a = DynArray::from([1, 2, 3, 4]);
        let tail: Vec<_> = (a.begin() + 1).iter().copied().collect();
        assert_eq!(tail, vec![2, 3, 4]);
        let reversed: Vec<_> = a.begin().iter().rev().copied().collect();
        assert_eq!(reversed, vec![4, 3, 2, 1]);
        assert_eq!((a.begin() + 2).iter().len(), 2);
    }

    #[test]
    fn iterating_leaves_cursor_unchanged() {
        let a = DynArray::from([1, 2, 3]);
        let c = a.begin() + 1;
        let mut it = c.iter();
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(c, a.begin() + 1);
        assert_eq!(c.get(), Some(&2));
        assert_eq!(format!("{c:?}"), format!("{:?}", a.begin() + 1));
    }

    #[test]
    fn position_survives_mutation() {
        let mut a = DynArray::from([1, 2, 3]);
        let pos = (a.begin() + 1).position();
        a.erase(pos);
        assert_eq!(a, [1, 3]);
    }

    #[test]
    fn past_the_end_is_exhausted() {
        let a = DynArray::from([1]);
        let c = a.end() + 5;
        assert_eq!(c.get(), None);
        assert_eq!(c.iter().next(), None);
        assert_eq!(c.iter().len(), 0);
    }

    #[test]
    fn distance_at_isize_limit() {
        let a = DynArray::from([0u8]);
        let far = a.begin() + isize::MAX as usize;
        assert_eq!(far - a.begin(), isize::MAX);
        assert_eq!(a.begin() - far, -isize::MAX);
    }

    #[test]
    #[should_panic(expected = "does not fit in isize")]
    fn distance_beyond_isize_panics() {
        let a = DynArray::from([0u8]);
        let far = a.begin() + (isize::MAX as usize + 1);
        let _ = far - a.begin();
    }

    #[test]
    #[should_panic(expected = "outside the addressable range")]
    fn advancing_past_usize_max_panics() {
        let a = DynArray::from([0u8]);
        let mut c = a.begin() + usize::MAX;
        c.step_forward();
    }

    #[test]
    #[should_panic(expected = "before the start")]
    fn stepping_before_start_panics() {
        let a = DynArray::from([1]);
        let mut c = a.begin();
        c.step_back();
    }
}
