/// Build a [`DynArray`](crate::DynArray) from a literal sequence.
///
/// - `dyn_array![]` is an empty array with no allocation.
/// - `dyn_array![a, b, c]` allocates exactly as many slots as values.
/// - `dyn_array![value; n]` holds `n` clones of `value`, capacity `n`.
///
/// ```rust
/// use dynarray_core::dyn_array;
///
/// let a = dyn_array![1, 2, 3];
/// assert_eq!(a.capacity(), 3);
///
/// let b = dyn_array!["x"; 2];
/// assert_eq!(b, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $count:expr) => {
        $crate::DynArray::from_elem($count, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynArray::from([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::DynArray;

    #[test]
    fn empty_literal() {
        let a: DynArray<u8> = dyn_array![];
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn list_literal_is_exact() {
        let a = dyn_array![1, 2, 3,];
        assert_eq!(a.len(), 3);
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn repeat_literal() {
        let a = dyn_array![String::from("ab"); 3];
        assert_eq!(a.len(), 3);
        assert!(a.iter().all(|s| s == "ab"));
    }

    #[test]
    fn same_literal_compares_equal() {
        let mut a = dyn_array![4, 5, 6];
        let b = dyn_array![4, 5, 6];
        a.reserve(50);
        assert_eq!(a, b);
    }
}
