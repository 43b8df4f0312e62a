//! Growable contiguous array with a pluggable allocator.
//!
//! [`DynArray<T, A>`] owns one heap block of `capacity` slots, of which
//! the first `len` hold live values. Storage comes from an injected
//! [`Allocator`] (defaulting to [`HeapAlloc`]) and is returned to it
//! exactly once, when the block is replaced or the array is dropped.
//!
//! # Layout
//!
//! ```text
//! DynArray
//! ├── RawBuf (block pointer, capacity, len, allocator)
//! │   └── [ live 0..len | uninitialized len..capacity ]
//! └── GrowthPolicy (bootstrap capacity, growth factor)
//! ```
//!
//! # Capacity rules
//!
//! - Appending at full capacity grows by the [`GrowthPolicy`]: an empty
//!   array bootstraps to 1 slot, anything else doubles.
//! - [`reserve`](DynArray::reserve) takes a *total* capacity and is exact.
//! - Removing elements ([`pop_back`](DynArray::pop_back),
//!   [`erase`](DynArray::erase), [`clear`](DynArray::clear)) never
//!   releases capacity; only [`shrink_to_fit`](DynArray::shrink_to_fit)
//!   and [`assign`](DynArray::assign) do.
//!
//! # Cursors
//!
//! [`begin`](DynArray::begin) and [`end`](DynArray::end) return
//! [`Cursor`]s: plain positions over the buffer as it was at call time.
//! A cursor borrows the array, so anything that reallocates or shifts
//! elements cannot run while one is alive. Take its
//! [`position`](Cursor::position) to carry a location across a mutation.
//!
//! ```rust
//! use dynarray_core::dyn_array;
//!
//! let mut a = dyn_array![1, 2, 3];
//! let pos = (a.begin() + 1).position();
//! a.erase(pos);
//! assert_eq!(a, [1, 3]);
//! assert_eq!(a.capacity(), 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

mod array;
mod cmp;
pub mod config;
pub mod cursor;
pub mod error;
pub mod into_iter;
mod macros;
mod raw;

pub use array::DynArray;
pub use config::GrowthPolicy;
pub use cursor::Cursor;
pub use error::ConfigError;
pub use into_iter::IntoIter;

pub use dynarray_alloc::{AllocError, Allocator, HeapAlloc};
