//! Dynarray: a growable contiguous array with a pluggable allocator.
//!
//! The container lives in `dynarray-core` and the allocation trait in
//! `dynarray-alloc`; this crate gathers both under one name. Depend on the
//! sub-crates directly only when writing an allocator without the
//! container.
//!
//! # Quick start
//!
//! ```rust
//! use dynarray::prelude::*;
//! use dynarray::alloc::TrackingAlloc;
//!
//! let mut v = dyn_array![1, 2, 3];
//! let pos = (v.begin() + 1).position();
//! v.erase(pos);
//! assert_eq!(v, [1, 3]);
//!
//! // Same container over an allocator that counts blocks.
//! let alloc = TrackingAlloc::new(HeapAlloc);
//! let mut copy = DynArray::with_capacity_in(v.len(), alloc.clone());
//! copy.extend(v.iter().copied());
//! copy.reserve(100);
//! for i in 0..100 {
//!     copy.push_back(i);
//! }
//! assert_eq!((copy.len(), copy.capacity()), (102, 200));
//! drop(copy);
//! assert_eq!(alloc.stats().live_blocks(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`alloc`] | `dynarray-alloc` | `Allocator` trait, heap and tracking allocators, `AllocError` |
//! | [`array`] | `dynarray-core` | `DynArray`, `Cursor`, `IntoIter`, `GrowthPolicy` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Allocation capability (`dynarray-alloc`).
///
/// Implement [`alloc::Allocator`] to back a [`DynArray`] with your own
/// memory source. [`alloc::HeapAlloc`] is the default and
/// [`alloc::TrackingAlloc`] wraps any allocator with block accounting.
pub use dynarray_alloc as alloc;

/// The container and its iterators (`dynarray-core`).
pub use dynarray_core as array;

pub use dynarray_core::{dyn_array, DynArray};

/// Common imports for typical usage.
///
/// ```rust
/// use dynarray::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use dynarray_core::{dyn_array, Cursor, DynArray, GrowthPolicy, IntoIter};

    // Allocation
    pub use dynarray_alloc::{Allocator, HeapAlloc};

    // Errors
    pub use dynarray_alloc::AllocError;
    pub use dynarray_core::ConfigError;
}
