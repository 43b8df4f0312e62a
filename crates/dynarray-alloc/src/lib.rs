//! Pluggable allocation capability for `dynarray` containers.
//!
//! This is the leaf crate of the workspace. It defines the [`Allocator`]
//! trait that containers are generic over, the default [`HeapAlloc`]
//! strategy backed by the global allocator, and [`TrackingAlloc`], an
//! accounting wrapper used to verify that every block handed out is
//! released exactly once.
//!
//! # Contract
//!
//! ```text
//! allocate(layout)          -> block of layout.size() bytes, or AllocError
//! deallocate(block, layout) -> never fails, layout must match allocate
//! ```
//!
//! Containers speak in element counts rather than layouts; the
//! [`allocate_array`] / [`deallocate_array`] helpers perform that
//! translation and report layout overflow as
//! [`AllocError::CapacityOverflow`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod heap;
pub mod tracking;
pub mod traits;

pub use error::AllocError;
pub use heap::HeapAlloc;
pub use tracking::{AllocStats, TrackingAlloc};
pub use traits::{allocate_array, array_layout, deallocate_array, Allocator};
