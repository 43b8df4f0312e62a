//! Test fixtures for dynarray development.
//!
//! - [`BoundedAlloc`]: an allocator with a fixed byte budget, for driving
//!   the fallible (`try_`) paths deterministically.
//! - [`DropCounter`]: an element that counts its own drops, for checking
//!   that every value is dropped exactly once.
//!
//! This crate depends only on `dynarray-alloc` so that unit tests inside
//! `dynarray-core` can use it without pulling in a second copy of the
//! container types.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{BoundedAlloc, DropCounter};
