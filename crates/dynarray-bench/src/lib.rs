//! Benchmark workloads and executable utilities for dynarray.
//!
//! - [`random_positions`]: deterministic index streams for insert/erase workloads
//! - [`filled`]: a pre-populated array of a given length
//! - [`setup_tracing`]: stderr logging for examples, filtered by `DYNARRAY_LOG`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray_alloc::Allocator;
use dynarray_core::DynArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Environment variable holding the tracing filter directives.
///
/// See [`EnvFilter`] for the directive syntax, e.g.
/// `DYNARRAY_LOG=dynarray_core=trace`.
pub const ENV_FILTER: &str = "DYNARRAY_LOG";

/// Generate `count` positions for an array whose length starts at `len`
/// and shrinks by one after each use (a random-erase stream).
///
/// Position `i` is always `< len - i`, so the stream can be applied in
/// order without going out of bounds. `count` must not exceed `len`.
pub fn random_positions(seed: u64, count: usize, len: usize) -> Vec<usize> {
    assert!(count <= len, "cannot erase {count} of {len} elements");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| (rng.next_u64() % (len - i) as u64) as usize)
        .collect()
}

/// An array holding `0..len`, allocated from `alloc` at exactly `len` slots.
pub fn filled<A: Allocator>(len: usize, alloc: A) -> DynArray<u64, A> {
    let mut array = DynArray::with_capacity_in(len, alloc);
    array.extend(0..len as u64);
    tracing::debug!(len, "built filled workload");
    array
}

/// Install a stderr subscriber filtered by [`ENV_FILTER`].
///
/// Call once at an executable's entry point. With the variable unset
/// nothing is printed.
pub fn setup_tracing() {
    let stderr_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env(ENV_FILTER));

    Registry::default().with(stderr_layer).init();
}
