//! End-to-end walkthrough of the container.
//!
//! Demonstrates: literal construction → erase through a cursor → copy and
//! compare → reserve → growth by doubling → clear. Run with
//! `DYNARRAY_LOG=dynarray_core=trace` to see every reallocation.

use std::fmt::Display;

use dynarray_alloc::{Allocator, HeapAlloc, TrackingAlloc};
use dynarray_bench::setup_tracing;
use dynarray_core::{dyn_array, DynArray};

fn report<T: Display, A: Allocator>(label: &str, array: &DynArray<T, A>) {
    tracing::info!(
        label,
        len = array.len(),
        capacity = array.capacity(),
        "walkthrough step"
    );
    println!(
        "{label} size: {}  and capacity: {}",
        array.len(),
        array.capacity()
    );
}

fn print_elements<T: Display, A: Allocator>(array: &DynArray<T, A>) {
    let line: Vec<String> = array.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
}

fn main() {
    setup_tracing();

    println!("=== Dynarray Walkthrough ===\n");

    // --- Literal construction ---
    let mut v = dyn_array![1, 2, 3];
    report("Array", &v);
    print_elements(&v);

    // --- Erase through a cursor position ---
    let pos = (v.begin() + 1).position();
    v.erase(pos);
    report("Array", &v);
    print_elements(&v);

    // --- Copies compare equal ---
    let mut copy = v.clone();
    println!("{}", copy == v);

    // --- Reserve sets the capacity exactly ---
    copy.reserve(100);
    report("Copy", &copy);

    // --- Capacity doubles on reallocation ---
    for i in 0..100 {
        copy.push_back(i);
    }
    report("Copy", &copy);

    // --- Clearing keeps the capacity ---
    copy.clear();
    report("Copy", &copy);

    // --- Same sequence over a counting allocator ---
    println!("\nAllocator accounting:");
    let alloc = TrackingAlloc::new(HeapAlloc);
    {
        let mut counted = DynArray::new_in(alloc.clone());
        for i in 0..100u32 {
            counted.push_back(i);
        }
        let stats = alloc.stats();
        println!(
            "  after 100 pushes: {} allocations, {} releases, {} bytes live",
            stats.allocations, stats.deallocations, stats.bytes_outstanding
        );
    }
    let stats = alloc.stats();
    println!(
        "  after drop:       {} allocations, {} releases, peak {} bytes",
        stats.allocations, stats.deallocations, stats.peak_bytes
    );
}
