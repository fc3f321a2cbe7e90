//! Layer 2: Algorithms
//!
//! This layer implements the sorting algorithms themselves. Every algorithm
//! copies its input at entry and returns a new sorted vector; the caller's
//! slice is never touched. Each public `*_sort` function has a `*_by_key`
//! counterpart that sorts arbitrary `Copy` elements by an integer key, which
//! is how stability is observed.

// Adjacent-swap passes with early exit.
pub mod bubble;

// Shift-into-sorted-prefix; also the per-bucket sorter.
pub mod insertion;

// Minimum selection and swap.
pub mod selection;

// In-place binary max-heap.
pub mod heap;

// Top-down merge sort and the stable two-way merge.
pub mod merge;

// Lomuto partition and both quicksort drivers.
pub mod quick;

// Counting sort and the stable per-digit pass.
pub mod counting;

// LSD decimal radix sort.
pub mod radix;

// Equal-width bucket distribution.
pub mod bucket;
