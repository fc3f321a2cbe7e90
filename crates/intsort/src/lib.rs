//! # intsort: Classical Integer Sorting Algorithms for Rust
//!
//! Reference implementations of nine classical sorting algorithms over
//! primitive integers, each with documented complexity and stability:
//! bubble, insertion, selection, merge, quick (deterministic and randomized),
//! heap, counting, bucket and radix sort.
//!
//! Every algorithm takes a slice and returns a new sorted `Vec`; the input is
//! never modified.
//!
//! ## Quick Start
//!
//! ### Direct calls
//!
//! ```rust
//! use intsort::prelude::*;
//!
//! let data = vec![5, -3, 0, -3, 2];
//!
//! assert_eq!(merge_sort(&data), vec![-3, -3, 0, 2, 5]);
//! assert_eq!(radix_sort(&data)?, vec![-3, -3, 0, 2, 5]);
//!
//! // The input is untouched
//! assert_eq!(data, vec![5, -3, 0, -3, 2]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Configured sorter
//!
//! ```rust
//! use intsort::prelude::*;
//!
//! let sorter = Sort::new()
//!     .algorithm(QuickRandomized)  // Random pivots
//!     .seed(42)                    // Reproducible pivot sequence
//!     .build()?;
//!
//! let result = sorter.sort(&[3, 1, 2])?;
//! assert_eq!(result.values, vec![1, 2, 3]);
//!
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Algorithm:   quicksort (randomized)
//!   Elements:    3
//!   Stable:      no
//!   Time:        best O(n log n), average O(n log n), worst O(n²)
//!   Space:       O(log n)
//!
//! Sorted Data:
//!   [1, 2, 3]
//! ```
//!
//! ## Algorithms
//!
//! | Algorithm            | Best       | Average    | Worst      | Stable |
//! |----------------------|------------|------------|------------|--------|
//! | Bubble               | O(n)       | O(n²)      | O(n²)      | yes    |
//! | Insertion            | O(n)       | O(n²)      | O(n²)      | yes    |
//! | Selection            | O(n²)      | O(n²)      | O(n²)      | no     |
//! | Merge                | O(n log n) | O(n log n) | O(n log n) | yes    |
//! | Quick (both)         | O(n log n) | O(n log n) | O(n²)      | no     |
//! | Heap                 | O(n log n) | O(n log n) | O(n log n) | no     |
//! | Counting             | O(n + k)   | O(n + k)   | O(n + k)   | yes    |
//! | Bucket               | O(n + k)   | O(n + k)   | O(n²)      | yes    |
//! | Radix                | O(d(n+k))  | O(d(n+k))  | O(d(n+k))  | yes    |
//!
//! ## Result and Error Handling
//!
//! The comparison sorts cannot fail and return `Vec<T>` directly. Counting,
//! bucket and radix sort depend on the value range and return
//! `Result<Vec<T>, SortError>`:
//!
//! ```rust
//! use intsort::prelude::*;
//!
//! match counting_sort(&[i64::MIN, i64::MAX]) {
//!     Ok(sorted) => println!("Sorted: {:?}", sorted),
//!     Err(e) => eprintln!("Sorting failed: {}", e),
//! }
//! ```
//!
//! ## Randomized Quicksort
//!
//! Pivot choice is injectable through [`PivotSource`](prelude::PivotSource):
//!
//! ```rust
//! use intsort::prelude::*;
//!
//! let sorted = quick_sort_randomized_with(&[9, 4, 7, 1], RandomPivot::seeded(7));
//! assert_eq!(sorted, vec![1, 4, 7, 9]);
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency. Only
//! `quick_sort_randomized` (which needs the thread-local generator) is
//! unavailable; use `quick_sort_randomized_with` instead.
//!
//! ```toml
//! [dependencies]
//! intsort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, key helpers, pivot sources.
mod primitives;

// Layer 2: Algorithms - the sorting algorithms.
mod algorithms;

// Layer 3: Engine - catalog, validation and dispatch.
mod engine;

// High-level fluent API.
mod api;

pub use api::*;

// Standard intsort prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::quick_sort_randomized;
    pub use crate::api::{
        Algorithm,
        Algorithm::Bubble,
        Algorithm::Bucket,
        Algorithm::Counting,
        Algorithm::Heap,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::QuickDeterministic,
        Algorithm::QuickRandomized,
        Algorithm::Radix,
        Algorithm::Selection,
        AlgorithmProperties, PivotSource, RandomPivot, SortBuilder as Sort, SortError, SortOutput,
        Sorter, bubble_sort, bucket_sort, counting_sort, heap_sort, insertion_sort, is_sorted,
        merge, merge_sort, quick_sort_deterministic, quick_sort_randomized_with, radix_sort,
        selection_sort,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
