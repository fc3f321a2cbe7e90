//! Execution engine dispatching to the selected algorithm.
//!
//! ## Purpose
//!
//! This module turns a validated [`SortConfig`] into a call of the matching
//! algorithm function, wiring in the pivot source for randomized quicksort
//! and the range cap for counting sort.
//!
//! ## Design notes
//!
//! * **Pivot source**: A configured seed gives every call a fresh
//!   `SmallRng` seeded with it, so repeated calls reproduce the same pivots.
//!   Without a seed the thread-local generator is used (`std`), or
//!   [`DEFAULT_SEED`] when the standard library is unavailable.
//! * **Logging**: Each dispatch emits a `tracing` debug event.
//!
//! ## Invariants
//!
//! * The returned vector is a sorted permutation of the input.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not format results (handled by `output`).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::bucket::bucket_sort;
use crate::algorithms::counting::counting_sort_by_key;
use crate::algorithms::heap::heap_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
#[cfg(feature = "std")]
use crate::algorithms::quick::quick_sort_randomized;
use crate::algorithms::quick::{quick_sort_deterministic, quick_sort_randomized_with};
use crate::algorithms::radix::radix_sort;
use crate::algorithms::selection::selection_sort;
use crate::engine::catalog::Algorithm;
use crate::primitives::errors::SortError;
use crate::primitives::random::RandomPivot;
use crate::primitives::sorting::is_sorted;

/// Seed used for randomized quicksort when no seed is configured and no
/// thread-local generator is available.
pub const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for a sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Pivot seed (randomized quicksort only).
    pub seed: Option<u64>,

    /// Maximum number of counters (counting sort only).
    pub max_counting_range: Option<usize>,
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatches a configured sort.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort a copy of `data` as described by `config`.
    pub fn run<T: PrimInt>(data: &[T], config: &SortConfig) -> Result<Vec<T>, SortError> {
        tracing::debug!(
            algorithm = config.algorithm.name(),
            len = data.len(),
            seeded = config.seed.is_some(),
            "running sort"
        );

        let sorted = match config.algorithm {
            Algorithm::Bubble => bubble_sort(data),
            Algorithm::Insertion => insertion_sort(data),
            Algorithm::Selection => selection_sort(data),
            Algorithm::Merge => merge_sort(data),
            Algorithm::QuickDeterministic => quick_sort_deterministic(data),
            Algorithm::QuickRandomized => Self::run_randomized(data, config.seed),
            Algorithm::Heap => heap_sort(data),
            Algorithm::Counting => counting_sort_by_key(data, |&v| v, config.max_counting_range)?,
            Algorithm::Bucket => bucket_sort(data)?,
            Algorithm::Radix => radix_sort(data)?,
        };

        debug_assert!(is_sorted(&sorted));
        Ok(sorted)
    }

    fn run_randomized<T: PrimInt>(data: &[T], seed: Option<u64>) -> Vec<T> {
        match seed {
            Some(seed) => quick_sort_randomized_with(data, RandomPivot::seeded(seed)),
            #[cfg(feature = "std")]
            None => quick_sort_randomized(data),
            #[cfg(not(feature = "std"))]
            None => quick_sort_randomized_with(data, RandomPivot::seeded(DEFAULT_SEED)),
        }
    }
}
