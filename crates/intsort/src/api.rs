//! High-level API for configured sorting.
//!
//! ## Purpose
//!
//! This module provides the fluent entry point for callers that pick an
//! algorithm at runtime: configure a [`SortBuilder`], `build()` it into a
//! validated [`Sorter`], then sort any number of sequences with it.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Reusable**: A `Sorter` is `Copy` and holds no per-call state.
//! * **Type-Safe**: Generic over primitive integer types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortBuilder`] via `Sort::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.seed()`, ...).
//! 3. Call `.build()` to validate and obtain a [`Sorter`].

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::bubble::bubble_sort;
pub use crate::algorithms::bucket::bucket_sort;
pub use crate::algorithms::counting::counting_sort;
pub use crate::algorithms::heap::heap_sort;
pub use crate::algorithms::insertion::insertion_sort;
pub use crate::algorithms::merge::{merge, merge_sort};
#[cfg(feature = "std")]
pub use crate::algorithms::quick::quick_sort_randomized;
pub use crate::algorithms::quick::{quick_sort_deterministic, quick_sort_randomized_with};
pub use crate::algorithms::radix::radix_sort;
pub use crate::algorithms::selection::selection_sort;
pub use crate::engine::catalog::{Algorithm, AlgorithmProperties};
pub use crate::engine::executor::DEFAULT_SEED;
pub use crate::engine::output::SortOutput;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::random::{PivotSource, RandomPivot};
pub use crate::primitives::sorting::is_sorted;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Sorter`].
#[derive(Debug, Clone, Default)]
pub struct SortBuilder {
    /// Algorithm to run (default: merge sort).
    pub algorithm: Option<Algorithm>,

    /// Pivot seed for randomized quicksort.
    pub seed: Option<u64>,

    /// Counter cap for counting sort.
    pub max_counting_range: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Fix the pivot sequence of randomized quicksort.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Limit the number of counters counting sort may allocate.
    pub fn max_counting_range(mut self, cap: usize) -> Self {
        if self.max_counting_range.is_some() {
            self.duplicate_param = Some("max_counting_range");
        }
        self.max_counting_range = Some(cap);
        self
    }

    /// Validate the configuration and create a [`Sorter`].
    pub fn build(self) -> Result<Sorter, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let algorithm = self.algorithm.unwrap_or_default();

        // Validate options against the chosen algorithm
        Validator::validate_seed(algorithm, self.seed)?;
        Validator::validate_range_cap_usage(algorithm, self.max_counting_range)?;
        if let Some(cap) = self.max_counting_range {
            Validator::validate_range_cap(cap)?;
        }

        Ok(Sorter {
            config: SortConfig {
                algorithm,
                seed: self.seed,
                max_counting_range: self.max_counting_range,
            },
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Validated, reusable sorting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Algorithm this sorter runs.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    /// Sort a copy of `data`.
    pub fn sort<T: PrimInt>(&self, data: &[T]) -> Result<SortOutput<T>, SortError> {
        let values = SortExecutor::run(data, &self.config)?;
        Ok(SortOutput {
            values,
            algorithm: self.config.algorithm,
        })
    }
}
