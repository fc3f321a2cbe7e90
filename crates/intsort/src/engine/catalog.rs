//! Catalog of the available algorithms and their properties.
//!
//! ## Purpose
//!
//! This module names every algorithm the crate implements and records its
//! asymptotic cost and stability, so callers can choose an algorithm by its
//! properties and results can report what produced them.
//!
//! ## Invariants
//!
//! * `Algorithm::ALL` lists every variant exactly once.
//! * `properties().stable` agrees with the behaviour the tests check.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Algorithm
// ============================================================================

/// Sorting algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Adjacent-swap passes with early exit.
    Bubble,

    /// Shift into a growing sorted prefix.
    Insertion,

    /// Repeated minimum selection.
    Selection,

    /// Top-down merge sort.
    #[default]
    Merge,

    /// Quicksort pivoting on the last element.
    QuickDeterministic,

    /// Quicksort with a uniformly random pivot.
    QuickRandomized,

    /// In-place binary heap sort.
    Heap,

    /// Counting sort over the value range.
    Counting,

    /// Equal-width bucket sort.
    Bucket,

    /// LSD decimal radix sort.
    Radix,
}

impl Algorithm {
    /// Every available algorithm.
    pub const ALL: [Algorithm; 10] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::QuickDeterministic,
        Self::QuickRandomized,
        Self::Heap,
        Self::Counting,
        Self::Bucket,
        Self::Radix,
    ];

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        self.properties().name
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(&self) -> bool {
        self.properties().stable
    }

    /// Whether the algorithm draws random pivots.
    pub fn is_randomized(&self) -> bool {
        matches!(self, Self::QuickRandomized)
    }

    /// Whether the algorithm allocates a counter per value in the range.
    pub fn uses_value_range(&self) -> bool {
        matches!(self, Self::Counting)
    }

    /// Complexity and stability summary.
    pub fn properties(&self) -> AlgorithmProperties {
        match self {
            Self::Bubble => AlgorithmProperties {
                name: "bubble sort",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
                in_place: true,
            },
            Self::Insertion => AlgorithmProperties {
                name: "insertion sort",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
                in_place: true,
            },
            Self::Selection => AlgorithmProperties {
                name: "selection sort",
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: false,
                in_place: true,
            },
            Self::Merge => AlgorithmProperties {
                name: "merge sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
                stable: true,
                in_place: false,
            },
            Self::QuickDeterministic => AlgorithmProperties {
                name: "quicksort (deterministic)",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
                stable: false,
                in_place: true,
            },
            Self::QuickRandomized => AlgorithmProperties {
                name: "quicksort (randomized)",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
                stable: false,
                in_place: true,
            },
            Self::Heap => AlgorithmProperties {
                name: "heap sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
                stable: false,
                in_place: true,
            },
            Self::Counting => AlgorithmProperties {
                name: "counting sort",
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n + k)",
                space: "O(n + k)",
                stable: true,
                in_place: false,
            },
            Self::Bucket => AlgorithmProperties {
                name: "bucket sort",
                best: "O(n + k)",
                average: "O(n + k)",
                worst: "O(n²)",
                space: "O(n + k)",
                stable: true,
                in_place: false,
            },
            Self::Radix => AlgorithmProperties {
                name: "radix sort",
                best: "O(d·(n + k))",
                average: "O(d·(n + k))",
                worst: "O(d·(n + k))",
                space: "O(n + k)",
                stable: true,
                in_place: false,
            },
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Properties
// ============================================================================

/// Asymptotic cost and ordering guarantees of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProperties {
    /// Human-readable name.
    pub name: &'static str,

    /// Best-case time.
    pub best: &'static str,

    /// Average-case time.
    pub average: &'static str,

    /// Worst-case time.
    pub worst: &'static str,

    /// Auxiliary space beyond the output.
    pub space: &'static str,

    /// Equal elements keep their input order.
    pub stable: bool,

    /// Works within the output buffer with O(1) or O(log n) extra memory.
    pub in_place: bool,
}
