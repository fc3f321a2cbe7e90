//! Key utilities shared by the sorting algorithms.
//!
//! ## Purpose
//!
//! This module provides the small helpers every algorithm leans on: the
//! sortedness check, widening of integer keys to `i128`, and the min/max scan
//! the distribution sorts start from.
//!
//! ## Design notes
//!
//! * **Widening**: Keys are widened to `i128` so offsets never wrap for any
//!   primitive integer up to 64 bits.
//! * **Offsets**: Distances from the minimum are taken with `abs_diff`, which
//!   always fits in `u128`.
//!
//! ## Invariants
//!
//! * `KeyRange::min <= KeyRange::max`.
//! * `KeyRange::offset(k)` is monotone in `k` for every `k` in the range.
//!
//! ## Non-goals
//!
//! * This module does not sort anything itself.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Sortedness
// ============================================================================

/// Check whether `data` is in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

// ============================================================================
// Key Widening
// ============================================================================

/// Widen an integer key to `i128`.
///
/// Only `u128` values above `i128::MAX` fail to widen.
#[inline]
pub fn widen<T: PrimInt>(value: T) -> Result<i128, SortError> {
    value.to_i128().ok_or(SortError::Overflow {
        operation: "key widening",
    })
}

// ============================================================================
// Key Range
// ============================================================================

/// Minimum and maximum key of a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    /// Smallest widened key.
    pub min: i128,

    /// Largest widened key.
    pub max: i128,
}

impl KeyRange {
    /// Scan `data` for its key range. Returns `Ok(None)` for empty input.
    pub fn of<E, T: PrimInt, F: Fn(&E) -> T>(
        data: &[E],
        key: &F,
    ) -> Result<Option<Self>, SortError> {
        let mut iter = data.iter();
        let Some(first) = iter.next() else {
            return Ok(None);
        };

        let first = widen(key(first))?;
        let mut range = Self {
            min: first,
            max: first,
        };
        for item in iter {
            let k = widen(key(item))?;
            if k < range.min {
                range.min = k;
            }
            if k > range.max {
                range.max = k;
            }
        }
        Ok(Some(range))
    }

    /// Distance between the maximum and the minimum key.
    #[inline]
    pub fn span(&self) -> u128 {
        self.max.abs_diff(self.min)
    }

    /// Number of distinct values in `[min, max]`.
    #[inline]
    pub fn slots(&self) -> Result<u128, SortError> {
        self.span().checked_add(1).ok_or(SortError::Overflow {
            operation: "range size",
        })
    }

    /// Distance of `key` from the minimum (the key shifted to be non-negative).
    #[inline]
    pub fn offset(&self, key: i128) -> u128 {
        key.abs_diff(self.min)
    }
}
