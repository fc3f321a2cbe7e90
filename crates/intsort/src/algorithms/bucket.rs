//! Bucket sort.
//!
//! ## Purpose
//!
//! Spreads the input over `n` equal-width buckets, sorts every bucket with
//! insertion sort and concatenates the buckets in index order.
//!
//! ## Design notes
//!
//! * **Width**: `(max - min) / n + 1`, with fractional division. The `+ 1`
//!   keeps the maximum from mapping one past the last bucket; any index that
//!   still lands out of range is clamped to the last bucket.
//! * **Degenerate input**: A single element, or a range much larger than `n`
//!   with clustered values, can put everything into one bucket. That is
//!   accepted and costs O(n²).
//!
//! ## Properties
//!
//! * Time: average O(n + k), worst O(n²).
//! * Space: O(n + k).
//! * Stable: yes. Distribution keeps input order and insertion sort is stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::insertion::insertion_sort_in_place;
use crate::primitives::errors::SortError;
use crate::primitives::sorting::{KeyRange, widen};

/// Sort a copy of `data` with bucket sort.
pub fn bucket_sort<T: PrimInt>(data: &[T]) -> Result<Vec<T>, SortError> {
    bucket_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by integer `key` with bucket sort.
pub fn bucket_sort_by_key<E: Copy, T: PrimInt, F: Fn(&E) -> T>(
    data: &[E],
    key: F,
) -> Result<Vec<E>, SortError> {
    let Some(range) = KeyRange::of(data, &key)? else {
        return Ok(Vec::new());
    };

    let n = data.len();
    let width = range.span() as f64 / n as f64 + 1.0;

    let mut buckets: Vec<Vec<E>> = (0..n).map(|_| Vec::new()).collect();
    for item in data {
        let offset = range.offset(widen(key(item))?);
        // Float-to-int casts saturate
        let index = ((offset as f64 / width) as usize).min(n - 1);
        buckets[index].push(*item);
    }

    if n > 1 && buckets.iter().any(|b| b.len() == n) {
        tracing::trace!(n, "all elements fell into one bucket");
    }

    let mut result = Vec::with_capacity(n);
    for mut bucket in buckets {
        insertion_sort_in_place(&mut bucket, &key);
        result.extend(bucket);
    }

    Ok(result)
}
