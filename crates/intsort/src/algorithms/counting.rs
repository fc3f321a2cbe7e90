//! Counting sort and the per-digit counting pass used by radix sort.
//!
//! ## Purpose
//!
//! Sorts bounded-range integers without comparisons: tally each value,
//! prefix-sum the tallies into end positions, then place elements while
//! walking the input backwards.
//!
//! ## Design notes
//!
//! * **Stability**: Placement walks the input in reverse and decrements the
//!   end position after each use, so equal keys keep their input order.
//! * **Allocation**: The counter array is reserved with `try_reserve_exact`;
//!   a range that cannot be allocated is reported instead of aborting.
//!
//! ## Properties
//!
//! * Time: O(n + k) where k = max - min + 1.
//! * Space: O(n + k).
//! * Stable: yes.
//!
//! ## Invariants
//!
//! * After the prefix sum, `count[v]` is the number of elements with key <= v.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::sorting::{KeyRange, widen};

/// Number of buckets in a decimal digit pass.
pub const RADIX: usize = 10;

// ============================================================================
// Counting Sort
// ============================================================================

/// Sort a copy of `data` with counting sort.
///
/// No cap is applied to the counter array. On systems that overcommit memory
/// a range that passes `try_reserve_exact` can still exhaust physical memory;
/// callers that need a bound should use a [`Sorter`](crate::api::Sorter)
/// built with `max_counting_range`.
pub fn counting_sort<T: PrimInt>(data: &[T]) -> Result<Vec<T>, SortError> {
    counting_sort_by_key(data, |&v| v, None)
}

/// Sort a copy of `data` by integer `key` with counting sort.
///
/// `max_range` caps the number of counters that may be allocated.
pub fn counting_sort_by_key<E: Copy, T: PrimInt, F: Fn(&E) -> T>(
    data: &[E],
    key: F,
    max_range: Option<usize>,
) -> Result<Vec<E>, SortError> {
    let Some(range) = KeyRange::of(data, &key)? else {
        return Ok(Vec::new());
    };

    let slots = range.slots()?;
    let too_large = SortError::RangeTooLarge {
        range: slots,
        max: max_range,
    };
    let slots = usize::try_from(slots).map_err(|_| too_large)?;
    if max_range.is_some_and(|max| slots > max) {
        return Err(too_large);
    }

    let mut count: Vec<usize> = Vec::new();
    count.try_reserve_exact(slots).map_err(|_| too_large)?;
    count.resize(slots, 0);

    // Offsets fit in usize because every offset is below `slots`
    let mut offsets = Vec::with_capacity(data.len());
    for item in data {
        offsets.push(range.offset(widen(key(item))?) as usize);
    }

    for &offset in &offsets {
        count[offset] += 1;
    }

    for i in 1..slots {
        count[i] += count[i - 1];
    }

    let mut output = data.to_vec();
    for (item, &offset) in data.iter().zip(&offsets).rev() {
        count[offset] -= 1;
        output[count[offset]] = *item;
    }

    Ok(output)
}

// ============================================================================
// Digit Pass
// ============================================================================

/// Stable counting pass over the decimal digit `(key / exp) % 10`.
///
/// Rearranges `arr` in place. Keys must already be non-negative, which radix
/// sort guarantees by shifting every key by the minimum.
pub fn counting_sort_by_digit<E: Copy, F: Fn(&E) -> u128>(arr: &mut [E], exp: u128, key: F) {
    let digit = |item: &E| ((key(item) / exp) % RADIX as u128) as usize;

    let mut count = [0usize; RADIX];
    for item in arr.iter() {
        count[digit(item)] += 1;
    }

    for i in 1..RADIX {
        count[i] += count[i - 1];
    }

    let mut output = arr.to_vec();
    for item in arr.iter().rev() {
        let d = digit(item);
        count[d] -= 1;
        output[count[d]] = *item;
    }

    arr.copy_from_slice(&output);
}
