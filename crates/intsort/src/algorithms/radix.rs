//! Least-significant-digit radix sort.
//!
//! ## Purpose
//!
//! Sorts by decimal digits, least significant first, with one stable
//! counting pass per digit.
//!
//! ## Design notes
//!
//! * **Negative keys**: Every key is shifted by the minimum before the first
//!   pass, so the working keys are non-negative. The shifted key travels
//!   alongside its element and is dropped after the last pass, which undoes
//!   the shift without rewriting any element.
//! * **Pass count**: One pass per decimal digit of the largest shifted key.
//!
//! ## Properties
//!
//! * Time: O(d · (n + 10)) for d digits.
//! * Space: O(n).
//! * Stable: yes, provided every digit pass is stable.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::counting::{RADIX, counting_sort_by_digit};
use crate::primitives::errors::SortError;
use crate::primitives::sorting::{KeyRange, widen};

/// Sort a copy of `data` with radix sort.
pub fn radix_sort<T: PrimInt>(data: &[T]) -> Result<Vec<T>, SortError> {
    radix_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by integer `key` with radix sort.
pub fn radix_sort_by_key<E: Copy, T: PrimInt, F: Fn(&E) -> T>(
    data: &[E],
    key: F,
) -> Result<Vec<E>, SortError> {
    let Some(range) = KeyRange::of(data, &key)? else {
        return Ok(Vec::new());
    };

    // Pair each element with its shifted key
    let mut shifted = Vec::with_capacity(data.len());
    for item in data {
        shifted.push((range.offset(widen(key(item))?), *item));
    }

    let max_shifted = range.span();
    let mut exp: u128 = 1;
    while max_shifted / exp > 0 {
        counting_sort_by_digit(&mut shifted, exp, |&(k, _)| k);
        match exp.checked_mul(RADIX as u128) {
            Some(next) => exp = next,
            None => break,
        }
    }

    Ok(shifted.into_iter().map(|(_, item)| item).collect())
}
