//! Bubble sort.
//!
//! ## Purpose
//!
//! Repeated passes of adjacent swaps over a shrinking unsorted prefix. After
//! pass `i` the largest `i + 1` elements sit in their final slots at the end.
//!
//! ## Properties
//!
//! * Time: best O(n) (early exit on a pass without swaps), average and worst O(n²).
//! * Space: O(1) beyond the output copy.
//! * Stable: yes (only strictly out-of-order neighbours are swapped).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Sort a copy of `data` with bubble sort.
pub fn bubble_sort<T: PrimInt>(data: &[T]) -> Vec<T> {
    bubble_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by `key` with bubble sort.
pub fn bubble_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: F) -> Vec<E> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if key(&arr[j]) > key(&arr[j + 1]) {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    arr
}
