//! Selection sort.
//!
//! ## Purpose
//!
//! For each position from the left, finds the minimum of the unsorted suffix
//! and swaps it into place.
//!
//! ## Properties
//!
//! * Time: O(n²) comparisons in every case.
//! * Space: O(1) beyond the output copy.
//! * Stable: no. The long-distance swap can move an element past an equal one.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Sort a copy of `data` with selection sort.
pub fn selection_sort<T: PrimInt>(data: &[T]) -> Vec<T> {
    selection_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by `key` with selection sort.
pub fn selection_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: F) -> Vec<E> {
    let mut arr = data.to_vec();
    let n = arr.len();

    for i in 0..n {
        // First occurrence of the minimum in the unsorted suffix
        let mut min_idx = i;
        for j in i + 1..n {
            if key(&arr[j]) < key(&arr[min_idx]) {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
    }

    arr
}
