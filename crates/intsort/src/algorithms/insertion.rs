//! Insertion sort.
//!
//! ## Purpose
//!
//! Builds a sorted prefix one element at a time, shifting larger prefix
//! elements one slot to the right until the next element's position is found.
//! Also serves as the per-bucket sorter of bucket sort.
//!
//! ## Properties
//!
//! * Time: best O(n), average O(n²), worst O(n²).
//! * Space: O(1) beyond the output copy.
//! * Stable: yes (only strictly greater elements are shifted).

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Sort a copy of `data` with insertion sort.
pub fn insertion_sort<T: PrimInt>(data: &[T]) -> Vec<T> {
    insertion_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by `key` with insertion sort.
pub fn insertion_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: F) -> Vec<E> {
    let mut arr = data.to_vec();
    insertion_sort_in_place(&mut arr, &key);
    arr
}

/// Insertion sort over `arr` in place.
pub(crate) fn insertion_sort_in_place<E: Copy, K: Ord, F: Fn(&E) -> K>(arr: &mut [E], key: &F) {
    for i in 1..arr.len() {
        let current = arr[i];
        let current_key = key(&current);

        let mut j = i;
        while j > 0 && key(&arr[j - 1]) > current_key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = current;
    }
}
