//! Merge sort.
//!
//! ## Purpose
//!
//! Top-down divide and conquer: split at the midpoint, sort both halves
//! recursively, then merge them with a two-pointer walk.
//!
//! ## Properties
//!
//! * Time: O(n log n) in every case.
//! * Space: O(n) per merge level.
//! * Stable: yes. Ties take the left element first.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Sort a copy of `data` with merge sort.
pub fn merge_sort<T: PrimInt>(data: &[T]) -> Vec<T> {
    merge_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by `key` with merge sort.
pub fn merge_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: F) -> Vec<E> {
    sort_recursive(data, &key)
}

/// Merge two sorted sequences into one sorted sequence.
pub fn merge<T: PrimInt>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by_key(left, right, &|&v: &T| v)
}

/// Merge two sequences sorted by `key`, preferring `left` on ties.
pub fn merge_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(left: &[E], right: &[E], key: &F) -> Vec<E> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

fn sort_recursive<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: &F) -> Vec<E> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = sort_recursive(&data[..mid], key);
    let right = sort_recursive(&data[mid..], key);

    merge_by_key(&left, &right, key)
}
