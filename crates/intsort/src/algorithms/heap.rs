//! Heap sort.
//!
//! ## Purpose
//!
//! Builds a binary max-heap over the whole working copy, then repeatedly moves
//! the root (the current maximum) behind the shrinking heap and restores the
//! heap property with a sift-down.
//!
//! ## Properties
//!
//! * Time: O(n log n) in every case.
//! * Space: O(1) beyond the output copy.
//! * Stable: no.
//!
//! ## Invariants
//!
//! * Children of node `i` are `2i + 1` and `2i + 2`.
//! * Before each extraction, `arr[..heap_len]` is a max-heap and
//!   `arr[heap_len..]` holds the largest elements in sorted order.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Sort a copy of `data` with heap sort.
pub fn heap_sort<T: PrimInt>(data: &[T]) -> Vec<T> {
    heap_sort_by_key(data, |&v| v)
}

/// Sort a copy of `data` by `key` with heap sort.
pub fn heap_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(data: &[E], key: F) -> Vec<E> {
    let mut arr = data.to_vec();
    let n = arr.len();

    // Build the max-heap from the last internal node up to the root
    for root in (0..n / 2).rev() {
        heapify(&mut arr, n, root, &key);
    }

    // Move the maximum behind the heap and shrink it
    for end in (1..n).rev() {
        arr.swap(0, end);
        heapify(&mut arr, end, 0, &key);
    }

    arr
}

/// Sift `arr[root]` down until the subtree of `arr[..heap_len]` rooted there
/// is a max-heap.
pub fn heapify<E, K: Ord, F: Fn(&E) -> K>(arr: &mut [E], heap_len: usize, root: usize, key: &F) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_len && key(&arr[left]) > key(&arr[largest]) {
        largest = left;
    }
    if right < heap_len && key(&arr[right]) > key(&arr[largest]) {
        largest = right;
    }

    if largest != root {
        arr.swap(root, largest);
        heapify(arr, heap_len, largest, key);
    }
}
