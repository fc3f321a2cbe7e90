//! Quicksort, deterministic and randomized.
//!
//! ## Purpose
//!
//! Partition-exchange sorting with the Lomuto scheme. The deterministic
//! variant always pivots on the last element of the range; the randomized
//! variant first swaps a uniformly chosen element into the last slot, which
//! makes the O(n²) worst case independent of the input order.
//!
//! ## Design notes
//!
//! * **Shared partition**: Both variants call [`partition`]; randomization is
//!   only the optional pivot swap in front of it.
//! * **Work stack**: Sub-ranges are kept on an explicit stack instead of the
//!   call stack. The larger side is deferred and the smaller side processed
//!   first, so the stack holds O(log n) ranges even for sorted input to the
//!   deterministic variant.
//!
//! ## Properties
//!
//! * Time: best and average O(n log n), worst O(n²).
//! * Space: O(log n) work stack.
//! * Stable: no.
//!
//! ## Invariants
//!
//! * After `partition(arr, low, high, ..)` returns `p`: every element of
//!   `arr[low..p]` is <= `arr[p]` and every element of `arr[p + 1..=high]`
//!   is > `arr[p]`.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
#[cfg(feature = "std")]
use crate::primitives::random::RandomPivot;
use crate::primitives::random::PivotSource;

// ============================================================================
// Entry Points
// ============================================================================

/// Sort a copy of `data` with quicksort, pivoting on the last element.
pub fn quick_sort_deterministic<T: PrimInt>(data: &[T]) -> Vec<T> {
    quick_sort_by_key(data, None, |&v| v)
}

/// Sort a copy of `data` with quicksort, drawing pivots from the thread-local
/// random generator.
#[cfg(feature = "std")]
pub fn quick_sort_randomized<T: PrimInt>(data: &[T]) -> Vec<T> {
    let mut source = RandomPivot::thread_local();
    quick_sort_by_key(data, Some(&mut source), |&v| v)
}

/// Sort a copy of `data` with quicksort, drawing pivots from `source`.
pub fn quick_sort_randomized_with<T: PrimInt, P: PivotSource>(data: &[T], mut source: P) -> Vec<T> {
    quick_sort_by_key(data, Some(&mut source), |&v| v)
}

/// Sort a copy of `data` by `key` with quicksort.
///
/// With `pivot_source` set, every partition first swaps the element at the
/// picked index into the pivot slot.
pub fn quick_sort_by_key<E: Copy, K: Ord, F: Fn(&E) -> K>(
    data: &[E],
    mut pivot_source: Option<&mut dyn PivotSource>,
    key: F,
) -> Vec<E> {
    let mut arr = data.to_vec();
    if arr.len() < 2 {
        return arr;
    }

    // Half-open ranges [start, end)
    let mut stack: Vec<(usize, usize)> = Vec::new();
    stack.push((0, arr.len()));

    while let Some((start, end)) = stack.pop() {
        if end - start < 2 {
            continue;
        }

        // Reborrow with a fresh object lifetime for this partition only
        let source = pivot_source
            .as_mut()
            .map(|s| &mut **s as &mut dyn PivotSource);
        let p = partition(&mut arr, start, end - 1, source, &key);

        let left = (start, p);
        let right = (p + 1, end);
        let (larger, smaller) = if p - start > end - (p + 1) {
            (left, right)
        } else {
            (right, left)
        };
        stack.push(larger);
        stack.push(smaller);
    }

    arr
}

// ============================================================================
// Partition
// ============================================================================

/// Partition `arr[low..=high]` around a pivot and return the pivot's final
/// index.
///
/// With a pivot source, the element at the picked index (clamped into
/// `[low, high]`) is first swapped into `arr[high]`. The element at `high` is
/// then the pivot; every element `<=` it is moved in front of it.
pub fn partition<E, K: Ord, F: Fn(&E) -> K>(
    arr: &mut [E],
    low: usize,
    high: usize,
    pivot_source: Option<&mut (dyn PivotSource + '_)>,
    key: &F,
) -> usize {
    if let Some(source) = pivot_source {
        let idx = source.pick(low, high).clamp(low, high);
        arr.swap(idx, high);
    }

    let pivot = key(&arr[high]);

    // Next slot for an element <= pivot
    let mut store = low;
    for j in low..high {
        if key(&arr[j]) <= pivot {
            arr.swap(store, j);
            store += 1;
        }
    }

    arr.swap(store, high);
    store
}
