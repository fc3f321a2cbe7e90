#![cfg(feature = "dev")]
//! Tests for key utilities and pivot sources.
//!
//! These tests verify the primitives shared by the algorithms:
//! - Sortedness checks
//! - Key widening to `i128`
//! - Key ranges, spans and offsets
//! - Pivot sources for randomized quicksort
//!
//! ## Test Organization
//!
//! 1. **Sortedness** - is_sorted on ordered and unordered data
//! 2. **Widening** - Signed, unsigned and out-of-range keys
//! 3. **Key Range** - min/max scan, span, slots, offsets
//! 4. **Pivot Sources** - Range and reproducibility of RandomPivot

use intsort::internals::primitives::errors::SortError;
use intsort::internals::primitives::random::{PivotSource, RandomPivot};
use intsort::internals::primitives::sorting::{KeyRange, is_sorted, widen};

// ============================================================================
// Sortedness Tests
// ============================================================================

/// Test is_sorted on ordered data.
///
/// Verifies that non-decreasing sequences, including duplicates, are sorted.
#[test]
fn test_is_sorted_ordered() {
    assert!(is_sorted::<i32>(&[]), "Empty input is sorted");
    assert!(is_sorted(&[5]), "Single element is sorted");
    assert!(is_sorted(&[-3, -3, 0, 2, 5]), "Duplicates are allowed");
    assert!(is_sorted(&[2, 2, 2, 2]), "All equal is sorted");
}

/// Test is_sorted on unordered data.
///
/// Verifies that a single descent is detected.
#[test]
fn test_is_sorted_unordered() {
    assert!(!is_sorted(&[3, 1, 2]));
    assert!(!is_sorted(&[1, 2, 3, 5, 4]));
}

// ============================================================================
// Widening Tests
// ============================================================================

/// Test widening of signed and unsigned keys.
///
/// Verifies that every value of the common integer types widens exactly.
#[test]
fn test_widen_exact() {
    assert_eq!(widen(-7i8), Ok(-7));
    assert_eq!(widen(i64::MIN), Ok(i64::MIN as i128));
    assert_eq!(widen(u64::MAX), Ok(u64::MAX as i128));
    assert_eq!(widen(i128::MAX), Ok(i128::MAX));
}

/// Test widening of u128 values above i128::MAX.
///
/// Verifies that such keys surface as an overflow error.
#[test]
fn test_widen_overflow() {
    let res = widen(u128::MAX);

    assert!(
        matches!(res, Err(SortError::Overflow { .. })),
        "u128::MAX cannot be widened"
    );
}

// ============================================================================
// Key Range Tests
// ============================================================================

/// Test key range of empty input.
///
/// Verifies that no range is produced.
#[test]
fn test_key_range_empty() {
    let data: Vec<i32> = vec![];
    let range = KeyRange::of(&data, &|&v: &i32| v).unwrap();

    assert_eq!(range, None);
}

/// Test key range with negative values.
///
/// Verifies min, max, span and slot count.
#[test]
fn test_key_range_basic() {
    let data = vec![5, -3, 0, -3, 2];
    let range = KeyRange::of(&data, &|&v: &i32| v).unwrap().unwrap();

    assert_eq!(range.min, -3);
    assert_eq!(range.max, 5);
    assert_eq!(range.span(), 8);
    assert_eq!(range.slots(), Ok(9));
    assert_eq!(range.offset(-3), 0);
    assert_eq!(range.offset(5), 8);
}

/// Test key range over a projected key.
///
/// Verifies that only the key is scanned, not the whole element.
#[test]
fn test_key_range_by_key() {
    let data = vec![(10, 'a'), (-4, 'b'), (7, 'c')];
    let range = KeyRange::of(&data, &|&(v, _): &(i16, char)| v)
        .unwrap()
        .unwrap();

    assert_eq!((range.min, range.max), (-4, 10));
}

/// Test span of the full i64 range.
///
/// Verifies that the span does not wrap.
#[test]
fn test_key_range_extreme_i64() {
    let data = vec![i64::MAX, i64::MIN];
    let range = KeyRange::of(&data, &|&v: &i64| v).unwrap().unwrap();

    assert_eq!(range.span(), u64::MAX as u128);
    assert_eq!(range.slots(), Ok(u64::MAX as u128 + 1));
}

/// Test slot count of the full i128 range.
///
/// Verifies that a slot count beyond u128 is an overflow error.
#[test]
fn test_key_range_extreme_i128() {
    let data = vec![i128::MIN, i128::MAX];
    let range = KeyRange::of(&data, &|&v: &i128| v).unwrap().unwrap();

    assert_eq!(range.span(), u128::MAX);
    assert!(matches!(range.slots(), Err(SortError::Overflow { .. })));
}

// ============================================================================
// Pivot Source Tests
// ============================================================================

/// Test that RandomPivot stays within bounds.
///
/// Verifies every pick lies in the inclusive range.
#[test]
fn test_random_pivot_in_range() {
    let mut source = RandomPivot::seeded(1);

    for (low, high) in [(0, 0), (0, 1), (3, 9), (100, 1000)] {
        for _ in 0..200 {
            let idx = source.pick(low, high);
            assert!(
                (low..=high).contains(&idx),
                "Pick {idx} outside [{low}, {high}]"
            );
        }
    }
}

/// Test that seeded pivot sources are reproducible.
///
/// Verifies that the same seed produces the same pick sequence.
#[test]
fn test_random_pivot_seeded_reproducible() {
    let mut a = RandomPivot::seeded(99);
    let mut b = RandomPivot::seeded(99);

    let picks_a: Vec<usize> = (0..50).map(|_| a.pick(0, 1000)).collect();
    let picks_b: Vec<usize> = (0..50).map(|_| b.pick(0, 1000)).collect();

    assert_eq!(picks_a, picks_b);
}

/// Test that a pivot source hands back its generator.
///
/// Verifies the generator keeps its state when unwrapped and re-wrapped.
#[test]
fn test_random_pivot_into_inner_keeps_state() {
    let mut a = RandomPivot::seeded(31);
    let mut b = RandomPivot::seeded(31);

    for _ in 0..10 {
        a.pick(0, 100);
        b.pick(0, 100);
    }

    let mut resumed = RandomPivot::new(a.into_inner());
    let picks_resumed: Vec<usize> = (0..20).map(|_| resumed.pick(0, 100)).collect();
    let picks_b: Vec<usize> = (0..20).map(|_| b.pick(0, 100)).collect();

    assert_eq!(picks_resumed, picks_b);
}

/// Test that picks cover the whole range.
///
/// Verifies that both endpoints are reachable.
#[test]
fn test_random_pivot_covers_endpoints() {
    let mut source = RandomPivot::seeded(5);
    let picks: Vec<usize> = (0..500).map(|_| source.pick(2, 5)).collect();

    assert!(picks.contains(&2), "Low endpoint should be picked");
    assert!(picks.contains(&5), "High endpoint should be picked");
}
