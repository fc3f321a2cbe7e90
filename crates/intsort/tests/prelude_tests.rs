#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed to sort
//! with a single import, both through the direct functions and through the
//! configured sorter.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Algorithm variants without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use intsort::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that the direct sort functions are exported.
///
/// Verifies every algorithm function is callable from the prelude.
#[test]
fn test_prelude_functions() {
    let data = [5, -3, 0, -3, 2];
    let expected = vec![-3, -3, 0, 2, 5];

    assert_eq!(bubble_sort(&data), expected);
    assert_eq!(insertion_sort(&data), expected);
    assert_eq!(selection_sort(&data), expected);
    assert_eq!(merge_sort(&data), expected);
    assert_eq!(quick_sort_deterministic(&data), expected);
    assert_eq!(quick_sort_randomized(&data), expected);
    assert_eq!(
        quick_sort_randomized_with(&data, RandomPivot::seeded(1)),
        expected
    );
    assert_eq!(heap_sort(&data), expected);
    assert_eq!(counting_sort(&data), Ok(expected.clone()));
    assert_eq!(bucket_sort(&data), Ok(expected.clone()));
    assert_eq!(radix_sort(&data), Ok(expected.clone()));
    assert!(is_sorted(&expected));
    assert_eq!(merge(&[1, 3], &[2]), vec![1, 2, 3]);
}

/// Test that a custom pivot source works through the prelude.
///
/// Verifies PivotSource can be implemented with prelude imports only.
#[test]
fn test_prelude_pivot_source() {
    struct Middle;

    impl PivotSource for Middle {
        fn pick(&mut self, low: usize, high: usize) -> usize {
            low + (high - low) / 2
        }
    }

    assert_eq!(
        quick_sort_randomized_with(&[4, 3, 2, 1], Middle),
        vec![1, 2, 3, 4]
    );
}

// ============================================================================
// Type Usage Tests
// ============================================================================

/// Test Algorithm variants are available unqualified.
///
/// Verifies every variant builds into a sorter.
#[test]
fn test_prelude_algorithm_variants() {
    for algorithm in [
        Bubble,
        Insertion,
        Selection,
        Merge,
        QuickDeterministic,
        QuickRandomized,
        Heap,
        Counting,
        Bucket,
        Radix,
    ] {
        let sorter = Sort::new().algorithm(algorithm).build().unwrap();
        assert_eq!(sorter.algorithm(), algorithm);
    }
}

/// Test AlgorithmProperties is available.
///
/// Verifies properties can be named with prelude imports.
#[test]
fn test_prelude_properties() {
    let props: AlgorithmProperties = Counting.properties();

    assert_eq!(props.name, "counting sort");
    assert!(props.stable);
}

// ============================================================================
// Builder Pattern Tests
// ============================================================================

/// Test complete workflow with prelude.
///
/// Verifies a configured sort works with only prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let sorter: Sorter = Sort::new()
        .algorithm(Counting)
        .max_counting_range(1000)
        .build()
        .expect("Valid configuration should build");

    let result: SortOutput<i32> = sorter
        .sort(&[9, -4, 7, 0])
        .expect("Small range should sort");

    assert_eq!(result.values, vec![-4, 0, 7, 9]);
    assert_eq!(result.algorithm, Counting);
}

/// Test error types are available.
///
/// Verifies error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let result = Sort::new().algorithm(Merge).seed(3).build();

    assert!(matches!(
        result,
        Err(SortError::UnsupportedOption { .. })
    ));
}
