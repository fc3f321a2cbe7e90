#![cfg(feature = "dev")]
//! Tests for sort output structures.
//!
//! These tests verify the SortOutput structure and its methods:
//! - Accessors (len, is_empty, properties, into_vec, as_ref)
//! - Display formatting of the summary block
//! - Truncation of long value lists
//!
//! ## Test Organization
//!
//! 1. **Accessor Methods** - Getting data from the output
//! 2. **Display** - Summary block and value list
//! 3. **Truncation** - Long outputs and the boundary length

use intsort::internals::engine::catalog::Algorithm;
use intsort::internals::engine::output::SortOutput;

// ============================================================================
// Helper Functions
// ============================================================================

fn output<T>(values: Vec<T>, algorithm: Algorithm) -> SortOutput<T> {
    SortOutput { values, algorithm }
}

/// Extract the value list line printed under "Sorted Data:".
fn data_line(text: &str) -> &str {
    text.lines()
        .skip_while(|l| *l != "Sorted Data:")
        .nth(1)
        .expect("Sorted Data section should have a value line")
}

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test len and is_empty.
///
/// Verifies both reflect the stored values.
#[test]
fn test_len_and_is_empty() {
    let out = output(vec![1, 2, 3], Algorithm::Merge);
    let empty: SortOutput<i32> = output(vec![], Algorithm::Merge);

    assert_eq!(out.len(), 3);
    assert!(!out.is_empty());
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
}

/// Test properties of the producing algorithm.
///
/// Verifies the output reports the catalog entry of its algorithm.
#[test]
fn test_properties() {
    let out = output(vec![1u8], Algorithm::Heap);

    assert_eq!(out.properties(), Algorithm::Heap.properties());
    assert!(!out.properties().stable);
}

/// Test conversions back to plain values.
///
/// Verifies into_vec and as_ref expose the sorted values.
#[test]
fn test_into_vec_and_as_ref() {
    let out = output(vec![-1i64, 4, 9], Algorithm::Radix);

    assert_eq!(out.as_ref(), &[-1, 4, 9]);
    assert_eq!(out.into_vec(), vec![-1, 4, 9]);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the full Display output of a short result.
///
/// Verifies the summary block, blank separator and value list.
#[test]
fn test_display_full() {
    let out = output(vec![1, 2, 3], Algorithm::Merge);

    let expected = "Summary:\n\
                    \x20 Algorithm:   merge sort\n\
                    \x20 Elements:    3\n\
                    \x20 Stable:      yes\n\
                    \x20 Time:        best O(n log n), average O(n log n), worst O(n log n)\n\
                    \x20 Space:       O(n)\n\
                    \n\
                    Sorted Data:\n\
                    \x20 [1, 2, 3]\n";

    assert_eq!(format!("{out}"), expected);
}

/// Test Display of an unstable algorithm.
///
/// Verifies the stability line reads "no".
#[test]
fn test_display_unstable() {
    let text = format!("{}", output(vec![5], Algorithm::QuickRandomized));

    assert!(text.contains("Algorithm:   quicksort (randomized)"));
    assert!(text.contains("Stable:      no"));
    assert!(text.contains("worst O(n²)"));
}

/// Test Display of an empty output.
///
/// Verifies an empty list is printed.
#[test]
fn test_display_empty() {
    let text = format!("{}", output(Vec::<i32>::new(), Algorithm::Counting));

    assert!(text.contains("Elements:    0"));
    assert_eq!(data_line(&text), "  []");
}

/// Test Display of negative values.
///
/// Verifies values are printed with their sign.
#[test]
fn test_display_negative() {
    let text = format!("{}", output(vec![-3, -3, 0, 2, 5], Algorithm::Bucket));

    assert_eq!(data_line(&text), "  [-3, -3, 0, 2, 5]");
}

// ============================================================================
// Truncation Tests
// ============================================================================

/// Test Display truncates long outputs.
///
/// Verifies the first and last ten values surround an ellipsis.
#[test]
fn test_display_truncates_long_output() {
    let values: Vec<i32> = (0..25).collect();
    let text = format!("{}", output(values, Algorithm::Merge));

    assert!(text.contains("Elements:    25"));
    assert_eq!(
        data_line(&text),
        "  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, ..., 15, 16, 17, 18, 19, 20, 21, 22, 23, 24]"
    );
}

/// Test Display at the truncation boundary.
///
/// Verifies twenty values are printed in full.
#[test]
fn test_display_boundary_not_truncated() {
    let values: Vec<i32> = (0..20).collect();
    let text = format!("{}", output(values, Algorithm::Merge));

    assert!(!data_line(&text).contains("..."));
    assert!(data_line(&text).ends_with("18, 19]"));
}

/// Test Display just past the truncation boundary.
///
/// Verifies twenty-one values hide exactly the middle one.
#[test]
fn test_display_boundary_truncated() {
    let values: Vec<i32> = (0..21).collect();
    let text = format!("{}", output(values, Algorithm::Merge));

    let line = data_line(&text);
    assert!(line.contains("9, ..., 11"));
    assert!(!line.contains(" 10,"));
}
