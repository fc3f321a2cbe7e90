//! Output type for sort runs.
//!
//! ## Purpose
//!
//! This module defines `SortOutput`, the sorted values together with the
//! algorithm that produced them.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//! * **Conversion**: `into_vec` hands back the plain vector.
//!
//! ## Invariants
//!
//! * `values` is in non-decreasing order.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.
//! * This module does not provide serialization/deserialization logic.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::engine::catalog::{Algorithm, AlgorithmProperties};

/// Number of leading and trailing values shown by `Display`.
const PREVIEW: usize = 10;

// ============================================================================
// Result Structure
// ============================================================================

/// Sorted values and the algorithm that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutput<T> {
    /// Values in non-decreasing order.
    pub values: Vec<T>,

    /// Algorithm used.
    pub algorithm: Algorithm,
}

impl<T> SortOutput<T> {
    /// Number of sorted values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the output is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Properties of the algorithm used.
    pub fn properties(&self) -> AlgorithmProperties {
        self.algorithm.properties()
    }

    /// Consume the output and return the sorted values.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> AsRef<[T]> for SortOutput<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for SortOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let props = self.properties();

        writeln!(f, "Summary:")?;
        writeln!(f, "  Algorithm:   {}", props.name)?;
        writeln!(f, "  Elements:    {}", self.values.len())?;
        writeln!(f, "  Stable:      {}", if props.stable { "yes" } else { "no" })?;
        writeln!(
            f,
            "  Time:        best {}, average {}, worst {}",
            props.best, props.average, props.worst
        )?;
        writeln!(f, "  Space:       {}", props.space)?;
        writeln!(f)?;

        writeln!(f, "Sorted Data:")?;

        // Show the first and last PREVIEW values of long outputs
        let n = self.values.len();
        write!(f, "  [")?;
        for (i, value) in self.values.iter().enumerate() {
            if n > 2 * PREVIEW && i >= PREVIEW && i < n - PREVIEW {
                if i == PREVIEW {
                    write!(f, ", ...")?;
                }
                continue;
            }
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        writeln!(f, "]")
    }
}
